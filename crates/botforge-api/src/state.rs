//! Application state wiring all services together.
//!
//! AppState holds the concrete service instances used by both CLI and REST
//! API. Services are generic over the port traits, but AppState pins them
//! to the concrete infra implementations.

use std::sync::Arc;

use botforge_core::service::bot::BotService;
use botforge_core::service::config::ConfigStore;
use botforge_core::service::inspect::BotInspector;
use botforge_core::service::plugin::PluginService;
use botforge_core::workspace::Workspace;
use botforge_infra::filesystem::{LocalFileSystem, resolve_data_dir};
use botforge_infra::git::GitFetcher;
use botforge_infra::registry::HttpPluginRegistry;
use botforge_infra::template::HttpTemplateSource;

/// Concrete type aliases for the service generics pinned to infra implementations.
pub type ConcreteBotService = BotService<LocalFileSystem, HttpTemplateSource>;
pub type ConcretePluginService = PluginService<LocalFileSystem, HttpPluginRegistry, GitFetcher>;
pub type ConcreteInspector = BotInspector<LocalFileSystem>;
pub type ConcreteConfigStore = ConfigStore<LocalFileSystem>;

/// Shared application state holding all services.
///
/// Used by both CLI commands and REST API handlers.
#[derive(Clone)]
pub struct AppState {
    pub bot_service: Arc<ConcreteBotService>,
    pub plugin_service: Arc<ConcretePluginService>,
    pub inspector: Arc<ConcreteInspector>,
    pub config_store: Arc<ConcreteConfigStore>,
    pub workspace: Workspace,
}

impl AppState {
    /// Initialize the application state: resolve the workspace root, make
    /// sure it exists, wire services.
    pub async fn init() -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir();
        let workspace = Workspace::new(data_dir.join("bots"));

        // The root must exist before anything else runs.
        tokio::fs::create_dir_all(workspace.root()).await?;

        let template = match std::env::var("BOTFORGE_TEMPLATE_URL") {
            Ok(url) => HttpTemplateSource::with_url(url),
            Err(_) => HttpTemplateSource::new(),
        };
        let registry = match std::env::var("BOTFORGE_REGISTRY_URL") {
            Ok(url) => HttpPluginRegistry::with_base_url(url),
            Err(_) => HttpPluginRegistry::new(),
        };

        let bot_service = Arc::new(BotService::new(
            LocalFileSystem::new(),
            template,
            workspace.clone(),
        ));
        let plugin_service = Arc::new(PluginService::new(
            LocalFileSystem::new(),
            registry,
            GitFetcher::new(),
            workspace.clone(),
        ));
        let inspector = Arc::new(BotInspector::new(LocalFileSystem::new(), workspace.clone()));
        let config_store = Arc::new(ConfigStore::new(LocalFileSystem::new(), workspace.clone()));

        tracing::info!(root = %workspace.root().display(), "workspace initialized");

        Ok(Self {
            bot_service,
            plugin_service,
            inspector,
            config_store,
            workspace,
        })
    }
}
