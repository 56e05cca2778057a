//! Plugin installation service.
//!
//! Installation is resolve-then-fetch: the plugin name is resolved through
//! the external registry first, and only a successful resolution may touch
//! the filesystem. A plugin directory, once created, is never overwritten.

use botforge_types::bot::validate_bot_name;
use botforge_types::error::PluginError;
use botforge_types::plugin::InstalledPlugin;

use crate::service::fs::FileSystem;
use crate::service::registry::{PluginRegistry, RepoFetcher};
use crate::workspace::Workspace;

/// Service installing plugins into bot workspaces.
pub struct PluginService<F: FileSystem, R: PluginRegistry, G: RepoFetcher> {
    fs: F,
    registry: R,
    fetcher: G,
    workspace: Workspace,
}

impl<F: FileSystem, R: PluginRegistry, G: RepoFetcher> PluginService<F, R, G> {
    pub fn new(fs: F, registry: R, fetcher: G, workspace: Workspace) -> Self {
        Self {
            fs,
            registry,
            fetcher,
            workspace,
        }
    }

    /// Install `plugin` into `bot`'s workspace.
    ///
    /// Steps, in order:
    /// 1. The bot directory must exist.
    /// 2. Ensure `plugins/` exists (bots created before the plugins-folder
    ///    convention get one here).
    /// 3. Resolve the plugin name through the registry. An unresolvable
    ///    name fails here, before any plugin-directory state exists.
    /// 4. Reject if the target directory already exists -- no fetch is
    ///    attempted over an existing checkout.
    /// 5. Materialize the repository tree into the target directory.
    ///
    /// Between steps 4 and 5 there is a window where two racing installs of
    /// the same plugin can both pass the existence check; the second clone
    /// then fails on the non-empty destination. Accepted, not closed.
    /// A failed fetch leaves whatever partial state the fetcher wrote.
    pub async fn install(&self, bot: &str, plugin: &str) -> Result<InstalledPlugin, PluginError> {
        validate_bot_name(bot).map_err(PluginError::Invalid)?;
        if plugin.is_empty()
            || plugin == "."
            || plugin == ".."
            || plugin.contains('/')
            || plugin.contains('\\')
        {
            return Err(PluginError::Invalid(format!(
                "'{plugin}' is not a valid plugin name"
            )));
        }

        let bot_dir = self.workspace.bot_dir(bot);
        if !self.fs.exists(&bot_dir).await {
            return Err(PluginError::BotNotFound(bot.to_string()));
        }

        self.fs
            .create_dir_all(&self.workspace.plugins_dir(bot))
            .await?;

        let resolved = match self.registry.resolve(plugin).await {
            Ok(Some(resolved)) => resolved,
            Ok(None) => return Err(PluginError::NotFound(plugin.to_string())),
            Err(e) => return Err(PluginError::Registry(e.to_string())),
        };

        let dest = self.workspace.plugin_dir(bot, plugin);
        if self.fs.exists(&dest).await {
            return Err(PluginError::AlreadyInstalled {
                bot: bot.to_string(),
                plugin: plugin.to_string(),
            });
        }

        let clone_url = resolved.clone_url();
        self.fetcher
            .materialize(&clone_url, &dest)
            .await
            .map_err(|e| PluginError::Fetch(e.to_string()))?;

        tracing::info!(bot = %bot, plugin = %plugin, repo = %resolved.repository, "plugin installed");

        Ok(InstalledPlugin {
            bot: bot.to_string(),
            plugin: plugin.to_string(),
            repository: resolved.repository,
            directory: dest,
        })
    }
}
