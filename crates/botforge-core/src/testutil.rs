//! Shared test doubles for the service test suites: a tokio-backed
//! `FileSystem` operating on temp directories and stub implementations of
//! the collaborator ports.

use std::collections::HashMap;
use std::path::Path;

use botforge_types::error::UpstreamError;
use botforge_types::plugin::ResolvedPlugin;
use tempfile::TempDir;

use crate::service::fs::FileSystem;
use crate::service::registry::{PluginRegistry, RepoFetcher};
use crate::service::template::TemplateSource;
use crate::workspace::Workspace;

/// Workspace rooted in a fresh subdirectory of a temp dir.
pub(crate) fn workspace_in(dir: &TempDir) -> Workspace {
    Workspace::new(dir.path().join("bots"))
}

/// Real filesystem I/O through tokio, for tests only. The production
/// adapter lives in botforge-infra, which core cannot depend on.
pub(crate) struct TokioFs;

impl FileSystem for TokioFs {
    async fn write_file(&self, path: &Path, content: &str) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(path, content).await
    }

    async fn read_file(&self, path: &Path) -> Result<String, std::io::Error> {
        tokio::fs::read_to_string(path).await
    }

    async fn create_dir(&self, path: &Path) -> Result<(), std::io::Error> {
        tokio::fs::create_dir(path).await
    }

    async fn create_dir_all(&self, path: &Path) -> Result<(), std::io::Error> {
        tokio::fs::create_dir_all(path).await
    }

    async fn exists(&self, path: &Path) -> bool {
        tokio::fs::try_exists(path).await.unwrap_or(false)
    }

    async fn remove_dir_all(&self, path: &Path) -> Result<(), std::io::Error> {
        tokio::fs::remove_dir_all(path).await
    }

    async fn list_dirs(&self, path: &Path) -> Result<Vec<String>, std::io::Error> {
        let mut entries = tokio::fs::read_dir(path).await?;
        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            if entry.file_type().await?.is_dir() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        Ok(names)
    }
}

/// Template source returning a fixed document.
pub(crate) struct StaticTemplate(pub String);

impl StaticTemplate {
    pub(crate) fn hello() -> Self {
        Self("// bot entrypoint\nconsole.log(\"ready\");\n".to_string())
    }
}

impl TemplateSource for StaticTemplate {
    async fn fetch(&self) -> Result<String, UpstreamError> {
        Ok(self.0.clone())
    }
}

/// Template source that always fails, simulating an unreachable upstream.
pub(crate) struct FailingTemplate;

impl TemplateSource for FailingTemplate {
    async fn fetch(&self) -> Result<String, UpstreamError> {
        Err(UpstreamError::Request("connection refused".to_string()))
    }
}

/// Registry with a fixed name -> repository table.
pub(crate) struct StaticRegistry {
    entries: HashMap<String, String>,
}

impl StaticRegistry {
    pub(crate) fn with_entry(name: &str, repository: &str) -> Self {
        let mut entries = HashMap::new();
        entries.insert(name.to_string(), repository.to_string());
        Self { entries }
    }
}

impl PluginRegistry for StaticRegistry {
    async fn resolve(&self, name: &str) -> Result<Option<ResolvedPlugin>, UpstreamError> {
        Ok(self.entries.get(name).map(|repository| ResolvedPlugin {
            name: name.to_string(),
            repository: repository.clone(),
        }))
    }
}

/// Registry that always fails, simulating a metadata-service outage.
pub(crate) struct FailingRegistry;

impl PluginRegistry for FailingRegistry {
    async fn resolve(&self, _name: &str) -> Result<Option<ResolvedPlugin>, UpstreamError> {
        Err(UpstreamError::Request("registry unreachable".to_string()))
    }
}

/// Fetcher that materializes a one-file checkout recording the clone URL.
pub(crate) struct MarkerFetcher;

impl RepoFetcher for MarkerFetcher {
    async fn materialize(&self, repo_url: &str, dest: &Path) -> Result<(), UpstreamError> {
        tokio::fs::create_dir_all(dest)
            .await
            .map_err(|e| UpstreamError::Request(e.to_string()))?;
        tokio::fs::write(dest.join("ORIGIN"), repo_url)
            .await
            .map_err(|e| UpstreamError::Request(e.to_string()))?;
        Ok(())
    }
}

/// Fetcher that always fails, simulating a clone failure.
pub(crate) struct FailingFetcher;

impl RepoFetcher for FailingFetcher {
    async fn materialize(&self, _repo_url: &str, _dest: &Path) -> Result<(), UpstreamError> {
        Err(UpstreamError::Request(
            "remote repository not reachable".to_string(),
        ))
    }
}
