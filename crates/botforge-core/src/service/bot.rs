//! Bot lifecycle service: list, create, delete.
//!
//! Creating a bot scaffolds a complete workspace: the bot directory, an
//! empty `plugins/` subfolder, the entrypoint file fetched from the remote
//! template source, and a default `config.json`. Creation is NOT
//! transactional -- a failure partway through leaves whatever was already
//! written, and a retry of the same name is blocked by the existing
//! directory until the caller deletes it.

use std::io::ErrorKind;

use botforge_types::bot::{BotCreated, CreateBotRequest, validate_bot_name};
use botforge_types::config::default_config;
use botforge_types::error::BotError;
use serde_json::Value;

use crate::service::fs::FileSystem;
use crate::service::template::TemplateSource;
use crate::workspace::Workspace;

/// Service orchestrating the bot workspace lifecycle.
///
/// Generic over the filesystem and template-source ports so botforge-core
/// never depends on botforge-infra.
pub struct BotService<F: FileSystem, T: TemplateSource> {
    fs: F,
    template: T,
    workspace: Workspace,
}

impl<F: FileSystem, T: TemplateSource> BotService<F, T> {
    pub fn new(fs: F, template: T, workspace: Workspace) -> Self {
        Self {
            fs,
            template,
            workspace,
        }
    }

    /// Names of all bot directories under the workspace root, sorted.
    ///
    /// A missing or empty root yields an empty list; plain files under the
    /// root are ignored.
    pub async fn list(&self) -> Result<Vec<String>, BotError> {
        match self.fs.list_dirs(self.workspace.root()).await {
            Ok(mut names) => {
                names.sort();
                Ok(names)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Create a new bot workspace.
    ///
    /// Steps, in order:
    /// 1. Validate name and token (nothing touched on failure).
    /// 2. Exclusively create the bot directory. The create itself is the
    ///    race arbiter: a pre-existing directory surfaces as
    ///    [`BotError::AlreadyExists`], never a generic IO failure.
    /// 3. Create the empty `plugins/` subfolder.
    /// 4. Fetch the remote entrypoint template and write it verbatim.
    /// 5. Write the default config `{"bot_token": token, "prefix": "!"}`.
    ///
    /// No rollback on failure: a failed template fetch leaves the directory
    /// and `plugins/` behind, and the name stays taken.
    pub async fn create(&self, request: &CreateBotRequest) -> Result<BotCreated, BotError> {
        validate_bot_name(&request.name).map_err(BotError::Invalid)?;
        if request.token.is_empty() {
            return Err(BotError::Invalid("token is required".to_string()));
        }

        self.fs.create_dir_all(self.workspace.root()).await?;

        let bot_dir = self.workspace.bot_dir(&request.name);
        match self.fs.create_dir(&bot_dir).await {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                return Err(BotError::AlreadyExists(request.name.clone()));
            }
            Err(e) => return Err(e.into()),
        }

        self.fs
            .create_dir(&self.workspace.plugins_dir(&request.name))
            .await?;

        let entrypoint = self
            .template
            .fetch()
            .await
            .map_err(|e| BotError::TemplateFetch(e.to_string()))?;
        self.fs
            .write_file(&self.workspace.entrypoint_path(&request.name), &entrypoint)
            .await?;

        let config = Value::Object(default_config(&request.token));
        let body = serde_json::to_string_pretty(&config).expect("config document serializes");
        self.fs
            .write_file(&self.workspace.config_path(&request.name), &body)
            .await?;

        tracing::info!(bot = %request.name, dir = %bot_dir.display(), "bot workspace created");

        Ok(BotCreated {
            name: request.name.clone(),
            directory: bot_dir,
        })
    }

    /// Recursively remove a bot workspace, plugins included. Irreversible.
    ///
    /// Deleting an absent bot fails with [`BotError::NotFound`] -- repeated
    /// deletes do not silently succeed.
    pub async fn delete(&self, name: &str) -> Result<(), BotError> {
        // A name that can't be a directory basename can't name an existing bot.
        if validate_bot_name(name).is_err() {
            return Err(BotError::NotFound(name.to_string()));
        }

        let bot_dir = self.workspace.bot_dir(name);
        if !self.fs.exists(&bot_dir).await {
            return Err(BotError::NotFound(name.to_string()));
        }

        match self.fs.remove_dir_all(&bot_dir).await {
            Ok(()) => {
                tracing::info!(bot = %name, "bot workspace deleted");
                Ok(())
            }
            // Lost a race with another delete: still a not-found, not an IO error.
            Err(e) if e.kind() == ErrorKind::NotFound => Err(BotError::NotFound(name.to_string())),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{FailingTemplate, StaticTemplate, TokioFs, workspace_in};
    use tempfile::tempdir;

    fn service(ws: Workspace) -> BotService<TokioFs, StaticTemplate> {
        BotService::new(TokioFs, StaticTemplate::hello(), ws)
    }

    fn request(name: &str, token: &str) -> CreateBotRequest {
        CreateBotRequest {
            name: name.to_string(),
            token: token.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_scaffolds_full_workspace() {
        let dir = tempdir().unwrap();
        let ws = workspace_in(&dir);
        let svc = service(ws.clone());

        let created = svc.create(&request("luna", "tok-1")).await.unwrap();
        assert_eq!(created.name, "luna");
        assert_eq!(created.directory, ws.bot_dir("luna"));

        assert!(ws.plugins_dir("luna").is_dir());
        let entrypoint = std::fs::read_to_string(ws.entrypoint_path("luna")).unwrap();
        assert_eq!(entrypoint, StaticTemplate::hello().0);

        let config: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(ws.config_path("luna")).unwrap())
                .unwrap();
        assert_eq!(config["bot_token"], "tok-1");
        assert_eq!(config["prefix"], "!");
    }

    #[tokio::test]
    async fn test_create_twice_reports_already_exists() {
        let dir = tempdir().unwrap();
        let svc = service(workspace_in(&dir));

        svc.create(&request("luna", "tok")).await.unwrap();
        let err = svc.create(&request("luna", "other")).await.unwrap_err();
        assert!(matches!(err, BotError::AlreadyExists(name) if name == "luna"));

        // First call's effects are untouched.
        let ws = workspace_in(&dir);
        let config = std::fs::read_to_string(ws.config_path("luna")).unwrap();
        assert!(config.contains("tok"));
    }

    #[tokio::test]
    async fn test_create_validates_name_and_token() {
        let dir = tempdir().unwrap();
        let ws = workspace_in(&dir);
        let svc = service(ws.clone());

        let err = svc.create(&request("", "tok")).await.unwrap_err();
        assert!(matches!(err, BotError::Invalid(_)));

        let err = svc.create(&request("luna", "")).await.unwrap_err();
        assert!(matches!(err, BotError::Invalid(_)));

        let err = svc.create(&request("../escape", "tok")).await.unwrap_err();
        assert!(matches!(err, BotError::Invalid(_)));

        // Validation failures touch nothing.
        assert!(!ws.bot_dir("luna").exists());
    }

    #[tokio::test]
    async fn test_template_failure_leaves_partial_workspace() {
        let dir = tempdir().unwrap();
        let ws = workspace_in(&dir);
        let svc = BotService::new(TokioFs, FailingTemplate, ws.clone());

        let err = svc.create(&request("luna", "tok")).await.unwrap_err();
        assert!(matches!(err, BotError::TemplateFetch(_)));

        // Directory and plugins folder remain; entrypoint and config were
        // never written; the name stays taken for a retry.
        assert!(ws.plugins_dir("luna").is_dir());
        assert!(!ws.entrypoint_path("luna").exists());
        assert!(!ws.config_path("luna").exists());

        let svc = service(ws);
        let err = svc.create(&request("luna", "tok")).await.unwrap_err();
        assert!(matches!(err, BotError::AlreadyExists(_)));
    }

    #[tokio::test]
    async fn test_list_empty_and_after_creates() {
        let dir = tempdir().unwrap();
        let svc = service(workspace_in(&dir));

        assert!(svc.list().await.unwrap().is_empty());

        svc.create(&request("b", "tok")).await.unwrap();
        svc.create(&request("a", "tok")).await.unwrap();
        assert_eq!(svc.list().await.unwrap(), vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_list_ignores_plain_files_and_missing_root() {
        let dir = tempdir().unwrap();
        let ws = workspace_in(&dir);

        // Root does not exist yet.
        let svc = service(Workspace::new(ws.root().join("nowhere")));
        assert!(svc.list().await.unwrap().is_empty());

        let svc = service(ws.clone());
        svc.create(&request("a", "tok")).await.unwrap();
        std::fs::write(ws.root().join("stray.txt"), "not a bot").unwrap();
        assert_eq!(svc.list().await.unwrap(), vec!["a"]);
    }

    #[tokio::test]
    async fn test_delete_then_delete_again() {
        let dir = tempdir().unwrap();
        let ws = workspace_in(&dir);
        let svc = service(ws.clone());

        svc.create(&request("luna", "tok")).await.unwrap();
        svc.delete("luna").await.unwrap();
        assert!(!ws.bot_dir("luna").exists());

        let err = svc.delete("luna").await.unwrap_err();
        assert!(matches!(err, BotError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_removes_installed_plugins() {
        let dir = tempdir().unwrap();
        let ws = workspace_in(&dir);
        let svc = service(ws.clone());

        svc.create(&request("luna", "tok")).await.unwrap();
        let plugin_dir = ws.plugin_dir("luna", "greeter");
        std::fs::create_dir_all(&plugin_dir).unwrap();
        std::fs::write(plugin_dir.join("index.js"), "// plugin").unwrap();

        svc.delete("luna").await.unwrap();
        assert!(!plugin_dir.exists());
    }
}
