//! Read-only composite view of a bot workspace.

use std::io::ErrorKind;

use botforge_types::bot::{BotDetails, validate_bot_name};
use botforge_types::error::BotError;
use serde_json::Value;

use crate::service::fs::FileSystem;
use crate::workspace::Workspace;

/// Assembles the manifest / plugin list / config view of a single bot.
pub struct BotInspector<F: FileSystem> {
    fs: F,
    workspace: Workspace,
}

impl<F: FileSystem> BotInspector<F> {
    pub fn new(fs: F, workspace: Workspace) -> Self {
        Self { fs, workspace }
    }

    /// Inspect a bot.
    ///
    /// The manifest and the config are deliberately asymmetric:
    /// `manifest.json` is produced by external tooling and a missing or
    /// unreadable manifest is reported as absent, while `config.json` is
    /// owned by this engine and REQUIRED -- a missing file is an IO error
    /// and malformed JSON a parse error. A missing `plugins/` folder means
    /// zero plugins, not an error.
    pub async fn inspect(&self, name: &str) -> Result<BotDetails, BotError> {
        if validate_bot_name(name).is_err() {
            return Err(BotError::NotFound(name.to_string()));
        }

        let bot_dir = self.workspace.bot_dir(name);
        if !self.fs.exists(&bot_dir).await {
            return Err(BotError::NotFound(name.to_string()));
        }

        let manifest = match self.fs.read_file(&self.workspace.manifest_path(name)).await {
            Ok(raw) => serde_json::from_str::<Value>(&raw).ok(),
            Err(_) => None,
        };

        let plugins = match self.fs.list_dirs(&self.workspace.plugins_dir(name)).await {
            Ok(mut names) => {
                names.sort();
                names
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(e.into()),
        };

        let raw = self.fs.read_file(&self.workspace.config_path(name)).await?;
        let config: Value = serde_json::from_str(&raw).map_err(|e| BotError::ConfigInvalid {
            bot: name.to_string(),
            detail: e.to_string(),
        })?;

        Ok(BotDetails {
            name: name.to_string(),
            directory: bot_dir,
            manifest,
            plugins,
            config,
        })
    }
}
