//! Per-bot config document store: read-modify-write with shallow merge.

use std::io::ErrorKind;

use botforge_types::bot::validate_bot_name;
use botforge_types::config::shallow_merge;
use botforge_types::error::BotError;
use serde_json::{Map, Value};

use crate::service::fs::FileSystem;
use crate::workspace::Workspace;

/// Owns reads and writes of `config.json` for mutation paths.
///
/// The inspector reads the config with different error semantics (a missing
/// file there is an IO failure, here it is a not-found), so the two do not
/// share a read path.
pub struct ConfigStore<F: FileSystem> {
    fs: F,
    workspace: Workspace,
}

impl<F: FileSystem> ConfigStore<F> {
    pub fn new(fs: F, workspace: Workspace) -> Self {
        Self { fs, workspace }
    }

    /// Shallow-merge `patch` into the stored document and persist the result.
    ///
    /// Patch keys overwrite, absent keys are preserved, nested values are
    /// replaced wholesale. Returns the merged document.
    pub async fn update(
        &self,
        name: &str,
        patch: Map<String, Value>,
    ) -> Result<Map<String, Value>, BotError> {
        if validate_bot_name(name).is_err() {
            return Err(BotError::NotFound(name.to_string()));
        }

        if !self.fs.exists(&self.workspace.bot_dir(name)).await {
            return Err(BotError::NotFound(name.to_string()));
        }

        let config_path = self.workspace.config_path(name);
        let raw = match self.fs.read_file(&config_path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(BotError::ConfigMissing(name.to_string()));
            }
            Err(e) => return Err(e.into()),
        };

        // Top-level must be an object; anything else is corrupt state.
        let mut current: Map<String, Value> =
            serde_json::from_str(&raw).map_err(|e| BotError::ConfigInvalid {
                bot: name.to_string(),
                detail: e.to_string(),
            })?;

        shallow_merge(&mut current, patch);

        let body = serde_json::to_string_pretty(&Value::Object(current.clone()))
            .expect("config document serializes");
        self.fs.write_file(&config_path, &body).await?;

        tracing::debug!(bot = %name, "config updated");
        Ok(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{TokioFs, workspace_in};
    use serde_json::json;
    use tempfile::tempdir;

    fn patch(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(m) => m,
            other => panic!("expected object, got {other}"),
        }
    }

    fn seed_config(ws: &Workspace, name: &str, content: &str) {
        std::fs::create_dir_all(ws.bot_dir(name)).unwrap();
        std::fs::write(ws.config_path(name), content).unwrap();
    }

    #[tokio::test]
    async fn test_patches_accumulate_without_losing_keys() {
        let dir = tempdir().unwrap();
        let ws = workspace_in(&dir);
        seed_config(&ws, "luna", r#"{"bot_token": "t", "prefix": "!"}"#);

        let store = ConfigStore::new(TokioFs, ws.clone());
        store.update("luna", patch(json!({"prefix": "?"}))).await.unwrap();
        let merged = store.update("luna", patch(json!({"extra": "v"}))).await.unwrap();

        assert_eq!(
            Value::Object(merged),
            json!({"bot_token": "t", "prefix": "?", "extra": "v"})
        );

        // Persisted state matches what was returned.
        let on_disk: Value =
            serde_json::from_str(&std::fs::read_to_string(ws.config_path("luna")).unwrap())
                .unwrap();
        assert_eq!(on_disk, json!({"bot_token": "t", "prefix": "?", "extra": "v"}));
    }

    #[tokio::test]
    async fn test_update_missing_bot() {
        let dir = tempdir().unwrap();
        let store = ConfigStore::new(TokioFs, workspace_in(&dir));
        let err = store.update("ghost", Map::new()).await.unwrap_err();
        assert!(matches!(err, BotError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_update_missing_config_file() {
        let dir = tempdir().unwrap();
        let ws = workspace_in(&dir);
        std::fs::create_dir_all(ws.bot_dir("luna")).unwrap();

        let store = ConfigStore::new(TokioFs, ws);
        let err = store.update("luna", Map::new()).await.unwrap_err();
        assert!(matches!(err, BotError::ConfigMissing(_)));
    }

    #[tokio::test]
    async fn test_update_malformed_config() {
        let dir = tempdir().unwrap();
        let ws = workspace_in(&dir);
        seed_config(&ws, "luna", "[1, 2, 3]");

        let store = ConfigStore::new(TokioFs, ws);
        let err = store.update("luna", Map::new()).await.unwrap_err();
        assert!(matches!(err, BotError::ConfigInvalid { .. }));
    }

    #[tokio::test]
    async fn test_written_config_round_trips() {
        let dir = tempdir().unwrap();
        let ws = workspace_in(&dir);
        seed_config(&ws, "luna", r#"{"bot_token": "t", "prefix": "!"}"#);

        let store = ConfigStore::new(TokioFs, ws.clone());
        store
            .update("luna", patch(json!({"nested": {"deep": true}, "n": 42})))
            .await
            .unwrap();

        // Whatever update writes must be valid JSON for any later reader.
        let raw = std::fs::read_to_string(ws.config_path("luna")).unwrap();
        let reparsed: Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(reparsed["nested"], json!({"deep": true}));
        assert_eq!(reparsed["n"], json!(42));
    }
}
