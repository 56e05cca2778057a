use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request to create a new bot. Both fields are required; validation happens
/// in the service layer before anything touches disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBotRequest {
    /// Bot name, also the workspace directory basename.
    pub name: String,
    /// Token written into the default config as `bot_token`.
    pub token: String,
}

/// A freshly created bot workspace.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotCreated {
    pub name: String,
    /// Absolute path of the created directory.
    pub directory: PathBuf,
}

/// Composite read-only view of a bot assembled by the inspector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotDetails {
    pub name: String,
    pub directory: PathBuf,
    /// Contents of `manifest.json` if present and readable, else `null`.
    pub manifest: Option<Value>,
    /// Names of the installed plugin directories.
    pub plugins: Vec<String>,
    /// Parsed contents of `config.json` (required file).
    pub config: Value,
}

/// Validate a bot name for use as a workspace directory basename.
///
/// Rules:
/// - non-empty
/// - no path separators
/// - not `.` or `..`
///
/// Returns a description of the problem when the name is rejected.
pub fn validate_bot_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("name is required".to_string());
    }
    if name == "." || name == ".." {
        return Err(format!("'{name}' is not a valid bot name"));
    }
    if name.contains('/') || name.contains('\\') {
        return Err("name must not contain path separators".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_plain_names() {
        assert!(validate_bot_name("luna").is_ok());
        assert!(validate_bot_name("my-bot-2").is_ok());
        assert!(validate_bot_name("Bot_01").is_ok());
    }

    #[test]
    fn test_validate_rejects_empty() {
        assert!(validate_bot_name("").is_err());
    }

    #[test]
    fn test_validate_rejects_dot_names() {
        assert!(validate_bot_name(".").is_err());
        assert!(validate_bot_name("..").is_err());
    }

    #[test]
    fn test_validate_rejects_path_separators() {
        assert!(validate_bot_name("a/b").is_err());
        assert!(validate_bot_name("..\\evil").is_err());
        assert!(validate_bot_name("/etc").is_err());
    }

    #[test]
    fn test_bot_details_serializes_null_manifest() {
        let details = BotDetails {
            name: "luna".to_string(),
            directory: PathBuf::from("/data/bots/luna"),
            manifest: None,
            plugins: vec![],
            config: serde_json::json!({"bot_token": "t", "prefix": "!"}),
        };
        let json = serde_json::to_value(&details).unwrap();
        assert!(json["manifest"].is_null());
        assert_eq!(json["plugins"], serde_json::json!([]));
    }
}
