//! Application error type mapping to HTTP status codes and envelope format.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use botforge_types::error::{BotError, PluginError};

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Bot lifecycle, inspection, and config errors.
    Bot(BotError),
    /// Plugin installation errors.
    Plugin(PluginError),
    /// Validation error raised in the transport layer itself.
    Validation(String),
    /// Generic internal error.
    Internal(String),
}

impl From<BotError> for AppError {
    fn from(e: BotError) -> Self {
        AppError::Bot(e)
    }
}

impl From<PluginError> for AppError {
    fn from(e: PluginError) -> Self {
        AppError::Plugin(e)
    }
}

impl AppError {
    /// (status, machine-readable code, human-readable message) for the wire.
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::Bot(e) => match e {
                BotError::NotFound(name) => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("Bot '{name}' not found"),
                ),
                BotError::AlreadyExists(name) => (
                    StatusCode::CONFLICT,
                    "ALREADY_EXISTS",
                    format!("A bot with the name '{name}' already exists"),
                ),
                BotError::Invalid(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                BotError::TemplateFetch(_) => {
                    (StatusCode::BAD_GATEWAY, "UPSTREAM_ERROR", e.to_string())
                }
                BotError::ConfigMissing(name) => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("Config file for bot '{name}' not found"),
                ),
                BotError::ConfigInvalid { .. } => {
                    (StatusCode::INTERNAL_SERVER_ERROR, "PARSE_ERROR", e.to_string())
                }
                BotError::Io(_) => {
                    (StatusCode::INTERNAL_SERVER_ERROR, "IO_ERROR", e.to_string())
                }
            },
            AppError::Plugin(e) => match e {
                PluginError::Invalid(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                PluginError::BotNotFound(name) => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("Bot '{name}' not found"),
                ),
                PluginError::NotFound(name) => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("Plugin '{name}' not found"),
                ),
                PluginError::AlreadyInstalled { bot, plugin } => (
                    StatusCode::CONFLICT,
                    "ALREADY_EXISTS",
                    format!("Plugin '{plugin}' is already installed for bot '{bot}'"),
                ),
                PluginError::Registry(_) | PluginError::Fetch(_) => {
                    (StatusCode::BAD_GATEWAY, "UPSTREAM_ERROR", e.to_string())
                }
                PluginError::Io(_) => {
                    (StatusCode::INTERNAL_SERVER_ERROR, "IO_ERROR", e.to_string())
                }
            },
            AppError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }
            AppError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", msg.clone())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();

        let body = json!({
            "data": null,
            "meta": {
                "request_id": "",
                "timestamp": chrono::Utc::now().to_rfc3339(),
                "response_time_ms": 0
            },
            "errors": [{
                "code": code,
                "message": message,
            }]
        });

        (
            status,
            [(axum::http::header::CONTENT_TYPE, "application/json")],
            body.to_string(),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let (status, code, message) =
            AppError::Bot(BotError::NotFound("luna".to_string())).parts();
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(code, "NOT_FOUND");
        assert!(message.contains("luna"));
    }

    #[test]
    fn test_conflicts_map_to_409() {
        let (status, code, _) =
            AppError::Bot(BotError::AlreadyExists("luna".to_string())).parts();
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(code, "ALREADY_EXISTS");

        let (status, code, _) = AppError::Plugin(PluginError::AlreadyInstalled {
            bot: "luna".to_string(),
            plugin: "greeter".to_string(),
        })
        .parts();
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(code, "ALREADY_EXISTS");
    }

    #[test]
    fn test_upstream_failures_map_to_502() {
        let (status, code, _) =
            AppError::Bot(BotError::TemplateFetch("timeout".to_string())).parts();
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(code, "UPSTREAM_ERROR");

        let (status, _, _) =
            AppError::Plugin(PluginError::Registry("boom".to_string())).parts();
        assert_eq!(status, StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_parse_error_is_distinct_from_io() {
        let (status, code, _) = AppError::Bot(BotError::ConfigInvalid {
            bot: "luna".to_string(),
            detail: "trailing comma".to_string(),
        })
        .parts();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(code, "PARSE_ERROR");

        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let (status, code, _) = AppError::Bot(BotError::Io(io)).parts();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(code, "IO_ERROR");
    }

    #[test]
    fn test_bot_and_plugin_not_found_share_taxonomy_class() {
        let (_, bot_code, bot_msg) =
            AppError::Plugin(PluginError::BotNotFound("luna".to_string())).parts();
        let (_, plugin_code, plugin_msg) =
            AppError::Plugin(PluginError::NotFound("greeter".to_string())).parts();
        // Same class, different messages.
        assert_eq!(bot_code, plugin_code);
        assert_ne!(bot_msg, plugin_msg);
    }
}
