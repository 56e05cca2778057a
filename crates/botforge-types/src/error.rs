use thiserror::Error;

/// Errors from bot workspace lifecycle operations (create, delete, inspect,
/// config update).
#[derive(Debug, Error)]
pub enum BotError {
    #[error("bot '{0}' not found")]
    NotFound(String),

    #[error("a bot named '{0}' already exists")]
    AlreadyExists(String),

    #[error("invalid request: {0}")]
    Invalid(String),

    #[error("entrypoint template fetch failed: {0}")]
    TemplateFetch(String),

    #[error("config file for bot '{0}' not found")]
    ConfigMissing(String),

    #[error("config for bot '{bot}' is not valid JSON: {detail}")]
    ConfigInvalid { bot: String, detail: String },

    #[error("filesystem error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from plugin installation.
///
/// A missing bot and an unresolvable plugin are both not-found conditions
/// but stay separate variants so the messages name the right entity.
#[derive(Debug, Error)]
pub enum PluginError {
    #[error("invalid request: {0}")]
    Invalid(String),

    #[error("bot '{0}' not found")]
    BotNotFound(String),

    #[error("plugin '{0}' not found in the registry")]
    NotFound(String),

    #[error("plugin '{plugin}' is already installed for bot '{bot}'")]
    AlreadyInstalled { bot: String, plugin: String },

    #[error("plugin registry lookup failed: {0}")]
    Registry(String),

    #[error("repository fetch failed: {0}")]
    Fetch(String),

    #[error("filesystem error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from boundary collaborators (template source, plugin registry,
/// repository fetcher). Used by the port trait definitions in botforge-core;
/// services translate these into the richer domain errors above.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),
}
