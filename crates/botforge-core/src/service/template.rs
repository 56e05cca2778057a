//! TemplateSource trait: the remote source of the bot entrypoint file.

use botforge_types::error::UpstreamError;

/// Fetches the entrypoint template written verbatim into every new bot.
///
/// The HTTP implementation lives in botforge-infra; tests substitute a
/// canned template.
pub trait TemplateSource: Send + Sync {
    /// Fetch the literal template contents.
    fn fetch(
        &self,
    ) -> impl std::future::Future<Output = Result<String, UpstreamError>> + Send;
}
