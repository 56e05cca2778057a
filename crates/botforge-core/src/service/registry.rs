//! Ports for plugin resolution and repository fetching.

use std::path::Path;

use botforge_types::error::UpstreamError;
use botforge_types::plugin::ResolvedPlugin;

/// Maps a plugin name to a clonable repository via the external metadata
/// service.
///
/// `Ok(None)` means the registry has no usable entry for the name -- the
/// caller reports that as not-found, distinct from a registry failure.
pub trait PluginRegistry: Send + Sync {
    fn resolve(
        &self,
        name: &str,
    ) -> impl std::future::Future<Output = Result<Option<ResolvedPlugin>, UpstreamError>> + Send;
}

/// Materializes a full repository tree into a destination directory.
///
/// Single-method capability so the underlying mechanism (git clone, tarball
/// download, ...) can be swapped without touching the lifecycle logic. The
/// fetch is all-or-nothing from the caller's perspective; no partial-clone
/// recovery is attempted.
pub trait RepoFetcher: Send + Sync {
    fn materialize(
        &self,
        repo_url: &str,
        dest: &Path,
    ) -> impl std::future::Future<Output = Result<(), UpstreamError>> + Send;
}
