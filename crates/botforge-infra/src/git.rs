//! Repository fetcher backed by the `git` binary.
//!
//! Implements the single-method `RepoFetcher` capability with a shallow
//! clone. From the lifecycle engine's perspective the fetch is opaque and
//! all-or-nothing; a failed clone may leave a partial directory at the
//! destination, which the engine's no-overwrite rule then treats as an
//! existing installation until the bot is deleted.

use std::ffi::OsString;
use std::path::Path;
use std::time::Duration;

use botforge_core::service::registry::RepoFetcher;
use botforge_types::error::UpstreamError;

/// Upper bound on a single clone. Without it a stalled remote would pin
/// the install request indefinitely.
const CLONE_TIMEOUT: Duration = Duration::from_secs(120);

/// Shallow-clones repositories with the system `git`.
pub struct GitFetcher;

impl GitFetcher {
    pub fn new() -> Self {
        Self
    }
}

impl Default for GitFetcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Arguments for a shallow clone of `repo_url` into `dest`.
fn clone_args(repo_url: &str, dest: &Path) -> Vec<OsString> {
    vec![
        OsString::from("clone"),
        OsString::from("--depth"),
        OsString::from("1"),
        OsString::from(repo_url),
        dest.as_os_str().to_os_string(),
    ]
}

impl RepoFetcher for GitFetcher {
    async fn materialize(&self, repo_url: &str, dest: &Path) -> Result<(), UpstreamError> {
        tracing::debug!(repo = %repo_url, dest = %dest.display(), "cloning repository");

        let output = tokio::time::timeout(
            CLONE_TIMEOUT,
            tokio::process::Command::new("git")
                .args(clone_args(repo_url, dest))
                .output(),
        )
        .await
        .map_err(|_| {
            UpstreamError::Request(format!(
                "git clone of '{repo_url}' timed out after {}s",
                CLONE_TIMEOUT.as_secs()
            ))
        })?
        .map_err(|e| UpstreamError::Request(format!("failed to run git: {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(UpstreamError::Request(format!(
                "git clone failed: {}",
                stderr.trim()
            )));
        }

        Ok(())
    }
}
