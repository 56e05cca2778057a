//! FileSystem trait for abstracting file I/O.
//!
//! Defined in botforge-core so services can manage workspace trees without
//! depending on any specific filesystem implementation. The
//! `LocalFileSystem` adapter lives in botforge-infra.

use std::path::Path;

/// Abstraction over filesystem operations.
///
/// This trait allows the service layer to read/write the workspace tree
/// without coupling to the real filesystem, enabling testing against
/// temporary directories or fakes.
pub trait FileSystem: Send + Sync {
    /// Write string content to a file, creating parent directories as needed.
    fn write_file(
        &self,
        path: &Path,
        content: &str,
    ) -> impl std::future::Future<Output = Result<(), std::io::Error>> + Send;

    /// Read a file's content as a string.
    fn read_file(
        &self,
        path: &Path,
    ) -> impl std::future::Future<Output = Result<String, std::io::Error>> + Send;

    /// Create a single directory, failing with `ErrorKind::AlreadyExists`
    /// when the path is already present. This is the atomicity boundary for
    /// racing creates: the primitive, not a prior existence check, decides
    /// the winner.
    fn create_dir(
        &self,
        path: &Path,
    ) -> impl std::future::Future<Output = Result<(), std::io::Error>> + Send;

    /// Create a directory and all parent directories.
    fn create_dir_all(
        &self,
        path: &Path,
    ) -> impl std::future::Future<Output = Result<(), std::io::Error>> + Send;

    /// Check whether a path exists.
    fn exists(
        &self,
        path: &Path,
    ) -> impl std::future::Future<Output = bool> + Send;

    /// Remove a directory and all its contents.
    fn remove_dir_all(
        &self,
        path: &Path,
    ) -> impl std::future::Future<Output = Result<(), std::io::Error>> + Send;

    /// Names of the directories directly under `path` (files are skipped).
    fn list_dirs(
        &self,
        path: &Path,
    ) -> impl std::future::Future<Output = Result<Vec<String>, std::io::Error>> + Send;
}
