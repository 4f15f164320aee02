use std::path::PathBuf;

use crate::domain::AppError;

/// Port for the distribution root: one folder per release.
///
/// Releases and files are addressed by name relative to the root.
pub trait DistributionStore {
    /// Absolute location of the distribution root.
    fn root(&self) -> PathBuf;

    /// Names of the immediate subdirectories of the root, in no particular order.
    fn list_releases(&self) -> Result<Vec<String>, AppError>;

    /// Create the release folder if it does not exist yet.
    fn ensure_release(&self, release: &str) -> Result<(), AppError>;

    /// Names of the regular files directly inside a release folder.
    fn list_files(&self, release: &str) -> Result<Vec<String>, AppError>;

    /// Copy a file between release folders, keeping its name.
    fn copy_file(&self, from_release: &str, to_release: &str, file: &str) -> Result<(), AppError>;

    /// Read a file of a release folder as raw bytes.
    fn read_file(&self, release: &str, file: &str) -> Result<Vec<u8>, AppError>;

    /// Replace the contents of a file of a release folder.
    fn write_file(&self, release: &str, file: &str, content: &[u8]) -> Result<(), AppError>;
}
