use std::fs;
use std::io;
use std::path::PathBuf;

use crate::domain::AppError;
use crate::domain::config::paths;
use crate::ports::DistributionStore;

/// Filesystem-based distribution store.
#[derive(Debug, Clone)]
pub struct FilesystemDistributionStore {
    root: PathBuf,
}

impl FilesystemDistributionStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn file_path(&self, release: &str, file: &str) -> PathBuf {
        paths::release_dir(&self.root, release).join(file)
    }
}

impl DistributionStore for FilesystemDistributionStore {
    fn root(&self) -> PathBuf {
        self.root.clone()
    }

    fn list_releases(&self) -> Result<Vec<String>, AppError> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(AppError::DistributionRootMissing(self.root.display().to_string()));
            }
            Err(e) => return Err(e.into()),
        };

        let mut releases = Vec::new();
        for entry in entries {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                releases.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        Ok(releases)
    }

    fn ensure_release(&self, release: &str) -> Result<(), AppError> {
        fs::create_dir_all(paths::release_dir(&self.root, release))?;
        Ok(())
    }

    fn list_files(&self, release: &str) -> Result<Vec<String>, AppError> {
        let mut files = Vec::new();
        for entry in fs::read_dir(paths::release_dir(&self.root, release))? {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                files.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        Ok(files)
    }

    fn copy_file(&self, from_release: &str, to_release: &str, file: &str) -> Result<(), AppError> {
        let from = self.file_path(from_release, file);
        let to = self.file_path(to_release, file);
        let bytes = fs::copy(&from, &to)?;
        tracing::debug!(from = %from.display(), to = %to.display(), bytes, "copied");
        Ok(())
    }

    fn read_file(&self, release: &str, file: &str) -> Result<Vec<u8>, AppError> {
        Ok(fs::read(self.file_path(release, file))?)
    }

    fn write_file(&self, release: &str, file: &str, content: &[u8]) -> Result<(), AppError> {
        fs::write(self.file_path(release, file), content)?;
        Ok(())
    }
}
