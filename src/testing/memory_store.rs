use std::collections::BTreeMap;
use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::DistributionStore;

type Releases = BTreeMap<String, BTreeMap<String, Vec<u8>>>;

/// In-memory distribution store for testing.
#[derive(Debug, Clone, Default)]
pub struct MemoryDistributionStore {
    releases: Arc<Mutex<Releases>>,
    mutations: Arc<Mutex<usize>>,
}

impl MemoryDistributionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a release folder with files. Does not count as a mutation.
    pub fn with_release(self, release: &str, files: &[(&str, &str)]) -> Self {
        {
            let mut releases = self.releases.lock().unwrap();
            let folder = releases.entry(release.to_string()).or_default();
            for (name, content) in files {
                folder.insert(name.to_string(), content.as_bytes().to_vec());
            }
        }
        self
    }

    /// Seed a single file with arbitrary bytes. Does not count as a mutation.
    pub fn with_file_bytes(self, release: &str, file: &str, content: &[u8]) -> Self {
        self.releases
            .lock()
            .unwrap()
            .entry(release.to_string())
            .or_default()
            .insert(file.to_string(), content.to_vec());
        self
    }

    /// File contents decoded lossily as UTF-8.
    pub fn file(&self, release: &str, file: &str) -> Option<String> {
        self.bytes(release, file).map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
    }

    pub fn bytes(&self, release: &str, file: &str) -> Option<Vec<u8>> {
        self.releases.lock().unwrap().get(release).and_then(|folder| folder.get(file)).cloned()
    }

    pub fn has_release(&self, release: &str) -> bool {
        self.releases.lock().unwrap().contains_key(release)
    }

    /// Number of writes performed through the port.
    pub fn mutations(&self) -> usize {
        *self.mutations.lock().unwrap()
    }

    fn touch(&self) {
        *self.mutations.lock().unwrap() += 1;
    }
}

fn not_found(what: String) -> AppError {
    AppError::Io(io::Error::new(io::ErrorKind::NotFound, what))
}

impl DistributionStore for MemoryDistributionStore {
    fn root(&self) -> PathBuf {
        PathBuf::from("distr")
    }

    fn list_releases(&self) -> Result<Vec<String>, AppError> {
        Ok(self.releases.lock().unwrap().keys().cloned().collect())
    }

    fn ensure_release(&self, release: &str) -> Result<(), AppError> {
        let mut releases = self.releases.lock().unwrap();
        if !releases.contains_key(release) {
            releases.insert(release.to_string(), BTreeMap::new());
            drop(releases);
            self.touch();
        }
        Ok(())
    }

    fn list_files(&self, release: &str) -> Result<Vec<String>, AppError> {
        let releases = self.releases.lock().unwrap();
        let folder = releases.get(release).ok_or_else(|| not_found(release.to_string()))?;
        Ok(folder.keys().cloned().collect())
    }

    fn copy_file(&self, from_release: &str, to_release: &str, file: &str) -> Result<(), AppError> {
        let content = self
            .bytes(from_release, file)
            .ok_or_else(|| not_found(format!("{from_release}/{file}")))?;
        self.write_file(to_release, file, &content)
    }

    fn read_file(&self, release: &str, file: &str) -> Result<Vec<u8>, AppError> {
        self.bytes(release, file).ok_or_else(|| not_found(format!("{release}/{file}")))
    }

    fn write_file(&self, release: &str, file: &str, content: &[u8]) -> Result<(), AppError> {
        {
            let mut releases = self.releases.lock().unwrap();
            let folder =
                releases.get_mut(release).ok_or_else(|| not_found(release.to_string()))?;
            folder.insert(file.to_string(), content.to_vec());
        }
        self.touch();
        Ok(())
    }
}
