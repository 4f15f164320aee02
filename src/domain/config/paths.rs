use std::path::{Path, PathBuf};

/// Configuration file looked up in the working directory.
pub const CONFIG_FILE: &str = "cfrelease.toml";

/// Configuration package exported from the repository.
pub const CONFIGURATION_PACKAGE: &str = "1Cv8.cf";

/// Demo database archive.
pub const DEMO_ARCHIVE: &str = "1Cv8.dt";

/// Distribution package descriptor consumed by the installer build.
pub const DESCRIPTOR: &str = "DistributionPackage.edf";

/// Extensions of auxiliary documents carried over between releases.
pub const AUXILIARY_EXTENSIONS: [&str; 2] = ["pdf", "epf"];

/// `<root>/<release>`
pub fn release_dir(root: &Path, release: &str) -> PathBuf {
    root.join(release)
}

/// `<root>/<release>/1Cv8.cf`
pub fn configuration_package(root: &Path, release: &str) -> PathBuf {
    release_dir(root, release).join(CONFIGURATION_PACKAGE)
}

/// `<root>/<release>/1Cv8.dt`
pub fn demo_archive(root: &Path, release: &str) -> PathBuf {
    release_dir(root, release).join(DEMO_ARCHIVE)
}

/// `<root>/<release>/DistributionPackage.edf`
pub fn descriptor(root: &Path, release: &str) -> PathBuf {
    release_dir(root, release).join(DESCRIPTOR)
}

/// Whether a file name carries one of the auxiliary document extensions.
///
/// Extensions compare case-insensitively, so `Manual.PDF` counts.
pub fn is_auxiliary_document(file_name: &str) -> bool {
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| AUXILIARY_EXTENSIONS.iter().any(|aux| ext.eq_ignore_ascii_case(aux)))
}
