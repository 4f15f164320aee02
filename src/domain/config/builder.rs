//! Release builder configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// Everything the builder needs to know about the host: platform location,
/// distribution layout, infobases, repository credentials, and step policy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuilderConfig {
    pub platform: PlatformSection,
    pub distribution: DistributionSection,
    pub configuration: ConfigurationSection,
    pub repository: RepositorySection,
    pub demo: DemoSection,
    pub policy: PolicySection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlatformSection {
    /// Path to `1cv8.exe`.
    pub executable: PathBuf,
}

impl Default for PlatformSection {
    fn default() -> Self {
        Self { executable: PathBuf::from(r"D:\bin\1cv83\8.3.7.1873\bin\1cv8.exe") }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DistributionSection {
    /// Directory holding one folder per release.
    pub root: PathBuf,
    /// Output directory of the installer build.
    pub setup_dir: PathBuf,
}

impl Default for DistributionSection {
    fn default() -> Self {
        Self {
            root: PathBuf::from(r"D:\dev\1c\1CI\Distr"),
            setup_dir: PathBuf::from(r"D:\dev\1c\1CI\Setup"),
        }
    }
}

/// Infobase the release configuration is built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigurationSection {
    pub path: PathBuf,
    pub user: String,
    pub password: String,
}

impl Default for ConfigurationSection {
    fn default() -> Self {
        Self {
            path: PathBuf::from(r"D:\dev\1c\1CI\"),
            user: "Administrator".to_string(),
            password: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RepositorySection {
    pub path: PathBuf,
    pub user: String,
    pub password: String,
}

impl Default for RepositorySection {
    fn default() -> Self {
        Self {
            path: PathBuf::from(r"D:\dev\1c\1CI\Repository"),
            user: "Administrator".to_string(),
            password: "123".to_string(),
        }
    }
}

/// Demo infobase refreshed and archived with each release.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoSection {
    pub path: PathBuf,
    pub user: String,
    pub password: String,
}

impl Default for DemoSection {
    fn default() -> Self {
        Self {
            path: PathBuf::from(r"D:\dev\1c\1CI\Demo\"),
            user: "Administrator".to_string(),
            password: String::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PolicySection {
    /// Abort the build when the demo database update fails.
    pub demo_update_fatal: bool,
}

impl BuilderConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        let required_paths = [
            ("platform.executable", &self.platform.executable),
            ("distribution.root", &self.distribution.root),
            ("distribution.setup_dir", &self.distribution.setup_dir),
            ("configuration.path", &self.configuration.path),
            ("demo.path", &self.demo.path),
        ];
        for (key, path) in required_paths {
            if path.as_os_str().is_empty() {
                return Err(AppError::config_error(format!("{key} must not be empty")));
            }
        }

        let required_users = [
            ("configuration.user", &self.configuration.user),
            ("demo.user", &self.demo.user),
        ];
        for (key, user) in required_users {
            if user.trim().is_empty() {
                return Err(AppError::config_error(format!("{key} must not be empty")));
            }
        }

        Ok(())
    }
}
