use std::fmt;
use std::str::FromStr;

use super::AppError;

/// Characters that cannot appear in a release folder name on any supported platform.
const FORBIDDEN_CHARS: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// A validated release folder name under the distribution root.
///
/// Guarantees:
/// - Non-empty and not only whitespace
/// - A single path component (no separators, not `.` or `..`)
///
/// Version shape is not enforced here; see [`ReleaseId`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReleaseName(String);

impl ReleaseName {
    /// Validate and create a new release folder name.
    pub fn new(name: &str) -> Result<Self, AppError> {
        if is_valid_dir_name(name) {
            Ok(Self(name.to_string()))
        } else {
            Err(AppError::InvalidReleaseName(name.to_string()))
        }
    }

    /// Return the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::ops::Deref for ReleaseName {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for ReleaseName {
    fn as_ref(&self) -> &str {
        self
    }
}

impl fmt::Display for ReleaseName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn is_valid_dir_name(name: &str) -> bool {
    if name.trim().is_empty() || name == "." || name == ".." {
        return false;
    }
    !name.chars().any(|c| c.is_control() || FORBIDDEN_CHARS.contains(&c))
}

/// A four-component dotted release identifier such as `1.2.3.4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReleaseId([u64; 4]);

impl ReleaseId {
    /// The identifier with its last component incremented.
    pub fn next(self) -> Self {
        let [major, minor, patch, build] = self.0;
        Self([major, minor, patch, build + 1])
    }
}

impl FromStr for ReleaseId {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || AppError::InvalidReleaseId(value.to_string());
        let parts: Vec<&str> = value.split('.').collect();
        if parts.len() != 4 {
            return Err(invalid());
        }

        let mut components = [0u64; 4];
        for (slot, part) in components.iter_mut().zip(parts) {
            *slot = part.parse().map_err(|_| invalid())?;
        }
        Ok(Self(components))
    }
}

impl fmt::Display for ReleaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [major, minor, patch, build] = self.0;
        write!(f, "{}.{}.{}.{}", major, minor, patch, build)
    }
}

/// Default next-release folder name for a previous release, or empty when it has no version shape.
pub fn suggest_next_release(previous: &str) -> String {
    previous.parse::<ReleaseId>().map(|id| id.next().to_string()).unwrap_or_default()
}
