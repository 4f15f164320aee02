use std::io;

use thiserror::Error;

use super::BuildStep;

/// Library-wide error type for cfrelease operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Configuration file could not be parsed.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// Release folder name is not a usable directory name.
    #[error("Invalid release folder name '{0}': must be a single non-empty path component")]
    InvalidReleaseName(String),

    /// Release identifier is not a four-part dotted version.
    #[error("Invalid release identifier '{0}': expected four dot-separated numbers")]
    InvalidReleaseId(String),

    /// Previous and next release are the same folder in create mode.
    #[error("Previous and next release are the same folder: '{0}'")]
    SameRelease(String),

    /// Next release missing in create mode.
    #[error("Next release name is required unless updating the current release")]
    MissingNextRelease,

    /// Distribution root does not exist.
    #[error("Distribution root not found: {0}")]
    DistributionRootMissing(String),

    /// Release folder the build starts from does not exist.
    #[error("Release folder not found: {0}")]
    ReleaseMissing(String),

    /// Descriptor of the previous release is missing.
    #[error("Distribution package descriptor not found: {0}")]
    DescriptorMissing(String),

    /// Platform executable could not be started.
    #[error("{step} failed to start '{program}': {details}")]
    PlatformLaunch { step: BuildStep, program: String, details: String },

    /// Platform executable exited with a failure status.
    #[error("{step} failed: {details}")]
    StepFailed { step: BuildStep, details: String },

    /// Interactive prompt failed.
    #[error("Prompt failed: {0}")]
    Prompt(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers and exit handling.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::TomlParseError(_)
            | AppError::InvalidReleaseName(_)
            | AppError::InvalidReleaseId(_)
            | AppError::SameRelease(_)
            | AppError::MissingNextRelease => io::ErrorKind::InvalidInput,
            AppError::DistributionRootMissing(_)
            | AppError::ReleaseMissing(_)
            | AppError::DescriptorMissing(_) => io::ErrorKind::NotFound,
            AppError::PlatformLaunch { .. } | AppError::StepFailed { .. } | AppError::Prompt(_) => {
                io::ErrorKind::Other
            }
        }
    }

    /// The build step this error came from, when it came from one.
    pub fn step(&self) -> Option<BuildStep> {
        match self {
            AppError::PlatformLaunch { step, .. } | AppError::StepFailed { step, .. } => {
                Some(*step)
            }
            _ => None,
        }
    }
}
