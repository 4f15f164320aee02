pub mod config;
pub mod descriptor;
pub mod error;
pub mod platform;
pub mod release;
pub mod step;

pub use config::BuilderConfig;
pub use descriptor::retarget_descriptor;
pub use error::AppError;
pub use platform::{LaunchMode, PlatformInvocation};
pub use release::{ReleaseId, ReleaseName, suggest_next_release};
pub use step::{BuildEvent, BuildReport, BuildStep, FailurePolicy, StepOutcome, StepRecord};

/// Whether a build creates a new release folder or refreshes an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildMode {
    /// Derive the next release folder from the previous one.
    CreateNext,
    /// Rebuild the artifacts of the previous release folder itself.
    UpdateInPlace,
}

impl BuildMode {
    pub fn from_update_flag(update_in_place: bool) -> Self {
        if update_in_place { BuildMode::UpdateInPlace } else { BuildMode::CreateNext }
    }
}
