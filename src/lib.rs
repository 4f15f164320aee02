//! cfrelease: package 1C:Enterprise configuration releases into installers.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{BuildRequest, build_release, latest_release, load_config};
pub use domain::{
    AppError, BuildEvent, BuildReport, BuildStep, BuilderConfig, ReleaseId, StepOutcome,
    suggest_next_release,
};
