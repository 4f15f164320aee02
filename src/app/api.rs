//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::Path;

use crate::adapters::{FilesystemDistributionStore, PlatformCommandAdapter};
use crate::app::{
    AppContext,
    commands::{build, latest},
};

pub use crate::app::commands::build::BuildRequest;
pub use crate::domain::{AppError, BuildEvent, BuildReport, BuilderConfig};

/// Create an `AppContext` that talks to the real platform and filesystem.
fn create_context(
    config: BuilderConfig,
) -> AppContext<PlatformCommandAdapter, FilesystemDistributionStore> {
    let platform = PlatformCommandAdapter::new(config.platform.executable.clone());
    let store = FilesystemDistributionStore::new(config.distribution.root.clone());
    AppContext::new(config, platform, store)
}

/// Load configuration from `path`, or from `cfrelease.toml` in the current directory.
pub fn load_config(path: Option<&Path>) -> Result<BuilderConfig, AppError> {
    match path {
        Some(path) => crate::app::config::load_config_file(path),
        None => crate::app::config::load_config(&std::env::current_dir()?),
    }
}

/// Name of the most recent release folder under the distribution root.
pub fn latest_release(config: &BuilderConfig) -> Result<String, AppError> {
    let ctx = create_context(config.clone());
    latest::execute(&ctx)
}

/// Build a release, reporting progress to `observer`.
pub fn build_release(
    config: BuilderConfig,
    request: &BuildRequest,
    observer: &mut dyn FnMut(BuildEvent),
) -> Result<BuildReport, AppError> {
    let ctx = create_context(config);
    build::execute(&ctx, request, observer)
}
