//! Non-interactive build command.

use crate::app::api::{self, BuildRequest};
use crate::domain::{AppError, BuilderConfig, suggest_next_release};

use super::progress;

/// Run a build on the current thread. Returns the process exit code.
pub(super) fn run_build(
    config: BuilderConfig,
    previous: Option<String>,
    next: Option<String>,
    update: bool,
) -> Result<i32, AppError> {
    let previous = match previous {
        Some(previous) => previous,
        None => api::latest_release(&config)?,
    };
    let next = if update {
        None
    } else {
        next.or_else(|| Some(suggest_next_release(&previous)).filter(|next| !next.is_empty()))
    };
    let request = BuildRequest { previous, next, update_in_place: update };

    let result = api::build_release(config, &request, &mut progress::render_event);
    progress::render_result(&result);
    Ok(if result.is_ok() { 0 } else { 1 })
}
