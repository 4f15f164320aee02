use crate::app::AppContext;
use crate::domain::AppError;
use crate::ports::{DistributionStore, PlatformRunner};

/// Name of the most recent release folder, or an empty string when there is none.
///
/// "Most recent" is the greatest name in plain lexicographic order, so `1.2.3.10`
/// ranks below `1.2.3.9`.
// TODO: switch to ReleaseId ordering once every folder under the root is a four-part version.
pub fn execute<P, S>(ctx: &AppContext<P, S>) -> Result<String, AppError>
where
    P: PlatformRunner,
    S: DistributionStore,
{
    let mut releases = ctx.store().list_releases()?;
    releases.sort_by(|a, b| b.cmp(a));
    Ok(releases.into_iter().next().unwrap_or_default())
}
