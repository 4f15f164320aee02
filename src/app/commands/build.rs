//! Release build: export, demo database refresh, dump, carry-over, installer.

use crate::app::AppContext;
use crate::domain::config::paths;
use crate::domain::platform;
use crate::domain::{
    AppError, BuildEvent, BuildMode, BuildReport, BuildStep, FailurePolicy, PlatformInvocation,
    ReleaseName, StepOutcome, StepRecord, retarget_descriptor,
};
use crate::ports::{DistributionStore, PlatformRunner};

/// Parameters of one build, as entered on the form or command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildRequest {
    pub previous: String,
    /// Ignored when updating in place.
    pub next: Option<String>,
    pub update_in_place: bool,
}

/// Validated release folders a build works with.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ReleasePlan {
    previous: ReleaseName,
    target: ReleaseName,
    mode: BuildMode,
}

impl ReleasePlan {
    fn resolve(request: &BuildRequest) -> Result<Self, AppError> {
        let previous = ReleaseName::new(&request.previous)?;
        let mode = BuildMode::from_update_flag(request.update_in_place);

        let target = match mode {
            BuildMode::UpdateInPlace => previous.clone(),
            BuildMode::CreateNext => {
                let next = request
                    .next
                    .as_deref()
                    .filter(|next| !next.is_empty())
                    .ok_or(AppError::MissingNextRelease)?;
                let next = ReleaseName::new(next)?;
                if next == previous {
                    return Err(AppError::SameRelease(next.to_string()));
                }
                next
            }
        };

        Ok(Self { previous, target, mode })
    }
}

/// Run the release build.
///
/// Steps run strictly in order and the first fatal failure aborts; see
/// [`BuildStep::failure_policy`] for which failures are fatal. `observer`
/// receives progress events as steps start and finish.
pub fn execute<P, S>(
    ctx: &AppContext<P, S>,
    request: &BuildRequest,
    observer: &mut dyn FnMut(BuildEvent),
) -> Result<BuildReport, AppError>
where
    P: PlatformRunner,
    S: DistributionStore,
{
    let plan = ReleasePlan::resolve(request)?;
    tracing::info!(
        previous = %plan.previous,
        target = %plan.target,
        mode = ?plan.mode,
        "starting release build"
    );

    let mut build = Build { ctx, observer, report: BuildReport::default() };
    build.run(&plan)?;
    Ok(build.report)
}

struct Build<'a, 'o, P: PlatformRunner, S: DistributionStore> {
    ctx: &'a AppContext<P, S>,
    observer: &'o mut dyn FnMut(BuildEvent),
    report: BuildReport,
}

impl<P: PlatformRunner, S: DistributionStore> Build<'_, '_, P, S> {
    fn run(&mut self, plan: &ReleasePlan) -> Result<(), AppError> {
        let ctx = self.ctx;
        let config = ctx.config();
        let root = ctx.store().root();
        let target = plan.target.as_str();
        let package = paths::configuration_package(&root, target);

        let previous = plan.previous.as_str();
        if !ctx.store().list_releases()?.iter().any(|release| release == previous) {
            let missing = paths::release_dir(&root, previous);
            return Err(AppError::ReleaseMissing(missing.display().to_string()));
        }
        if plan.mode == BuildMode::CreateNext {
            ctx.store().ensure_release(target)?;
        }

        self.platform_step(platform::export_configuration(config, &package))?;
        self.platform_step(platform::update_demo_database(config, &package))?;
        // Waits for the operator to close the session: the dump needs the demo database closed.
        self.platform_step(platform::launch_demo_database(config))?;
        self.platform_step(platform::dump_demo_database(
            config,
            &paths::demo_archive(&root, target),
        ))?;

        match plan.mode {
            BuildMode::CreateNext => {
                self.started(BuildStep::CarryOverFiles);
                self.carry_over(plan)?;
                self.finished(BuildStep::CarryOverFiles, StepOutcome::Succeeded);
            }
            BuildMode::UpdateInPlace => {
                self.finished(BuildStep::CarryOverFiles, StepOutcome::Skipped);
            }
        }

        self.platform_step(platform::create_distributive(
            config,
            &paths::descriptor(&root, target),
        ))
    }

    fn platform_step(&mut self, invocation: PlatformInvocation) -> Result<(), AppError> {
        let step = invocation.step;
        self.started(step);
        tracing::info!(%step, command = %invocation, "running platform");

        let result = self.ctx.platform().run(&invocation).and_then(|exit| {
            if exit.is_success() {
                Ok(())
            } else {
                Err(AppError::StepFailed { step, details: exit.to_string() })
            }
        });

        let outcome = match result {
            Ok(()) => StepOutcome::Succeeded,
            Err(err) => {
                let policy = step.failure_policy(self.ctx.config().policy.demo_update_fatal);
                match (policy, err) {
                    (FailurePolicy::Tolerate, err) => {
                        tracing::warn!(%step, error = %err, "step failed; continuing");
                        StepOutcome::Tolerated { reason: err.to_string() }
                    }
                    (FailurePolicy::IgnoreExitStatus, AppError::StepFailed { details, .. }) => {
                        tracing::debug!(%step, %details, "exit status ignored");
                        StepOutcome::Succeeded
                    }
                    (_, err) => {
                        tracing::error!(%step, error = %err, "step failed");
                        return Err(err);
                    }
                }
            }
        };

        self.finished(step, outcome);
        Ok(())
    }

    /// Bring auxiliary documents and the retargeted descriptor into the next release.
    fn carry_over(&self, plan: &ReleasePlan) -> Result<(), AppError> {
        let store = self.ctx.store();
        let previous = plan.previous.as_str();
        let next = plan.target.as_str();

        let files = store.list_files(previous)?;
        if !files.iter().any(|file| file == paths::DESCRIPTOR) {
            let missing = paths::descriptor(&store.root(), previous);
            return Err(AppError::DescriptorMissing(missing.display().to_string()));
        }

        for file in files.iter().filter(|file| paths::is_auxiliary_document(file)) {
            store.copy_file(previous, next, file)?;
            tracing::info!(%file, "carried over");
        }

        store.copy_file(previous, next, paths::DESCRIPTOR)?;
        let content = store.read_file(next, paths::DESCRIPTOR)?;
        let (rewritten, replacements) = retarget_descriptor(&content, previous, next);
        if replacements > 0 {
            store.write_file(next, paths::DESCRIPTOR, &rewritten)?;
        }
        tracing::info!(replacements, "descriptor retargeted");
        Ok(())
    }

    fn started(&mut self, step: BuildStep) {
        (self.observer)(BuildEvent::StepStarted(step));
    }

    fn finished(&mut self, step: BuildStep, outcome: StepOutcome) {
        (self.observer)(BuildEvent::StepFinished(StepRecord { step, outcome: outcome.clone() }));
        self.report.record(step, outcome);
    }
}
