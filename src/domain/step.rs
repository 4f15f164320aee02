use std::fmt;

/// One stage of the release build, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildStep {
    ExportConfiguration,
    UpdateDemoDatabase,
    LaunchDemoDatabase,
    DumpDemoDatabase,
    CarryOverFiles,
    CreateDistributive,
}

/// What happens to the sequence when a step fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Abort the build.
    Abort,
    /// Record the failure and keep going.
    Tolerate,
    /// Only a failure to start the process aborts; the exit status is ignored.
    IgnoreExitStatus,
}

impl BuildStep {
    pub const ALL: [BuildStep; 6] = [
        BuildStep::ExportConfiguration,
        BuildStep::UpdateDemoDatabase,
        BuildStep::LaunchDemoDatabase,
        BuildStep::DumpDemoDatabase,
        BuildStep::CarryOverFiles,
        BuildStep::CreateDistributive,
    ];

    pub fn label(self) -> &'static str {
        match self {
            BuildStep::ExportConfiguration => "Export configuration",
            BuildStep::UpdateDemoDatabase => "Update demo database",
            BuildStep::LaunchDemoDatabase => "Launch demo database",
            BuildStep::DumpDemoDatabase => "Dump demo database",
            BuildStep::CarryOverFiles => "Carry over release files",
            BuildStep::CreateDistributive => "Create distributive",
        }
    }

    /// Failure policy for this step.
    ///
    /// A failed demo database update is tolerated unless `demo_update_fatal` is set,
    /// in which case the dump that follows archives a stale demo database.
    pub fn failure_policy(self, demo_update_fatal: bool) -> FailurePolicy {
        match self {
            BuildStep::UpdateDemoDatabase if !demo_update_fatal => FailurePolicy::Tolerate,
            BuildStep::LaunchDemoDatabase => FailurePolicy::IgnoreExitStatus,
            _ => FailurePolicy::Abort,
        }
    }
}

impl fmt::Display for BuildStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How a single step ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Succeeded,
    Skipped,
    /// Failed, but the policy let the build continue.
    Tolerated { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRecord {
    pub step: BuildStep,
    pub outcome: StepOutcome,
}

/// Ordered record of every step a successful build went through.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub steps: Vec<StepRecord>,
}

impl BuildReport {
    pub(crate) fn record(&mut self, step: BuildStep, outcome: StepOutcome) {
        self.steps.push(StepRecord { step, outcome });
    }

    pub fn outcome(&self, step: BuildStep) -> Option<&StepOutcome> {
        self.steps.iter().find(|record| record.step == step).map(|record| &record.outcome)
    }

    /// Steps whose failures were tolerated.
    pub fn warnings(&self) -> Vec<(BuildStep, &str)> {
        self.steps
            .iter()
            .filter_map(|record| match &record.outcome {
                StepOutcome::Tolerated { reason } => Some((record.step, reason.as_str())),
                _ => None,
            })
            .collect()
    }
}

/// Progress notification emitted while a build runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildEvent {
    StepStarted(BuildStep),
    StepFinished(StepRecord),
}
