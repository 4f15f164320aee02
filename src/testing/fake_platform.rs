use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::{AppError, BuildStep, PlatformInvocation};
use crate::ports::{PlatformRunner, ProcessExit};

/// Platform runner that records invocations instead of starting processes.
#[derive(Default)]
pub struct FakePlatform {
    pub invocations: Mutex<Vec<PlatformInvocation>>,
    exit_codes: Mutex<HashMap<BuildStep, i32>>,
    launch_failures: Mutex<Vec<BuildStep>>,
}

impl FakePlatform {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the given step exit with `code`.
    pub fn exit_with(&self, step: BuildStep, code: i32) {
        self.exit_codes.lock().unwrap().insert(step, code);
    }

    /// Make the given step fail to start.
    pub fn fail_launch(&self, step: BuildStep) {
        self.launch_failures.lock().unwrap().push(step);
    }

    pub fn steps(&self) -> Vec<BuildStep> {
        self.invocations.lock().unwrap().iter().map(|inv| inv.step).collect()
    }

    pub fn invocation(&self, step: BuildStep) -> Option<PlatformInvocation> {
        self.invocations.lock().unwrap().iter().find(|inv| inv.step == step).cloned()
    }
}

impl PlatformRunner for FakePlatform {
    fn run(&self, invocation: &PlatformInvocation) -> Result<ProcessExit, AppError> {
        self.invocations.lock().unwrap().push(invocation.clone());

        if self.launch_failures.lock().unwrap().contains(&invocation.step) {
            return Err(AppError::PlatformLaunch {
                step: invocation.step,
                program: "1cv8".to_string(),
                details: "No such file or directory".to_string(),
            });
        }

        let code = self.exit_codes.lock().unwrap().get(&invocation.step).copied().unwrap_or(0);
        Ok(ProcessExit::code(code))
    }
}
