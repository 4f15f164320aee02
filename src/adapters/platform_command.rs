use std::path::PathBuf;
use std::process::{Command, Stdio};

use crate::domain::{AppError, PlatformInvocation};
use crate::ports::{PlatformRunner, ProcessExit};

/// Runs the platform executable as a child process.
///
/// The child inherits stdio; the platform reports its own diagnostics to the
/// operator (and to its `/Out` log when one is configured).
#[derive(Debug, Clone)]
pub struct PlatformCommandAdapter {
    executable: PathBuf,
}

impl PlatformCommandAdapter {
    pub fn new(executable: PathBuf) -> Self {
        Self { executable }
    }
}

impl PlatformRunner for PlatformCommandAdapter {
    fn run(&self, invocation: &PlatformInvocation) -> Result<ProcessExit, AppError> {
        tracing::debug!(
            program = %self.executable.display(),
            mode = invocation.mode.token(),
            command = %invocation,
            "starting platform"
        );

        let status = Command::new(&self.executable)
            .args(&invocation.args)
            .stdin(Stdio::null())
            .status()
            .map_err(|e| AppError::PlatformLaunch {
                step: invocation.step,
                program: self.executable.display().to_string(),
                details: e.to_string(),
            })?;

        let exit = ProcessExit { code: status.code() };
        tracing::debug!(step = %invocation.step, %exit, "platform exited");
        Ok(exit)
    }
}
