use std::fmt;

use crate::domain::{AppError, PlatformInvocation};

/// How a platform process ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessExit {
    /// Exit code, `None` when the process was killed by a signal.
    pub code: Option<i32>,
}

impl ProcessExit {
    pub fn code(code: i32) -> Self {
        Self { code: Some(code) }
    }

    pub fn is_success(&self) -> bool {
        self.code == Some(0)
    }
}

impl fmt::Display for ProcessExit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "exit status {}", code),
            None => write!(f, "terminated by signal"),
        }
    }
}

/// Port for running the 1C:Enterprise platform executable.
pub trait PlatformRunner {
    /// Run an invocation and block until the process exits.
    ///
    /// Returns `Err` only when the process could not be started.
    fn run(&self, invocation: &PlatformInvocation) -> Result<ProcessExit, AppError>;
}
