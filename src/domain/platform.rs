//! Command lines passed to the 1C:Enterprise platform executable.

use std::ffi::OsString;
use std::fmt;
use std::path::Path;

use super::BuildStep;
use super::config::BuilderConfig;

/// Launch mode token, the first argument of every invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchMode {
    Designer,
    Enterprise,
}

impl LaunchMode {
    pub fn token(self) -> &'static str {
        match self {
            LaunchMode::Designer => "DESIGNER",
            LaunchMode::Enterprise => "ENTERPRISE",
        }
    }
}

/// A single platform run: which step it serves and its argument vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformInvocation {
    pub step: BuildStep,
    pub mode: LaunchMode,
    pub args: Vec<OsString>,
}

impl PlatformInvocation {
    fn new(step: BuildStep, mode: LaunchMode) -> Self {
        Self { step, mode, args: vec![mode.token().into()] }
    }

    fn arg(mut self, value: impl Into<OsString>) -> Self {
        self.args.push(value.into());
        self
    }

    fn infobase(self, path: &Path, user: &str, password: &str) -> Self {
        let invocation = self.arg("/F").arg(path).arg("/N").arg(user);
        if password.is_empty() { invocation } else { invocation.arg("/P").arg(password) }
    }

    fn repository(self, config: &BuilderConfig) -> Self {
        let repo = &config.repository;
        self.arg("/ConfigurationRepositoryN")
            .arg(&repo.user)
            .arg("/ConfigurationRepositoryP")
            .arg(&repo.password)
            .arg("/ConfigurationRepositoryF")
            .arg(&repo.path)
    }

    fn configuration_infobase(self, config: &BuilderConfig) -> Self {
        let conf = &config.configuration;
        self.infobase(&conf.path, &conf.user, &conf.password)
    }

    fn demo_infobase(self, config: &BuilderConfig) -> Self {
        let demo = &config.demo;
        self.infobase(&demo.path, &demo.user, &demo.password)
    }

    /// Arguments rendered lossily, for logs and assertions.
    pub fn args_lossy(&self) -> Vec<String> {
        self.args.iter().map(|arg| arg.to_string_lossy().into_owned()).collect()
    }
}

impl fmt::Display for PlatformInvocation {
    /// Command line with the repository password masked.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let args = self.args_lossy();
        let mut masked = Vec::with_capacity(args.len());
        let mut hide_next = false;
        for arg in args {
            if hide_next {
                masked.push("***".to_string());
                hide_next = false;
                continue;
            }
            hide_next = arg == "/ConfigurationRepositoryP" || arg == "/P";
            masked.push(arg);
        }
        f.write_str(&masked.join(" "))
    }
}

/// Export the repository configuration as a single-file package.
pub fn export_configuration(config: &BuilderConfig, package: &Path) -> PlatformInvocation {
    PlatformInvocation::new(BuildStep::ExportConfiguration, LaunchMode::Designer)
        .configuration_infobase(config)
        .arg("/CreateDistributionFiles")
        .arg("-cffile")
        .arg(package)
        .repository(config)
}

/// Load a configuration package into the demo database and update its schema.
pub fn update_demo_database(config: &BuilderConfig, package: &Path) -> PlatformInvocation {
    PlatformInvocation::new(BuildStep::UpdateDemoDatabase, LaunchMode::Designer)
        .demo_infobase(config)
        .arg("/UpdateCfg")
        .arg(package)
        .arg("/UpdateDBCfg")
}

/// Open the demo database in user mode so first-run data migrations complete.
pub fn launch_demo_database(config: &BuilderConfig) -> PlatformInvocation {
    PlatformInvocation::new(BuildStep::LaunchDemoDatabase, LaunchMode::Enterprise)
        .demo_infobase(config)
        .arg("/UpdateCfg")
}

/// Archive the demo database.
pub fn dump_demo_database(config: &BuilderConfig, archive: &Path) -> PlatformInvocation {
    PlatformInvocation::new(BuildStep::DumpDemoDatabase, LaunchMode::Designer)
        .demo_infobase(config)
        .arg("/DumpIB")
        .arg(archive)
}

/// Build the installer from a distribution package descriptor.
pub fn create_distributive(config: &BuilderConfig, descriptor: &Path) -> PlatformInvocation {
    PlatformInvocation::new(BuildStep::CreateDistributive, LaunchMode::Designer)
        .configuration_infobase(config)
        .repository(config)
        .arg("/CreateDistributive")
        .arg(&config.distribution.setup_dir)
        .arg("-File")
        .arg(descriptor)
        .arg("-MakeSetup")
}
