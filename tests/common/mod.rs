//! Shared testing utilities for cfrelease CLI tests.

use assert_cmd::Command;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variable read by the stand-in platform: any invocation whose
/// arguments contain this value exits with status 1.
pub const FAIL_ON_ENV: &str = "FAKE_1CV8_FAIL_ON";

/// Testing harness providing an isolated distribution layout and a stand-in
/// platform executable that logs its arguments.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    original_cwd: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        for dir in ["distr", "setup", "conf", "demo", "repo"] {
            fs::create_dir_all(root.path().join(dir)).expect("Failed to create test layout");
        }
        let original_cwd = env::current_dir().expect("Failed to get current directory");

        let ctx = Self { root, original_cwd };
        ctx.write_platform_script();
        ctx.write_config(&ctx.platform_path());
        ctx
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }

    pub fn distr(&self) -> PathBuf {
        self.root().join("distr")
    }

    pub fn release_dir(&self, release: &str) -> PathBuf {
        self.distr().join(release)
    }

    pub fn config_path(&self) -> PathBuf {
        self.root().join("cfrelease.toml")
    }

    pub fn platform_path(&self) -> PathBuf {
        self.root().join("1cv8")
    }

    fn platform_log_path(&self) -> PathBuf {
        self.root().join("platform.log")
    }

    /// Create a release folder with the given files.
    pub fn add_release(&self, release: &str, files: &[(&str, &str)]) {
        let dir = self.release_dir(release);
        fs::create_dir_all(&dir).expect("Failed to create release dir");
        for (name, content) in files {
            fs::write(dir.join(name), content).expect("Failed to write release file");
        }
    }

    /// Write the configuration file, pointing the platform at `executable`.
    pub fn write_config(&self, executable: &Path) {
        let content = format!(
            r#"[platform]
executable = '{exe}'

[distribution]
root = '{root}/distr'
setup_dir = '{root}/setup'

[configuration]
path = '{root}/conf'
user = "Administrator"

[repository]
path = '{root}/repo'
user = "Administrator"
password = "123"

[demo]
path = '{root}/demo'
user = "Administrator"
"#,
            exe = executable.display(),
            root = self.root().display(),
        );
        fs::write(self.config_path(), content).expect("Failed to write config");
    }

    fn write_platform_script(&self) {
        let script = format!(
            r#"#!/bin/sh
printf '%s\n' "$*" >> '{log}'
if [ -n "${fail}" ]; then
  case "$*" in
    *"${fail}"*) exit 1 ;;
  esac
fi
exit 0
"#,
            log = self.platform_log_path().display(),
            fail = FAIL_ON_ENV,
        );
        let path = self.platform_path();
        fs::write(&path, script).expect("Failed to write platform script");

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
                .expect("Failed to make platform script executable");
        }
    }

    /// One line per platform invocation, in order.
    pub fn platform_calls(&self) -> Vec<String> {
        fs::read_to_string(self.platform_log_path())
            .map(|log| log.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// Build a command for invoking the compiled binary with this context's configuration.
    pub fn cli(&self) -> Command {
        let mut cmd = self.bare_cli();
        cmd.arg("--config").arg(self.config_path());
        cmd
    }

    /// Build a command running in the context root without a `--config` argument.
    pub fn bare_cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("cfrelease").expect("Failed to locate cfrelease binary");
        cmd.current_dir(self.root()).env_remove(FAIL_ON_ENV).env_remove("CFRELEASE_LOG");
        cmd
    }

    pub fn read_release_file(&self, release: &str, file: &str) -> Option<String> {
        fs::read_to_string(self.release_dir(release).join(file)).ok()
    }

    /// Names of the release folders currently present.
    pub fn releases(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.distr())
            .expect("Failed to read distr")
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_dir())
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    /// Execute a closure with the current directory set to the context root.
    pub fn with_work_dir<F, R>(&self, action: F) -> R
    where
        F: FnOnce() -> R,
    {
        let original = env::current_dir().expect("Failed to capture current dir");
        env::set_current_dir(self.root()).expect("Failed to switch current dir");
        let result = action();
        env::set_current_dir(original).expect("Failed to restore current dir");
        result
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        let _ = env::set_current_dir(&self.original_cwd);
    }
}
