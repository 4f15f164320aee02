mod distribution_filesystem;
mod platform_command;

pub use distribution_filesystem::FilesystemDistributionStore;
pub use platform_command::PlatformCommandAdapter;
