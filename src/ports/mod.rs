mod distribution_store;
mod platform;

pub use distribution_store::DistributionStore;
pub use platform::{PlatformRunner, ProcessExit};
