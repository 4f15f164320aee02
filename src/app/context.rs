use crate::domain::BuilderConfig;
use crate::ports::{DistributionStore, PlatformRunner};

/// Application context holding configuration and dependencies for command execution.
pub struct AppContext<P: PlatformRunner, S: DistributionStore> {
    config: BuilderConfig,
    platform: P,
    store: S,
}

impl<P: PlatformRunner, S: DistributionStore> AppContext<P, S> {
    /// Create a new application context.
    pub fn new(config: BuilderConfig, platform: P, store: S) -> Self {
        Self { config, platform, store }
    }

    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    /// Get a reference to the platform runner.
    pub fn platform(&self) -> &P {
        &self.platform
    }

    /// Get a reference to the distribution store.
    pub fn store(&self) -> &S {
        &self.store
    }
}
