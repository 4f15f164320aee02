mod fake_platform;
mod memory_store;

pub use fake_platform::FakePlatform;
pub use memory_store::MemoryDistributionStore;
