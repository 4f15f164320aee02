pub mod builder;
pub mod parse;
pub mod paths;

pub use builder::{
    BuilderConfig, ConfigurationSection, DemoSection, DistributionSection, PlatformSection,
    PolicySection, RepositorySection,
};
pub use parse::parse_config_content;
