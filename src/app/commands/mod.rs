pub mod build;
pub mod latest;
