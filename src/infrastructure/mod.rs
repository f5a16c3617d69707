//! Infrastructure: configuration and file system access.

pub mod collector;
pub mod config;

pub use collector::{FileCollector, FsCollector};
pub use config::Config;
