//! Application use cases.

pub mod init;
pub mod migrate;

pub use init::InitService;
pub use migrate::{migrate_vault, MigrateOptions, MigrationFailure, MigrationReport};
