//! Configuration module

mod migrate;

pub use migrate::MigrateConfig;
pub use migrate::CONFIG_FILE;
