mod database;
mod env_provider;
mod logging;
mod settings;

pub use database::{init_database, migrate_database};
#[cfg(test)]
pub use env_provider::MockEnvironment;
pub use env_provider::{EnvironmentProvider, SystemEnvironment};
pub use logging::{init_logging, init_logging_with, LoggingConfig, LoggingError};
pub use settings::{Settings, SettingsError};
