// Library exports for integration tests and external use

pub mod app_data;
pub mod config;
pub mod coordinators;
pub mod errors;
pub mod providers;
pub mod stores;
pub mod types;

#[cfg(test)]
mod test;

pub use app_data::AppData;
pub use coordinators::UserCoordinator;
pub use errors::InternalError;
pub use types::internal::{
    AuthFailure, AuthResult, Field, UserCandidate, UserRecord, ValidationResult, ViolationKind,
};
