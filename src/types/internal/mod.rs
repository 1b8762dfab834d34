// Domain types shared by providers, stores and coordinators
pub mod auth;
pub mod pipeline;
pub mod user_candidate;
pub mod user_record;
pub mod validation;

pub use auth::{AuthFailure, AuthResult};
pub use pipeline::{PreparedUser, ValidatedUser};
pub use user_candidate::UserCandidate;
pub use user_record::UserRecord;
pub use validation::{Field, ValidationResult, ViolationKind};
