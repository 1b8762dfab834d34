// Providers layer - Work performers and business logic
//
// Providers hold the rules and the cryptography. They do not decide when a
// record is written; coordinators compose them with the stores.

pub mod credential_provider;
pub mod crypto_provider;
pub mod user_validator_provider;

pub use credential_provider::CredentialProvider;
pub use crypto_provider::CryptoProvider;
pub use user_validator_provider::UserValidatorProvider;
