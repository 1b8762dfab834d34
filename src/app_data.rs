use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::config::{init_database, migrate_database, Settings};
use crate::errors::InternalError;
use crate::providers::{CredentialProvider, CryptoProvider, UserValidatorProvider};
use crate::stores::UserStore;

/// Centralized application data
///
/// Everything is created once and shared with coordinators through `Arc<AppData>`.
///
/// ```text
/// AppData::init(settings)
///   ├─ db (DatabaseConnection, migrated)
///   ├─ user_store (Arc<UserStore>)
///   ├─ crypto_provider (Arc<CryptoProvider>, keyed with the password pepper)
///   ├─ credential_provider (Arc<CredentialProvider>)
///   └─ user_validator (Arc<UserValidatorProvider>)
/// ```
pub struct AppData {
    pub db: DatabaseConnection,
    pub user_store: Arc<UserStore>,
    pub crypto_provider: Arc<CryptoProvider>,
    pub credential_provider: Arc<CredentialProvider>,
    pub user_validator: Arc<UserValidatorProvider>,
}

impl AppData {
    /// Connect, migrate and build all stores and providers
    ///
    /// # Errors
    ///
    /// Returns `InternalError` when the database cannot be reached or migrated
    pub async fn init(settings: &Settings) -> Result<Self, InternalError> {
        tracing::info!("Initializing AppData...");

        let db = init_database(settings.database_url()).await?;
        migrate_database(&db).await?;

        let app_data = Self::from_connection(db, settings.password_pepper());

        tracing::info!("AppData initialization complete");

        Ok(app_data)
    }

    /// Build stores and providers over an already migrated connection
    pub fn from_connection(db: DatabaseConnection, password_pepper: &str) -> Self {
        let user_store = Arc::new(UserStore::new(db.clone()));
        let crypto_provider = Arc::new(CryptoProvider::new(password_pepper.to_string()));
        let credential_provider = Arc::new(CredentialProvider::new(crypto_provider.clone()));
        let user_validator = Arc::new(UserValidatorProvider::new());

        Self {
            db,
            user_store,
            crypto_provider,
            credential_provider,
            user_validator,
        }
    }
}
