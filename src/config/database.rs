use migration::{AuthMigrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};

use crate::errors::internal::DatabaseError;
use crate::errors::InternalError;

/// Connect to the user database
///
/// Does NOT run migrations - call `migrate_database()` separately.
///
/// # Returns
/// * `Ok(DatabaseConnection)` - Connection established successfully
/// * `Err(InternalError)` - Connection failed
pub async fn init_database(database_url: &str) -> Result<DatabaseConnection, InternalError> {
    let db = Database::connect(database_url)
        .await
        .map_err(|source| DatabaseError::Connect { url: database_url.to_string(), source })?;

    tracing::debug!("Connected to user database: {}", database_url);

    Ok(db)
}

/// Run all pending migrations on the user database
pub async fn migrate_database(db: &DatabaseConnection) -> Result<(), InternalError> {
    AuthMigrator::up(db, None)
        .await
        .map_err(|source| DatabaseError::Migration { source })?;

    tracing::debug!("User database migrations completed");

    Ok(())
}
