// Test utilities shared across unit tests
// Only compiled when running tests

use std::sync::Arc;

use migration::{AuthMigrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};

use crate::app_data::AppData;
use crate::coordinators::UserCoordinator;
use crate::types::internal::UserCandidate;

pub const TEST_PASSWORD_PEPPER: &str = "test-pepper-for-unit-tests";

/// Creates an in-memory user database with migrations applied
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    AuthMigrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// Creates AppData over a fresh in-memory database
pub async fn setup_test_app_data() -> Arc<AppData> {
    let db = setup_test_db().await;
    Arc::new(AppData::from_connection(db, TEST_PASSWORD_PEPPER))
}

/// Creates a coordinator plus the AppData behind it
///
/// Callers can discard what they don't need:
/// ```rust
/// let (_app_data, coordinator) = setup_test_coordinator().await;
/// ```
pub async fn setup_test_coordinator() -> (Arc<AppData>, UserCoordinator) {
    let app_data = setup_test_app_data().await;
    let coordinator = UserCoordinator::new(app_data.clone());
    (app_data, coordinator)
}

/// The canonical valid candidate
pub fn example_user() -> UserCandidate {
    UserCandidate::new("Example User", "user@example.com").with_password("foobar", "foobar")
}
