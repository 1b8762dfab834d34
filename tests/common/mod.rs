// Common test utilities for integration tests

use std::sync::Arc;

use user_identity::config::Settings;
use user_identity::{AppData, UserCandidate, UserCoordinator};

pub const TEST_PASSWORD_PEPPER: &str = "integration-test-pepper";

/// Creates AppData over a fresh, migrated in-memory database
pub async fn setup_test_app_data() -> Arc<AppData> {
    let settings = Settings::new("sqlite::memory:", TEST_PASSWORD_PEPPER);
    let app_data = AppData::init(&settings)
        .await
        .expect("Failed to initialize AppData");
    Arc::new(app_data)
}

pub async fn setup_test_coordinator() -> UserCoordinator {
    UserCoordinator::new(setup_test_app_data().await)
}

pub fn example_user() -> UserCandidate {
    UserCandidate::new("Example User", "user@example.com").with_password("foobar", "foobar")
}
