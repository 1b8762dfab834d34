// Integration tests for the user save pipeline and sign-in flow

mod common;

use common::{example_user, setup_test_coordinator};
use user_identity::{AuthFailure, Field, InternalError, UserCandidate, ViolationKind};

#[tokio::test]
async fn test_example_user_lifecycle() {
    let coordinator = setup_test_coordinator().await;

    // Create
    let user = coordinator.save(example_user()).await.unwrap();
    assert!(!user.is_admin);
    assert!(!user.remember_token.is_empty());

    // Sign in
    let signed_in = coordinator.authenticate("user@example.com", "foobar").await.unwrap();
    assert_eq!(signed_in, Ok(user.clone()));

    // Persistent session
    let from_cookie = coordinator
        .verify_remember_token(&user.id, &user.remember_token)
        .await
        .unwrap();
    assert_eq!(from_cookie, Some(user.clone()));

    // Promote
    let admin = coordinator.toggle_admin(&user).await.unwrap();
    assert!(admin.is_admin);
    assert_ne!(admin.remember_token, user.remember_token);

    // Remove
    coordinator.delete_user(&admin.id).await.unwrap();
    assert_eq!(coordinator.find_by_email("user@example.com").await.unwrap(), None);
}

#[tokio::test]
async fn test_validation_failures_are_field_attributed() {
    let coordinator = setup_test_coordinator().await;
    let candidate = UserCandidate::new("a".repeat(51), "example.user@foo.").with_password("foobar", "mismatch");

    let error = coordinator.save(candidate).await.unwrap_err();
    let report = error.validation().expect("expected a validation failure");

    assert_eq!(report.for_field(Field::Name), vec![ViolationKind::NameTooLong]);
    assert_eq!(report.for_field(Field::Email), vec![ViolationKind::EmailInvalid]);
    assert_eq!(
        report.for_field(Field::PasswordConfirmation),
        vec![ViolationKind::ConfirmationMismatch]
    );
    assert!(report.for_field(Field::Password).is_empty());
    assert_eq!(
        report.messages(),
        vec![
            "Name is too long (maximum is 50 characters)".to_string(),
            "Email is invalid".to_string(),
            "Password confirmation doesn't match Password".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_duplicate_email_is_a_validation_failure() {
    let coordinator = setup_test_coordinator().await;
    coordinator.save(example_user()).await.unwrap();

    let mut duplicate = example_user();
    duplicate.email = "USER@example.COM".to_string();

    match coordinator.save(duplicate).await {
        Err(error @ InternalError::User(_)) => {
            assert!(error.validation().unwrap().contains(ViolationKind::EmailTaken));
        }
        other => panic!("Expected EmailTaken validation failure, got: {:?}", other),
    }
}

#[tokio::test]
async fn test_sign_in_failure_does_not_reveal_account_existence() {
    let coordinator = setup_test_coordinator().await;
    coordinator.save(example_user()).await.unwrap();

    let wrong_password = coordinator.authenticate("user@example.com", "invalid").await.unwrap();
    let unknown_user = coordinator.authenticate("ghost@example.com", "foobar").await.unwrap();

    assert_eq!(wrong_password, Err(AuthFailure));
    assert_eq!(unknown_user, Err(AuthFailure));
    assert_eq!(
        wrong_password.unwrap_err().to_string(),
        "Invalid email/password combination"
    );
}

#[tokio::test]
async fn test_sign_in_is_case_insensitive_on_email() {
    let coordinator = setup_test_coordinator().await;
    let user = coordinator.save(example_user()).await.unwrap();

    let result = coordinator.authenticate(" User@Example.COM ", "foobar").await.unwrap();
    assert_eq!(result, Ok(user));
}
