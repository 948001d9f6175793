use super::*;
use entity::prelude::User;

/// Tests creating a user account.
///
/// Verifies that the repository persists the email, password hash, and role
/// as given.
///
/// Expected: Ok with the created user
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(
            "client@example.com".to_string(),
            "salt$digest".to_string(),
            UserRole::Client,
        )
        .await?;

    assert_eq!(user.email, "client@example.com");
    assert_eq!(user.password, "salt$digest");
    assert_eq!(user.role, UserRole::Client);

    Ok(())
}

/// Tests the unique constraint on email.
///
/// Verifies that creating a second account with the same email fails.
///
/// Expected: Err(DbErr) due to the unique index
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(
        "taken@example.com".to_string(),
        "salt$digest".to_string(),
        UserRole::Client,
    )
    .await?;

    let result = repo
        .create(
            "taken@example.com".to_string(),
            "salt$digest".to_string(),
            UserRole::Owner,
        )
        .await;

    assert!(result.is_err());

    Ok(())
}
