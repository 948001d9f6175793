use super::*;
use entity::prelude::User;

/// Tests finding a user by email.
///
/// Expected: Ok(Some(user)) for an existing email
#[tokio::test]
async fn returns_user_for_existing_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let created = repo
        .create(
            "owner@example.com".to_string(),
            "salt$digest".to_string(),
            UserRole::Owner,
        )
        .await?;

    let found = repo.find_by_email("owner@example.com").await?;

    assert_eq!(found.map(|user| user.id), Some(created.id));

    Ok(())
}

/// Tests finding a user by an unknown email.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let found = repo.find_by_email("nobody@example.com").await?;

    assert!(found.is_none());

    Ok(())
}
