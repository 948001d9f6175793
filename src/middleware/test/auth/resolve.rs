use super::*;

/// Tests opportunistic identity resolution with a valid credential.
///
/// Expected: Ok(Some(user)) matching the token's subject
#[tokio::test]
async fn resolves_valid_credential() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let user = factory::user::create_user(db, UserRole::Client).await?;
    let token = tokens.issue(user.id);

    let guard = AuthGuard::new(db, &tokens, Some(&token));
    let resolved = guard.resolve().await.unwrap();

    assert_eq!(resolved.as_ref().map(|user| user.id), Some(user.id));
    assert_eq!(resolved.map(|user| user.role), Some(UserRole::Client));

    Ok(())
}

/// Tests resolution without a credential.
///
/// Absence does not block; it just resolves to nothing.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_credential() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let guard = AuthGuard::new(db, &tokens, None);

    assert!(guard.resolve().await.unwrap().is_none());

    Ok(())
}

/// Tests resolution with a malformed credential.
///
/// Expected: Ok(None), never an error
#[tokio::test]
async fn returns_none_for_invalid_token() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let guard = AuthGuard::new(db, &tokens, Some("not-a-token"));

    assert!(guard.resolve().await.unwrap().is_none());

    Ok(())
}

/// Tests resolution with a verified token whose subject no longer exists.
///
/// An invalid credential and an unknown subject are indistinguishable.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_subject() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let token = tokens.issue(999_999);
    let guard = AuthGuard::new(db, &tokens, Some(&token));

    assert!(guard.resolve().await.unwrap().is_none());

    Ok(())
}
