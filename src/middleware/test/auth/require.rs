use super::*;

/// Tests the gate with a declared restriction and no credential.
///
/// Expected: Err(NotAuthenticated)
#[tokio::test]
async fn denies_restricted_operation_without_credential() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let guard = AuthGuard::new(db, &tokens, None);
    let result = guard.require(&[AllowedRole::Any]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::NotAuthenticated))
    ));

    Ok(())
}

/// Tests the gate with a credential that resolves to no known user.
///
/// Expected: Err(NotAuthenticated)
#[tokio::test]
async fn denies_unresolvable_credential() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let orphaned = tokens.issue(999_999);

    for credential in ["garbage", orphaned.as_str()] {
        let guard = AuthGuard::new(db, &tokens, Some(credential));
        let result = guard.require(&[AllowedRole::Any]).await;

        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::NotAuthenticated))
        ));
    }

    Ok(())
}

/// Tests the `Any` sentinel.
///
/// Expected: Ok for every concrete role once identity resolves
#[tokio::test]
async fn any_admits_every_resolved_role() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    for role in [UserRole::Client, UserRole::Owner, UserRole::Delivery] {
        let user = factory::user::create_user(db, role).await?;
        let token = tokens.issue(user.id);

        let guard = AuthGuard::new(db, &tokens, Some(&token));
        let resolved = guard.require(&[AllowedRole::Any]).await.unwrap();

        assert_eq!(resolved.id, user.id);
    }

    Ok(())
}

/// Tests membership in the declared role set.
///
/// Expected: Ok when the role is listed
#[tokio::test]
async fn admits_listed_roles() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let courier = factory::user::create_user(db, UserRole::Delivery).await?;
    let token = tokens.issue(courier.id);

    let guard = AuthGuard::new(db, &tokens, Some(&token));
    let resolved = guard
        .require(&[
            AllowedRole::Only(UserRole::Delivery),
            AllowedRole::Only(UserRole::Owner),
        ])
        .await
        .unwrap();

    assert_eq!(resolved.id, courier.id);

    Ok(())
}

/// Tests that a role outside the declared set is denied.
///
/// Regression test: the gate must deny by default, not fall through to allow.
///
/// Expected: Err(AccessDenied)
#[tokio::test]
async fn denies_role_outside_the_set() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let client = factory::user::create_user(db, UserRole::Client).await?;
    let token = tokens.issue(client.id);

    let guard = AuthGuard::new(db, &tokens, Some(&token));
    let result = guard
        .require(&[
            AllowedRole::Only(UserRole::Delivery),
            AllowedRole::Only(UserRole::Owner),
        ])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(id, _))) if id == client.id
    ));

    Ok(())
}
