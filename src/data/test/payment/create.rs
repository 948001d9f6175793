use super::*;

/// Tests recording a payment.
///
/// Expected: Ok with the payment linked to user and restaurant
#[tokio::test]
async fn records_payment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_payment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db, UserRole::Owner).await?;
    let restaurant = factory::restaurant::create_restaurant(db, owner.id).await?;

    let repo = PaymentRepository::new(db);
    let payment = repo
        .create("tx-1234".to_string(), owner.id, restaurant.id)
        .await?;

    assert_eq!(payment.transaction_id, "tx-1234");
    assert_eq!(payment.user_id, Some(owner.id));
    assert_eq!(payment.restaurant_id, restaurant.id);

    Ok(())
}

/// Tests listing a user's payments.
///
/// Verifies that other users' payments are excluded.
///
/// Expected: Ok with only the caller's payments
#[tokio::test]
async fn finds_payments_by_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_payment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db, UserRole::Owner).await?;
    let other = factory::user::create_user(db, UserRole::Owner).await?;
    let restaurant = factory::restaurant::create_restaurant(db, owner.id).await?;
    let other_restaurant = factory::restaurant::create_restaurant(db, other.id).await?;

    let repo = PaymentRepository::new(db);
    let mine = repo
        .create("tx-1".to_string(), owner.id, restaurant.id)
        .await?;
    repo.create("tx-2".to_string(), other.id, other_restaurant.id)
        .await?;

    let payments = repo.find_by_user(owner.id).await?;

    assert_eq!(payments.len(), 1);
    assert_eq!(payments[0].id, mine.id);

    Ok(())
}
