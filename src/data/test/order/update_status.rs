use super::*;

/// Tests the single-statement status update.
///
/// Verifies that exactly one row changes and only the status field moves.
///
/// Expected: Ok(1) with the new status persisted and total untouched
#[tokio::test]
async fn updates_only_the_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, client, restaurant, _dish) =
        factory::helpers::create_order_dependencies(db).await?;
    let order = factory::order::OrderFactory::new(db, client.id, restaurant.id)
        .total(19_000)
        .build()
        .await?;

    let repo = OrderRepository::new(db);
    let rows = repo.update_status(order.id, OrderStatus::Cooking).await?;
    assert_eq!(rows, 1);

    let stored = repo.find_by_id(order.id).await?.unwrap();
    assert_eq!(stored.status, OrderStatus::Cooking);
    assert_eq!(stored.total, 19_000);
    assert_eq!(stored.customer_id, Some(client.id));

    Ok(())
}

/// Tests updating a missing order.
///
/// Expected: Ok(0) rows affected
#[tokio::test]
async fn reports_zero_rows_for_missing_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = OrderRepository::new(db);
    let rows = repo.update_status(999_999, OrderStatus::Cooking).await?;

    assert_eq!(rows, 0);

    Ok(())
}
