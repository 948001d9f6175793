use super::*;

/// Tests taking an unclaimed order.
///
/// Expected: Ok(1) with the courier assigned
#[tokio::test]
async fn assigns_courier_to_unclaimed_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, _client, _restaurant, _dish, order) =
        factory::helpers::create_order_with_dependencies(db).await?;
    let courier = factory::user::create_user(db, UserRole::Delivery).await?;

    let repo = OrderRepository::new(db);
    let rows = repo.assign_driver(order.id, courier.id).await?;
    assert_eq!(rows, 1);

    let stored = repo.find_by_id(order.id).await?.unwrap();
    assert_eq!(stored.driver_id, Some(courier.id));

    Ok(())
}

/// Tests the race guard on the driver column.
///
/// A second courier taking the same order must not overwrite the first; the
/// WHERE clause on the null driver column makes the write a no-op.
///
/// Expected: Ok(0) for the second courier, first assignment intact
#[tokio::test]
async fn refuses_to_overwrite_an_assigned_driver() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, client, restaurant, _dish) =
        factory::helpers::create_order_dependencies(db).await?;
    let first = factory::user::create_user(db, UserRole::Delivery).await?;
    let second = factory::user::create_user(db, UserRole::Delivery).await?;
    let order = factory::order::create_order(db, client.id, restaurant.id).await?;

    let repo = OrderRepository::new(db);
    assert_eq!(repo.assign_driver(order.id, first.id).await?, 1);
    assert_eq!(repo.assign_driver(order.id, second.id).await?, 0);

    let stored = repo.find_by_id(order.id).await?.unwrap();
    assert_eq!(stored.driver_id, Some(first.id));

    Ok(())
}
