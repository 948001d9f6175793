use super::*;

/// Tests a courier taking an unclaimed order.
///
/// The courier is assigned and the order's update feed hears about it.
#[tokio::test]
async fn courier_takes_an_unclaimed_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let bus = NotificationBus::new();
    let service = OrderService::new(db, &bus);

    let (_owner, client, restaurant, _dish) =
        factory::helpers::create_order_dependencies(db).await?;
    let courier = factory::user::create_user(db, UserRole::Delivery).await?;
    let order = factory::order::create_order(db, client.id, restaurant.id).await?;

    let mut updates_feed = bus.subscribe(Topic::OrderUpdates);

    let taken = service
        .take_order(&User::from_entity(courier.clone()), order.id)
        .await
        .unwrap();

    assert_eq!(taken.driver_id, Some(courier.id));

    let update = updates_feed.recv().await.unwrap();
    assert!(update.concerns_order(order.id));

    Ok(())
}

/// Tests taking an order that already has a courier.
///
/// Expected: BadRequest, original assignment intact
#[tokio::test]
async fn rejects_taking_a_claimed_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let bus = NotificationBus::new();
    let service = OrderService::new(db, &bus);

    let (_owner, client, restaurant, _dish) =
        factory::helpers::create_order_dependencies(db).await?;
    let first = factory::user::create_user(db, UserRole::Delivery).await?;
    let second = factory::user::create_user(db, UserRole::Delivery).await?;
    let order = factory::order::create_order(db, client.id, restaurant.id).await?;

    service
        .take_order(&User::from_entity(first.clone()), order.id)
        .await
        .unwrap();

    let result = service
        .take_order(&User::from_entity(second), order.id)
        .await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let stored = service
        .get_order(&User::from_entity(first.clone()), order.id)
        .await
        .unwrap();
    assert_eq!(stored.driver_id, Some(first.id));

    Ok(())
}

/// Tests taking a missing order.
///
/// Expected: NotFound
#[tokio::test]
async fn rejects_taking_a_missing_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let bus = NotificationBus::new();
    let service = OrderService::new(db, &bus);

    let courier = factory::user::create_user(db, UserRole::Delivery).await?;

    let result = service
        .take_order(&User::from_entity(courier), 999_999)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
