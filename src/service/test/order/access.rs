use super::*;

/// Tests the per-order access rule for every related party.
///
/// The order's customer, its assigned courier, and the restaurant's owner
/// may each fetch the order.
#[tokio::test]
async fn related_parties_can_fetch_the_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let bus = NotificationBus::new();
    let service = OrderService::new(db, &bus);

    let (owner, client, restaurant, _dish) =
        factory::helpers::create_order_dependencies(db).await?;
    let courier = factory::user::create_user(db, UserRole::Delivery).await?;

    let order = factory::order::OrderFactory::new(db, client.id, restaurant.id)
        .driver_id(Some(courier.id))
        .build()
        .await?;

    for party in [owner, client, courier] {
        let fetched = service
            .get_order(&User::from_entity(party), order.id)
            .await
            .unwrap();
        assert_eq!(fetched.id, order.id);
    }

    Ok(())
}

/// Regression test for the access rule's default branch.
///
/// A user with no relationship to the order must be denied no matter their
/// role; the rule may never fall through to allow.
#[tokio::test]
async fn unrelated_users_are_denied() -> Result<(), DbErr> {
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
    let order = factory::order::create_order(db, client.id, restaurant.id).await?;

    for role in [UserRole::Client, UserRole::Delivery, UserRole::Owner] {
        let stranger = factory::user::create_user(db, role).await?;
        let result = service
            .get_order(&User::from_entity(stranger), order.id)
            .await;

        assert!(
            matches!(result, Err(AppError::Forbidden(_))),
            "role {:?} slipped through the access rule",
            role
        );
    }

    Ok(())
}

/// Tests fetching a missing order.
///
/// Expected: NotFound before any access decision
#[tokio::test]
async fn missing_orders_are_not_found() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let bus = NotificationBus::new();
    let service = OrderService::new(db, &bus);

    let client = factory::user::create_user(db, UserRole::Client).await?;
    let result = service
        .get_order(&User::from_entity(client), 999_999)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests that the fetched order carries its item snapshot.
#[tokio::test]
async fn fetched_order_includes_items() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let bus = NotificationBus::new();
    let service = OrderService::new(db, &bus);

    let (_owner, client, restaurant, dish) =
        factory::helpers::create_order_dependencies(db).await?;
    let customer = User::from_entity(client);

    let created = service
        .create_order(&customer, single_item_params(restaurant.id, dish.id))
        .await
        .unwrap();

    let fetched = service.get_order(&customer, created.id).await.unwrap();
    let items = fetched.items.expect("items requested with the order");

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].dish_id, Some(dish.id));

    Ok(())
}
