use super::*;

/// Tests customer scoping.
///
/// Verifies that a customer sees exactly the orders they placed.
///
/// Expected: Ok with only the customer's orders
#[tokio::test]
async fn scopes_orders_to_the_customer() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, client, restaurant, _dish) =
        factory::helpers::create_order_dependencies(db).await?;
    let stranger = factory::user::create_user(db, UserRole::Client).await?;

    let mine = factory::order::create_order(db, client.id, restaurant.id).await?;
    factory::order::create_order(db, stranger.id, restaurant.id).await?;

    let repo = OrderRepository::new(db);
    let orders = repo.find_for_customer(client.id, None).await?;

    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].id, mine.id);

    Ok(())
}

/// Tests courier scoping with a status filter.
///
/// Verifies that the driver filter and status filter compose.
///
/// Expected: Ok with only the matching order
#[tokio::test]
async fn scopes_orders_to_the_driver_and_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, client, restaurant, _dish) =
        factory::helpers::create_order_dependencies(db).await?;
    let courier = factory::user::create_user(db, UserRole::Delivery).await?;

    let picked_up = factory::order::OrderFactory::new(db, client.id, restaurant.id)
        .driver_id(Some(courier.id))
        .status(OrderStatus::PickedUp)
        .build()
        .await?;
    factory::order::OrderFactory::new(db, client.id, restaurant.id)
        .driver_id(Some(courier.id))
        .status(OrderStatus::Delivered)
        .build()
        .await?;
    factory::order::create_order(db, client.id, restaurant.id).await?;

    let repo = OrderRepository::new(db);
    let orders = repo
        .find_for_driver(courier.id, Some(OrderStatus::PickedUp))
        .await?;

    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].id, picked_up.id);

    Ok(())
}

/// Tests owner scoping across restaurants.
///
/// Verifies that an owner sees orders of all their restaurants and nothing
/// placed elsewhere.
///
/// Expected: Ok with orders from both owned restaurants only
#[tokio::test]
async fn scopes_orders_to_all_owned_restaurants() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, client, first, _dish) =
        factory::helpers::create_order_dependencies(db).await?;
    let second = factory::restaurant::create_restaurant(db, owner.id).await?;

    let other_owner = factory::user::create_user(db, UserRole::Owner).await?;
    let foreign = factory::restaurant::create_restaurant(db, other_owner.id).await?;

    factory::order::create_order(db, client.id, first.id).await?;
    factory::order::create_order(db, client.id, second.id).await?;
    factory::order::create_order(db, client.id, foreign.id).await?;

    let repo = OrderRepository::new(db);
    let orders = repo.find_for_owner(owner.id, None).await?;

    assert_eq!(orders.len(), 2);
    assert!(orders
        .iter()
        .all(|order| [Some(first.id), Some(second.id)].contains(&order.restaurant_id)));

    Ok(())
}
