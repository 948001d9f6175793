use super::*;
use entity::dish::{DishOption, DishOptionChoice};
use sea_orm::{ActiveModelTrait, ActiveValue};

/// End-to-end order placement scenario.
///
/// A customer orders one dish (price 5000) with a flat "size" surcharge of
/// 500. The owner's pending-order feed, subscribed before the order is
/// placed, receives exactly one event; listing the customer's orders shows a
/// Pending order with total 5500.
#[tokio::test]
async fn places_an_order_and_notifies_the_restaurant_feed() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let bus = NotificationBus::new();
    let service = OrderService::new(db, &bus);

    let owner = factory::user::create_user(db, UserRole::Owner).await?;
    let client = factory::user::create_user(db, UserRole::Client).await?;
    let restaurant = factory::restaurant::create_restaurant(db, owner.id).await?;
    let dish = factory::dish::DishFactory::new(db, restaurant.id)
        .price(5000)
        .options(vec![DishOption {
            name: "size".to_string(),
            extra: Some(500),
            choices: None,
        }])
        .build()
        .await?;

    let mut feed = bus.subscribe(Topic::PendingOrders {
        restaurant_id: restaurant.id,
    });

    let customer = User::from_entity(client);
    let params = CreateOrderParams {
        restaurant_id: restaurant.id,
        items: vec![OrderItemParams {
            dish_id: dish.id,
            options: vec![select("size", None)],
        }],
    };

    let order = service.create_order(&customer, params).await.unwrap();
    assert_eq!(order.total, 5500);
    assert_eq!(order.status, OrderStatus::Pending);

    let event = feed.recv().await.unwrap();
    match event {
        OrderEvent::PendingCreated { order: dto, owner_id } => {
            assert_eq!(dto.id, order.id);
            assert_eq!(owner_id, owner.id);
        }
        other => panic!("unexpected event: {:?}", other),
    }
    assert!(feed.try_recv().is_err());

    let orders = service.get_orders(&customer, None).await.unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].total, 5500);
    assert_eq!(orders[0].status, OrderStatus::Pending);

    Ok(())
}

/// Tests that the order total is the sum of item prices and stays frozen.
///
/// Two items priced 11000 and 8000 yield a total of 19000; raising the dish
/// price afterwards must not change the stored total.
#[tokio::test]
async fn totals_items_once_at_creation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let bus = NotificationBus::new();
    let service = OrderService::new(db, &bus);

    let (_owner, client, restaurant, _default_dish) =
        factory::helpers::create_order_dependencies(db).await?;
    let customer = User::from_entity(client);

    let spicy = factory::dish::DishFactory::new(db, restaurant.id)
        .price(10_000)
        .options(vec![DishOption {
            name: "spice".to_string(),
            extra: None,
            choices: Some(vec![DishOptionChoice {
                name: "hot".to_string(),
                extra: Some(1000),
            }]),
        }])
        .build()
        .await?;
    let plain = factory::dish::DishFactory::new(db, restaurant.id)
        .price(8000)
        .build()
        .await?;

    let params = CreateOrderParams {
        restaurant_id: restaurant.id,
        items: vec![
            OrderItemParams {
                dish_id: spicy.id,
                options: vec![select("spice", Some("hot"))],
            },
            OrderItemParams {
                dish_id: plain.id,
                options: Vec::new(),
            },
        ],
    };

    let order = service.create_order(&customer, params).await.unwrap();
    assert_eq!(order.total, 19_000);

    // Reprice the dish; the historical order must not move.
    let mut repriced: entity::dish::ActiveModel = spicy.into();
    repriced.price = ActiveValue::Set(99_000);
    repriced.update(db).await?;

    let stored = service.get_order(&customer, order.id).await.unwrap();
    assert_eq!(stored.total, 19_000);

    Ok(())
}

/// Tests that unknown option names price as zero instead of failing.
#[tokio::test]
async fn ignores_unresolvable_option_names() -> Result<(), DbErr> {
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
    let dish = factory::dish::DishFactory::new(db, restaurant.id)
        .price(10_000)
        .build()
        .await?;

    let params = CreateOrderParams {
        restaurant_id: restaurant.id,
        items: vec![OrderItemParams {
            dish_id: dish.id,
            options: vec![select("no-such-option", Some("whatever"))],
        }],
    };

    let order = service
        .create_order(&User::from_entity(client), params)
        .await
        .unwrap();

    assert_eq!(order.total, 10_000);

    Ok(())
}

/// Tests creation against a missing restaurant.
///
/// Expected: NotFound
#[tokio::test]
async fn fails_for_missing_restaurant() -> Result<(), DbErr> {
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
        .create_order(&User::from_entity(client), single_item_params(999_999, 1))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests that a dish of another restaurant reads as "dish not found".
///
/// A missing dish and a dish belonging to a different restaurant surface the
/// same error; nothing is persisted either way.
#[tokio::test]
async fn rejects_dishes_of_other_restaurants() -> Result<(), DbErr> {
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
    let other_restaurant = factory::restaurant::create_restaurant(db, owner.id).await?;
    let foreign_dish = factory::dish::create_dish(db, other_restaurant.id).await?;
    let customer = User::from_entity(client);

    let mismatch = service
        .create_order(
            &customer,
            single_item_params(restaurant.id, foreign_dish.id),
        )
        .await;
    assert!(matches!(mismatch, Err(AppError::NotFound(_))));

    let missing = service
        .create_order(&customer, single_item_params(restaurant.id, 999_999))
        .await;
    assert!(matches!(missing, Err(AppError::NotFound(_))));

    let orders = service.get_orders(&customer, None).await.unwrap();
    assert!(orders.is_empty());

    Ok(())
}
