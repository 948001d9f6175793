use super::*;

/// Tests creating an order with its item snapshot.
///
/// Verifies that the order row and every item row are persisted together and
/// that the resolved option snapshot survives the round trip.
///
/// Expected: Ok with a Pending order and its items
#[tokio::test]
async fn persists_order_and_items_together() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, client, restaurant, dish) =
        factory::helpers::create_order_dependencies(db).await?;

    let repo = OrderRepository::new(db);
    let (order, items) = repo
        .create_with_items(
            client.id,
            restaurant.id,
            5500,
            vec![(
                dish.id,
                OrderItemOptions(vec![OrderItemOption {
                    name: "size".to_string(),
                    choice: None,
                    extra: Some(500),
                }]),
            )],
        )
        .await?;

    assert_eq!(order.customer_id, Some(client.id));
    assert_eq!(order.restaurant_id, Some(restaurant.id));
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.total, 5500);
    assert!(order.driver_id.is_none());

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].order_id, order.id);
    assert_eq!(items[0].dish_id, Some(dish.id));
    assert_eq!(items[0].options.0[0].extra, Some(500));

    let stored_items = repo.find_items(order.id).await?;
    assert_eq!(stored_items.len(), 1);

    Ok(())
}

/// Tests creating an order with no items.
///
/// An empty snapshot is permitted at this layer; validation belongs above.
///
/// Expected: Ok with an order and no item rows
#[tokio::test]
async fn allows_empty_item_snapshot() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, client, restaurant, _dish) =
        factory::helpers::create_order_dependencies(db).await?;

    let repo = OrderRepository::new(db);
    let (order, items) = repo
        .create_with_items(client.id, restaurant.id, 0, Vec::new())
        .await?;

    assert_eq!(order.total, 0);
    assert!(items.is_empty());

    Ok(())
}
