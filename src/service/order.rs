//! Order lifecycle engine.
//!
//! Owns order creation, role-scoped retrieval, status transitions, and the
//! per-order access rule. Every state change is announced on the notification
//! bus so owner dashboards and courier/customer live views stay current.
//!
//! # Status transitions
//!
//! Orders move along a fixed forward path:
//! Pending → Cooking → Cooked → PickedUp → Delivered. Edits are gated twice:
//! a role-scoped guard restricts which target statuses a role may set at all
//! (Owner: Cooking/Cooked; Delivery: PickedUp/Delivered), and a monotonicity
//! check rejects any edit that would move an order backward or re-apply its
//! current status. Skipping forward over intermediate states is allowed.

use entity::order::OrderStatus;
use entity::order_item::OrderItemOptions;
use entity::user::UserRole;
use sea_orm::DatabaseConnection;

use crate::{
    data::{dish::DishRepository, order::OrderRepository, restaurant::RestaurantRepository},
    error::AppError,
    model::order::{is_forward_transition, CreateOrderParams, Order},
    model::user::User,
    notify::{NotificationBus, OrderEvent, Topic},
    service::pricing,
};

pub struct OrderService<'a> {
    db: &'a DatabaseConnection,
    bus: &'a NotificationBus,
}

impl<'a> OrderService<'a> {
    pub fn new(db: &'a DatabaseConnection, bus: &'a NotificationBus) -> Self {
        Self { db, bus }
    }

    /// Places an order at a restaurant.
    ///
    /// Each requested dish must exist and belong to the target restaurant; a
    /// dish of another restaurant and a missing dish are both reported as
    /// "dish not found". Item prices are resolved against the dish option
    /// catalogs exactly once, the order and its item snapshot are persisted in
    /// one transaction, and a pending-order event is published on the
    /// restaurant's topic.
    ///
    /// # Arguments
    /// - `customer`: The resolved client account
    /// - `params`: Target restaurant and requested items
    ///
    /// # Returns
    /// - `Ok(Order)`: The created order with its item snapshot
    /// - `Err(AppError::NotFound)`: Restaurant or dish not found
    /// - `Err(AppError)`: Database error
    pub async fn create_order(
        &self,
        customer: &User,
        params: CreateOrderParams,
    ) -> Result<Order, AppError> {
        let restaurant = RestaurantRepository::new(self.db)
            .find_by_id(params.restaurant_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Restaurant not found.".to_string()))?;

        let dish_repo = DishRepository::new(self.db);
        let mut item_prices = Vec::with_capacity(params.items.len());
        let mut snapshots = Vec::with_capacity(params.items.len());

        for item in &params.items {
            let dish = dish_repo
                .find_by_id(item.dish_id)
                .await?
                .filter(|dish| dish.restaurant_id == restaurant.id)
                .ok_or_else(|| AppError::NotFound("Dish not found.".to_string()))?;

            item_prices.push(pricing::item_price(dish.price, &dish.options.0, &item.options));

            let options = item
                .options
                .iter()
                .map(|selection| pricing::snapshot_selection(&dish.options.0, selection))
                .collect();
            snapshots.push((dish.id, OrderItemOptions(options)));
        }

        let total = pricing::order_total(&item_prices);

        let (order, items) = OrderRepository::new(self.db)
            .create_with_items(customer.id, restaurant.id, total, snapshots)
            .await?;

        let order = Order::from_entity_with_items(order, items);

        tracing::info!(
            order_id = order.id,
            restaurant_id = restaurant.id,
            customer_id = customer.id,
            total,
            "order created"
        );

        self.bus.publish(
            Topic::PendingOrders {
                restaurant_id: restaurant.id,
            },
            OrderEvent::PendingCreated {
                order: order.clone().into_dto(),
                owner_id: restaurant.owner_id,
            },
        );

        Ok(order)
    }

    /// Lists orders visible to the caller, optionally narrowed by status.
    ///
    /// Clients see orders they placed, couriers see orders assigned to them,
    /// and owners see orders across all restaurants they own. An empty result
    /// is not an error.
    ///
    /// # Arguments
    /// - `user`: The resolved account
    /// - `status`: Optional status filter
    ///
    /// # Returns
    /// - `Ok(orders)`: Matching orders without item snapshots
    /// - `Err(AppError)`: Database error
    pub async fn get_orders(
        &self,
        user: &User,
        status: Option<OrderStatus>,
    ) -> Result<Vec<Order>, AppError> {
        let repo = OrderRepository::new(self.db);

        let orders = match user.role {
            UserRole::Client => repo.find_for_customer(user.id, status).await?,
            UserRole::Delivery => repo.find_for_driver(user.id, status).await?,
            UserRole::Owner => repo.find_for_owner(user.id, status).await?,
        };

        Ok(orders.into_iter().map(Order::from_entity).collect())
    }

    /// Fetches one order with its item snapshot.
    ///
    /// # Arguments
    /// - `user`: The resolved account
    /// - `order_id`: ID of the order to fetch
    ///
    /// # Returns
    /// - `Ok(Order)`: The order including items
    /// - `Err(AppError::NotFound)`: No such order
    /// - `Err(AppError::Forbidden)`: The caller may not access the order
    pub async fn get_order(&self, user: &User, order_id: i32) -> Result<Order, AppError> {
        let repo = OrderRepository::new(self.db);

        let order = repo
            .find_by_id(order_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Order not found.".to_string()))?;

        if !self.can_access_order(user, &order).await? {
            return Err(AppError::Forbidden("You can't see that order.".to_string()));
        }

        let items = repo.find_items(order.id).await?;

        Ok(Order::from_entity_with_items(order, items))
    }

    /// Moves an order to a new status.
    ///
    /// Applies the per-order access rule, then the role-scoped transition
    /// guard, then the forward-only check. The write itself is a single
    /// UPDATE, so concurrent edits linearize at the database. On success a
    /// status-change event is published for the order's subscribers, and a
    /// cooked-order event additionally goes out to the courier feed when the
    /// order became ready for pickup.
    ///
    /// # Arguments
    /// - `user`: The resolved account
    /// - `order_id`: ID of the order to edit
    /// - `new_status`: Target status
    ///
    /// # Returns
    /// - `Ok(Order)`: The order with the new status
    /// - `Err(AppError::NotFound)`: No such order
    /// - `Err(AppError::Forbidden)`: Access, role guard, or monotonicity denied
    pub async fn edit_order(
        &self,
        user: &User,
        order_id: i32,
        new_status: OrderStatus,
    ) -> Result<Order, AppError> {
        let repo = OrderRepository::new(self.db);

        let order = repo
            .find_by_id(order_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Order not found.".to_string()))?;

        if !self.can_access_order(user, &order).await? {
            return Err(AppError::Forbidden("You can't see that order.".to_string()));
        }

        let role_allows = match user.role {
            UserRole::Owner => {
                matches!(new_status, OrderStatus::Cooking | OrderStatus::Cooked)
            }
            UserRole::Delivery => {
                matches!(new_status, OrderStatus::PickedUp | OrderStatus::Delivered)
            }
            UserRole::Client => false,
        };
        if !role_allows {
            return Err(AppError::Forbidden(
                "You can't change the order to that status.".to_string(),
            ));
        }

        if !is_forward_transition(order.status, new_status) {
            return Err(AppError::Forbidden(
                "Order status can only move forward.".to_string(),
            ));
        }

        if repo.update_status(order.id, new_status).await? == 0 {
            return Err(AppError::NotFound("Order not found.".to_string()));
        }

        let updated = repo
            .find_by_id(order.id)
            .await?
            .ok_or_else(|| AppError::NotFound("Order not found.".to_string()))?;
        let updated = Order::from_entity(updated);

        tracing::info!(
            order_id = updated.id,
            user_id = user.id,
            status = ?new_status,
            "order status changed"
        );

        if new_status == OrderStatus::Cooked {
            self.bus.publish(
                Topic::CookedOrders,
                OrderEvent::Cooked {
                    order: updated.clone().into_dto(),
                },
            );
        }
        self.bus.publish(
            Topic::OrderUpdates,
            OrderEvent::StatusChanged {
                order: updated.clone().into_dto(),
            },
        );

        Ok(updated)
    }

    /// Assigns the calling courier to an unclaimed order.
    ///
    /// The assignment is guarded at the database, so two couriers racing for
    /// the same order cannot both win. Subscribers of the order's update feed
    /// are notified of the assignment.
    ///
    /// # Arguments
    /// - `driver`: The resolved courier account
    /// - `order_id`: ID of the order to take
    ///
    /// # Returns
    /// - `Ok(Order)`: The order with the courier assigned
    /// - `Err(AppError::NotFound)`: No such order
    /// - `Err(AppError::BadRequest)`: The order already has a courier
    pub async fn take_order(&self, driver: &User, order_id: i32) -> Result<Order, AppError> {
        let repo = OrderRepository::new(self.db);

        let order = repo
            .find_by_id(order_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Order not found.".to_string()))?;

        if order.driver_id.is_some() {
            return Err(AppError::BadRequest(
                "This order already has a driver.".to_string(),
            ));
        }

        if repo.assign_driver(order.id, driver.id).await? == 0 {
            // Another courier won the race between the read and the write.
            return Err(AppError::BadRequest(
                "This order already has a driver.".to_string(),
            ));
        }

        let updated = repo
            .find_by_id(order.id)
            .await?
            .ok_or_else(|| AppError::NotFound("Order not found.".to_string()))?;
        let updated = Order::from_entity(updated);

        tracing::info!(order_id = updated.id, driver_id = driver.id, "order taken");

        self.bus.publish(
            Topic::OrderUpdates,
            OrderEvent::StatusChanged {
                order: updated.clone().into_dto(),
            },
        );

        Ok(updated)
    }

    /// Per-order access rule.
    ///
    /// A user may access an order when they are its customer, OR its assigned
    /// courier, OR they own the order's restaurant. Each condition returns its
    /// verdict immediately; anything that matches none of them is denied.
    ///
    /// # Arguments
    /// - `user`: The resolved account
    /// - `order`: The order row being accessed
    ///
    /// # Returns
    /// - `Ok(true)`: Access granted
    /// - `Ok(false)`: No relationship between the user and the order
    /// - `Err(AppError)`: Database error while resolving the restaurant
    pub async fn can_access_order(
        &self,
        user: &User,
        order: &entity::order::Model,
    ) -> Result<bool, AppError> {
        if order.customer_id == Some(user.id) {
            return Ok(true);
        }

        if order.driver_id == Some(user.id) {
            return Ok(true);
        }

        if let Some(restaurant_id) = order.restaurant_id {
            if let Some(restaurant) = RestaurantRepository::new(self.db)
                .find_by_id(restaurant_id)
                .await?
            {
                if restaurant.owner_id == user.id {
                    return Ok(true);
                }
            }
        }

        Ok(false)
    }
}
