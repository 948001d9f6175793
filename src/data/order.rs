use chrono::Utc;
use entity::order::OrderStatus;
use entity::order_item::OrderItemOptions;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, JoinType, QueryFilter, QueryOrder, QuerySelect, RelationTrait, TransactionTrait,
};

pub struct OrderRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrderRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an order together with its item snapshot in one transaction.
    ///
    /// The caller supplies the already-priced total and the per-item option
    /// snapshots; this method only persists them.
    ///
    /// # Arguments
    /// - `customer_id`: ID of the ordering user
    /// - `restaurant_id`: ID of the restaurant the order targets
    /// - `total`: Order total in minor currency units
    /// - `items`: Pairs of dish ID and resolved option snapshot
    ///
    /// # Returns
    /// - `Ok((order, items))`: The created order and its item rows
    /// - `Err(DbErr)`: Database error; nothing is persisted on failure
    pub async fn create_with_items(
        &self,
        customer_id: i32,
        restaurant_id: i32,
        total: i64,
        items: Vec<(i32, OrderItemOptions)>,
    ) -> Result<(entity::order::Model, Vec<entity::order_item::Model>), DbErr> {
        let txn = self.db.begin().await?;
        let now = Utc::now();

        let order = entity::order::ActiveModel {
            id: ActiveValue::NotSet,
            customer_id: ActiveValue::Set(Some(customer_id)),
            driver_id: ActiveValue::Set(None),
            restaurant_id: ActiveValue::Set(Some(restaurant_id)),
            total: ActiveValue::Set(total),
            status: ActiveValue::Set(OrderStatus::Pending),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(&txn)
        .await?;

        let mut order_items = Vec::with_capacity(items.len());
        for (dish_id, options) in items {
            let item = entity::order_item::ActiveModel {
                id: ActiveValue::NotSet,
                order_id: ActiveValue::Set(order.id),
                dish_id: ActiveValue::Set(Some(dish_id)),
                options: ActiveValue::Set(options),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
            }
            .insert(&txn)
            .await?;
            order_items.push(item);
        }

        txn.commit().await?;

        Ok((order, order_items))
    }

    /// Finds an order by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: The order
    /// - `Ok(None)`: No order with that ID
    /// - `Err(DbErr)`: Database error
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::order::Model>, DbErr> {
        entity::prelude::Order::find_by_id(id).one(self.db).await
    }

    /// Gets the item snapshot rows for an order, in insertion order.
    ///
    /// Item loading is a separate, explicit request so list queries stay cheap.
    ///
    /// # Returns
    /// - `Ok(items)`: The order's item rows
    /// - `Err(DbErr)`: Database error
    pub async fn find_items(
        &self,
        order_id: i32,
    ) -> Result<Vec<entity::order_item::Model>, DbErr> {
        entity::prelude::OrderItem::find()
            .filter(entity::order_item::Column::OrderId.eq(order_id))
            .order_by_asc(entity::order_item::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets orders placed by a customer, newest first.
    ///
    /// # Arguments
    /// - `customer_id`: ID of the ordering user
    /// - `status`: Optional status filter
    ///
    /// # Returns
    /// - `Ok(orders)`: Matching orders; empty is not an error
    /// - `Err(DbErr)`: Database error
    pub async fn find_for_customer(
        &self,
        customer_id: i32,
        status: Option<OrderStatus>,
    ) -> Result<Vec<entity::order::Model>, DbErr> {
        let mut query = entity::prelude::Order::find()
            .filter(entity::order::Column::CustomerId.eq(customer_id));

        if let Some(status) = status {
            query = query.filter(entity::order::Column::Status.eq(status));
        }

        query
            .order_by_desc(entity::order::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Gets orders assigned to a courier, newest first.
    ///
    /// # Arguments
    /// - `driver_id`: ID of the courier
    /// - `status`: Optional status filter
    ///
    /// # Returns
    /// - `Ok(orders)`: Matching orders; empty is not an error
    /// - `Err(DbErr)`: Database error
    pub async fn find_for_driver(
        &self,
        driver_id: i32,
        status: Option<OrderStatus>,
    ) -> Result<Vec<entity::order::Model>, DbErr> {
        let mut query = entity::prelude::Order::find()
            .filter(entity::order::Column::DriverId.eq(driver_id));

        if let Some(status) = status {
            query = query.filter(entity::order::Column::Status.eq(status));
        }

        query
            .order_by_desc(entity::order::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Gets orders across all restaurants belonging to an owner, newest first.
    ///
    /// Joins through restaurant ownership, so orders whose restaurant reference
    /// has been cleared are not included.
    ///
    /// # Arguments
    /// - `owner_id`: ID of the restaurant owner
    /// - `status`: Optional status filter
    ///
    /// # Returns
    /// - `Ok(orders)`: Matching orders; empty is not an error
    /// - `Err(DbErr)`: Database error
    pub async fn find_for_owner(
        &self,
        owner_id: i32,
        status: Option<OrderStatus>,
    ) -> Result<Vec<entity::order::Model>, DbErr> {
        let mut query = entity::prelude::Order::find()
            .join(JoinType::InnerJoin, entity::order::Relation::Restaurant.def())
            .filter(entity::restaurant::Column::OwnerId.eq(owner_id));

        if let Some(status) = status {
            query = query.filter(entity::order::Column::Status.eq(status));
        }

        query
            .order_by_desc(entity::order::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Sets an order's status with a single UPDATE statement.
    ///
    /// Only the status and updated-at columns change. Concurrent edits against
    /// the same order each issue one atomic statement, so the persisted status
    /// always reflects exactly one request's intent.
    ///
    /// # Arguments
    /// - `id`: Order ID
    /// - `status`: New lifecycle status
    ///
    /// # Returns
    /// - `Ok(count)`: Number of rows updated (0 when the order is gone)
    /// - `Err(DbErr)`: Database error
    pub async fn update_status(&self, id: i32, status: OrderStatus) -> Result<u64, DbErr> {
        let result = entity::prelude::Order::update_many()
            .col_expr(entity::order::Column::Status, Expr::value(status))
            .col_expr(
                entity::order::Column::UpdatedAt,
                Expr::value(Utc::now()),
            )
            .filter(entity::order::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Assigns a courier to an order that does not have one yet.
    ///
    /// The driver column is guarded in the WHERE clause, so two couriers racing
    /// for the same order cannot both succeed.
    ///
    /// # Arguments
    /// - `id`: Order ID
    /// - `driver_id`: ID of the courier taking the order
    ///
    /// # Returns
    /// - `Ok(count)`: 1 when the order was taken, 0 when it already had a driver
    /// - `Err(DbErr)`: Database error
    pub async fn assign_driver(&self, id: i32, driver_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Order::update_many()
            .col_expr(
                entity::order::Column::DriverId,
                Expr::value(Some(driver_id)),
            )
            .col_expr(
                entity::order::Column::UpdatedAt,
                Expr::value(Utc::now()),
            )
            .filter(entity::order::Column::Id.eq(id))
            .filter(entity::order::Column::DriverId.is_null())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
