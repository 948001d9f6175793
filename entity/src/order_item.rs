use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A customer's selected option on an ordered dish, frozen at order time.
///
/// `extra` is the surcharge that was resolved against the dish's option
/// catalog when the order was created, so later catalog edits do not change
/// historical orders.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItemOption {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub choice: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra: Option<i64>,
}

/// JSON column wrapper for the item's selected-option snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Default, FromJsonQueryResult)]
pub struct OrderItemOptions(pub Vec<OrderItemOption>);

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "order_item")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub order_id: i32,
    /// Weak reference; deleting the dish must not delete historical items.
    pub dish_id: Option<i32>,
    #[sea_orm(column_type = "Json")]
    pub options: OrderItemOptions,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::order::Entity",
        from = "Column::OrderId",
        to = "super::order::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Order,
    #[sea_orm(
        belongs_to = "super::dish::Entity",
        from = "Column::DishId",
        to = "super::dish::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Dish,
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Order.def()
    }
}

impl Related<super::dish::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Dish.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
