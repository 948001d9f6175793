use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One selectable choice inside a dish option, with an optional surcharge.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DishOptionChoice {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra: Option<i64>,
}

/// A customization point on a dish.
///
/// Either carries a flat `extra` surcharge or a list of named `choices` with
/// per-choice surcharges. When `extra` is set the choices are ignored for
/// pricing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DishOption {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub choices: Option<Vec<DishOptionChoice>>,
}

/// JSON column wrapper for the dish's option catalog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Default, FromJsonQueryResult)]
pub struct DishOptions(pub Vec<DishOption>);

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "dish")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    /// Price in minor currency units.
    pub price: i64,
    pub description: String,
    pub photo: Option<String>,
    pub restaurant_id: i32,
    #[sea_orm(column_type = "Json")]
    pub options: DishOptions,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::restaurant::Entity",
        from = "Column::RestaurantId",
        to = "super::restaurant::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Restaurant,
    #[sea_orm(has_many = "super::order_item::Entity")]
    OrderItem,
}

impl Related<super::restaurant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Restaurant.def()
    }
}

impl Related<super::order_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderItem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
