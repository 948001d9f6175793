pub use sea_orm_migration::prelude::*;

mod m20260712_000001_create_user_table;
mod m20260712_000002_create_category_table;
mod m20260712_000003_create_restaurant_table;
mod m20260713_000004_create_dish_table;
mod m20260713_000005_create_order_table;
mod m20260713_000006_create_order_item_table;
mod m20260714_000007_create_payment_table;

pub struct Migrator;

impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260712_000001_create_user_table::Migration),
            Box::new(m20260712_000002_create_category_table::Migration),
            Box::new(m20260712_000003_create_restaurant_table::Migration),
            Box::new(m20260713_000004_create_dish_table::Migration),
            Box::new(m20260713_000005_create_order_table::Migration),
            Box::new(m20260713_000006_create_order_item_table::Migration),
            Box::new(m20260714_000007_create_payment_table::Migration),
        ]
    }
}
