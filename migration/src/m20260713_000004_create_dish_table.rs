use sea_orm_migration::{prelude::*, schema::*};

use super::m20260712_000003_create_restaurant_table::Restaurant;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Dish::Table)
                    .if_not_exists()
                    .col(pk_auto(Dish::Id))
                    .col(string(Dish::Name))
                    .col(big_integer(Dish::Price))
                    .col(string(Dish::Description))
                    .col(string_null(Dish::Photo))
                    .col(integer(Dish::RestaurantId))
                    .col(json(Dish::Options))
                    .col(
                        timestamp(Dish::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Dish::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_dish_restaurant_id")
                            .from(Dish::Table, Dish::RestaurantId)
                            .to(Restaurant::Table, Restaurant::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Dish::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Dish {
    Table,
    Id,
    Name,
    Price,
    Description,
    Photo,
    RestaurantId,
    Options,
    CreatedAt,
    UpdatedAt,
}
