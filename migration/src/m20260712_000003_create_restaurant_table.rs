use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260712_000001_create_user_table::User, m20260712_000002_create_category_table::Category,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Restaurant::Table)
                    .if_not_exists()
                    .col(pk_auto(Restaurant::Id))
                    .col(string(Restaurant::Name))
                    .col(string(Restaurant::Address))
                    .col(string(Restaurant::CoverImage))
                    .col(integer_null(Restaurant::CategoryId))
                    .col(integer(Restaurant::OwnerId))
                    .col(boolean(Restaurant::IsPromoted).default(false))
                    .col(timestamp_null(Restaurant::PromotedUntil))
                    .col(
                        timestamp(Restaurant::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Restaurant::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_restaurant_owner_id")
                            .from(Restaurant::Table, Restaurant::OwnerId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_restaurant_category_id")
                            .from(Restaurant::Table, Restaurant::CategoryId)
                            .to(Category::Table, Category::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Restaurant::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Restaurant {
    Table,
    Id,
    Name,
    Address,
    CoverImage,
    CategoryId,
    OwnerId,
    IsPromoted,
    PromotedUntil,
    CreatedAt,
    UpdatedAt,
}
