use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

pub struct CategoryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CategoryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a category by its slug.
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: The category
    /// - `Ok(None)`: No category with that slug
    /// - `Err(DbErr)`: Database error
    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<entity::category::Model>, DbErr> {
        entity::prelude::Category::find()
            .filter(entity::category::Column::Slug.eq(slug))
            .one(self.db)
            .await
    }

    /// Finds the category for the given display name, creating it on first use.
    ///
    /// The name is normalized to lowercase and the slug replaces whitespace
    /// runs with dashes, so "Fast Food" and " fast  food " resolve to the same
    /// category.
    ///
    /// # Arguments
    /// - `name`: Category display name as entered by the caller
    ///
    /// # Returns
    /// - `Ok(Model)`: The existing or newly created category
    /// - `Err(DbErr)`: Database error
    pub async fn get_or_create(&self, name: &str) -> Result<entity::category::Model, DbErr> {
        let normalized = name.trim().to_lowercase();
        let slug = normalized.split_whitespace().collect::<Vec<_>>().join("-");

        if let Some(category) = self.find_by_slug(&slug).await? {
            return Ok(category);
        }

        let now = Utc::now();
        entity::category::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(normalized),
            slug: ActiveValue::Set(slug),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}
