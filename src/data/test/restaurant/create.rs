use super::*;
use entity::prelude::{Category, Restaurant, User};
use entity::user::UserRole;

/// Tests creating a restaurant.
///
/// Verifies that a new restaurant starts unpromoted and carries the given
/// owner and fields.
///
/// Expected: Ok with the created restaurant
#[tokio::test]
async fn creates_unpromoted_restaurant() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(User)
        .with_table(Category)
        .with_table(Restaurant)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db, UserRole::Owner).await?;

    let repo = RestaurantRepository::new(db);
    let restaurant = repo
        .create(
            "Seoul Kitchen".to_string(),
            "1 Main Street".to_string(),
            "https://cdn.example.com/cover.png".to_string(),
            None,
            owner.id,
        )
        .await?;

    assert_eq!(restaurant.name, "Seoul Kitchen");
    assert_eq!(restaurant.owner_id, owner.id);
    assert!(!restaurant.is_promoted);
    assert!(restaurant.promoted_until.is_none());

    Ok(())
}

/// Tests listing an owner's restaurants.
///
/// Verifies that only the owner's restaurants are returned.
///
/// Expected: Ok with exactly the owner's restaurants
#[tokio::test]
async fn finds_restaurants_by_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(User)
        .with_table(Category)
        .with_table(Restaurant)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db, UserRole::Owner).await?;
    let other = factory::user::create_user(db, UserRole::Owner).await?;

    let mine = factory::restaurant::create_restaurant(db, owner.id).await?;
    factory::restaurant::create_restaurant(db, other.id).await?;

    let repo = RestaurantRepository::new(db);
    let restaurants = repo.find_by_owner(owner.id).await?;

    assert_eq!(restaurants.len(), 1);
    assert_eq!(restaurants[0].id, mine.id);

    Ok(())
}
