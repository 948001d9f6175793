use super::*;
use entity::prelude::{Category, Restaurant, User};
use entity::user::UserRole;
use sea_orm::EntityTrait;

/// Tests clearing lapsed promotions.
///
/// Verifies that restaurants whose promotion expired are reset while active
/// promotions stay untouched.
///
/// Expected: Ok(1) with only the lapsed restaurant cleared
#[tokio::test]
async fn clears_only_lapsed_promotions() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(User)
        .with_table(Category)
        .with_table(Restaurant)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db, UserRole::Owner).await?;

    let lapsed = factory::restaurant::RestaurantFactory::new(db, owner.id)
        .is_promoted(true)
        .promoted_until(Some(Utc::now() - Duration::hours(1)))
        .build()
        .await?;
    let active = factory::restaurant::RestaurantFactory::new(db, owner.id)
        .is_promoted(true)
        .promoted_until(Some(Utc::now() + Duration::days(3)))
        .build()
        .await?;

    let repo = RestaurantRepository::new(db);
    let cleared = repo.clear_expired_promotions(Utc::now()).await?;

    assert_eq!(cleared, 1);

    let lapsed = entity::prelude::Restaurant::find_by_id(lapsed.id)
        .one(db)
        .await?
        .unwrap();
    assert!(!lapsed.is_promoted);
    assert!(lapsed.promoted_until.is_none());

    let active = entity::prelude::Restaurant::find_by_id(active.id)
        .one(db)
        .await?
        .unwrap();
    assert!(active.is_promoted);
    assert!(active.promoted_until.is_some());

    Ok(())
}

/// Tests the no-op case.
///
/// Expected: Ok(0) when nothing is promoted
#[tokio::test]
async fn does_nothing_without_promotions() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(User)
        .with_table(Category)
        .with_table(Restaurant)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db, UserRole::Owner).await?;
    factory::restaurant::create_restaurant(db, owner.id).await?;

    let repo = RestaurantRepository::new(db);
    let cleared = repo.clear_expired_promotions(Utc::now()).await?;

    assert_eq!(cleared, 0);

    Ok(())
}
