use super::*;
use entity::prelude::{Category, Restaurant, User};
use entity::user::UserRole;

/// Tests promoting a restaurant.
///
/// Verifies that the promoted flag and expiry are both set.
///
/// Expected: Ok with is_promoted = true and the given expiry
#[tokio::test]
async fn sets_promotion_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(User)
        .with_table(Category)
        .with_table(Restaurant)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db, UserRole::Owner).await?;
    let restaurant = factory::restaurant::create_restaurant(db, owner.id).await?;

    let until = Utc::now() + Duration::days(7);
    let repo = RestaurantRepository::new(db);
    let promoted = repo.promote(restaurant.id, until).await?;

    assert!(promoted.is_promoted);
    assert_eq!(promoted.promoted_until, Some(until));

    Ok(())
}

/// Tests promoting a missing restaurant.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_nonexistent_restaurant() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(User)
        .with_table(Category)
        .with_table(Restaurant)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RestaurantRepository::new(db);
    let result = repo.promote(999_999, Utc::now()).await;

    assert!(result.is_err());

    Ok(())
}
