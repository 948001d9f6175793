use super::*;
use entity::prelude::Category;

/// Tests creating a category on first use.
///
/// Verifies that the name is normalized to lowercase and the slug replaces
/// whitespace runs with dashes.
///
/// Expected: Ok with a normalized category
#[tokio::test]
async fn creates_category_on_first_use() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Category)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);
    let category = repo.get_or_create("  Fast   Food ").await?;

    assert_eq!(category.name, "fast   food");
    assert_eq!(category.slug, "fast-food");

    Ok(())
}

/// Tests that differently formatted names resolve to the same category.
///
/// Expected: Ok with the same category ID for both spellings
#[tokio::test]
async fn reuses_existing_category_by_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Category)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);
    let first = repo.get_or_create("Fast Food").await?;
    let second = repo.get_or_create(" fast  food ").await?;

    assert_eq!(first.id, second.id);

    Ok(())
}
