use super::*;

/// Tests the case-insensitive substring search.
///
/// Expected: Ok with both addresses containing "alice" regardless of case
#[tokio::test]
async fn matches_ignoring_case() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db).email("Alice@Example.com").build().await?;
    UserFactory::new(db).email("malice@example.com").build().await?;
    UserFactory::new(db).email("bob@example.com").build().await?;

    let users = UserRepository::new(db).search_by_email("ALICE", 10).await?;

    assert_eq!(users.len(), 2);
    assert!(users.iter().all(|u| u.email.to_lowercase().contains("alice")));

    Ok(())
}

/// Tests that the search is capped.
///
/// Expected: Ok with exactly the limit when more users match
#[tokio::test]
async fn caps_results() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..12 {
        UserFactory::new(db).build().await?;
    }

    let users = UserRepository::new(db).search_by_email("example", 10).await?;

    assert_eq!(users.len(), 10);

    Ok(())
}

/// Tests that LIKE wildcards in the fragment match literally.
///
/// Expected: Ok with no users for a bare "%" fragment
#[tokio::test]
async fn wildcards_match_literally() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    UserFactory::new(db).build().await?;

    let users = UserRepository::new(db).search_by_email("%", 10).await?;

    assert!(users.is_empty());

    Ok(())
}
