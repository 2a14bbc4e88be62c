use super::*;

/// Tests creating an account on first login.
///
/// Expected: Ok with role user and equal created/login timestamps
#[tokio::test]
async fn creates_user_with_default_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let repo = UserRepository::new(db);
    let now = Utc::now();

    let user = repo
        .create(
            UpsertUserParams {
                email: "alice@example.com".to_string(),
                name: Some("Alice".to_string()),
                photo_url: None,
                details: Map::new(),
            },
            now,
        )
        .await?;

    assert_eq!(user.role, "user");
    assert_eq!(user.created_at, now);
    assert_eq!(user.last_log_in, now);

    Ok(())
}

/// Tests that a second account with the same email is rejected by the store.
///
/// Expected: Err(DbErr) from the unique email constraint
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    UserFactory::new(db).email("alice@example.com").build().await?;

    let result = UserRepository::new(db)
        .create(
            UpsertUserParams {
                email: "alice@example.com".to_string(),
                name: None,
                photo_url: None,
                details: Map::new(),
            },
            Utc::now(),
        )
        .await;

    assert!(result.is_err());

    Ok(())
}

/// Tests refreshing the login time of an existing user.
///
/// Expected: Ok(1) with last_log_in moved forward
#[tokio::test]
async fn touches_last_log_in() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = UserFactory::new(db).build().await?;
    let repo = UserRepository::new(db);
    let later = user.last_log_in + Duration::minutes(5);

    assert_eq!(repo.touch_last_log_in(&user.email, later).await?, 1);
    assert_eq!(
        repo.find_by_email(&user.email).await?.unwrap().last_log_in,
        later
    );

    Ok(())
}
