use super::*;

/// Tests changing a role by id and by email.
///
/// Expected: Ok(1) for each write with the stored role updated
#[tokio::test]
async fn sets_role_by_id_and_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = UserFactory::new(db).build().await?;
    let repo = UserRepository::new(db);

    assert_eq!(repo.set_role_by_id(user.id, UserRole::Admin).await?, 1);
    assert_eq!(repo.find_by_email(&user.email).await?.unwrap().role, "admin");

    assert_eq!(repo.set_role_by_email(&user.email, UserRole::Rider).await?, 1);
    assert_eq!(repo.find_by_email(&user.email).await?.unwrap().role, "rider");

    Ok(())
}

/// Tests promoting an email with no account.
///
/// Expected: Ok(0)
#[tokio::test]
async fn unknown_email_matches_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let updated = UserRepository::new(db)
        .set_role_by_email("ghost@example.com", UserRole::Rider)
        .await?;

    assert_eq!(updated, 0);

    Ok(())
}
