use super::*;

/// Tests changing a rider's approval status.
///
/// Expected: Ok(1) with the new status stored
#[tokio::test]
async fn updates_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Rider)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let rider = RiderFactory::new(db).build().await?;
    let repo = RiderRepository::new(db);

    assert_eq!(repo.update_status(rider.id, "active").await?, 1);
    assert_eq!(repo.find_by_id(rider.id).await?.unwrap().status, "active");

    Ok(())
}

/// Tests setting the work status written on parcel assignment.
///
/// Expected: Ok(1) for a known rider and Ok(0) for an unknown id
#[tokio::test]
async fn sets_work_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Rider)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let rider = RiderFactory::new(db).status("active").build().await?;
    let repo = RiderRepository::new(db);

    assert_eq!(repo.set_work_status(rider.id, "in_delivery").await?, 1);
    assert_eq!(repo.set_work_status(Uuid::new_v4(), "in_delivery").await?, 0);
    assert_eq!(
        repo.find_by_id(rider.id).await?.unwrap().work_status.as_deref(),
        Some("in_delivery")
    );

    Ok(())
}
