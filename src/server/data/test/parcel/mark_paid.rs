use super::*;

/// Tests flipping an unpaid parcel to paid.
///
/// Expected: Ok(1) and payment_status paid
#[tokio::test]
async fn marks_unpaid_parcel_paid() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Parcel)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let parcel = ParcelFactory::new(db).build().await?;

    let repo = ParcelRepository::new(db);

    assert_eq!(repo.mark_paid(parcel.id).await?, 1);
    assert_eq!(
        repo.find_by_id(parcel.id).await?.unwrap().payment_status,
        "paid"
    );

    Ok(())
}

/// Tests that an already paid parcel is not matched again.
///
/// Expected: Ok(0)
#[tokio::test]
async fn already_paid_parcel_is_not_modified() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Parcel)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let parcel = ParcelFactory::new(db).payment_status("paid").build().await?;

    let updated = ParcelRepository::new(db).mark_paid(parcel.id).await?;

    assert_eq!(updated, 0);

    Ok(())
}

/// Tests marking a parcel that does not exist.
///
/// Expected: Ok(0)
#[tokio::test]
async fn unknown_parcel_is_not_modified() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Parcel)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let updated = ParcelRepository::new(db).mark_paid(Uuid::new_v4()).await?;

    assert_eq!(updated, 0);

    Ok(())
}
