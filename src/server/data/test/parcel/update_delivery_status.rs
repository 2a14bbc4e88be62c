use super::*;

/// Tests the in-transit transition stamps the pickup time only.
///
/// Expected: picked_at set to the transition time, delivered_at untouched
#[tokio::test]
async fn in_transit_stamps_picked_at() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Parcel)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let parcel = ParcelFactory::new(db)
        .delivery_status("rider_assigned")
        .build()
        .await?;

    let repo = ParcelRepository::new(db);
    let now = Utc::now();
    repo.update_delivery_status(parcel.id, &DeliveryStatus::InTransit, now)
        .await?;

    let stored = repo.find_by_id(parcel.id).await?.unwrap();
    assert_eq!(stored.delivery_status, DeliveryStatus::InTransit);
    assert_eq!(stored.picked_at, Some(now));
    assert_eq!(stored.delivered_at, None);

    Ok(())
}

/// Tests the delivered transition keeps an earlier pickup time.
///
/// Expected: delivered_at set, picked_at unchanged
#[tokio::test]
async fn delivered_keeps_picked_at() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Parcel)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let picked = Utc::now() - Duration::hours(3);
    let parcel = ParcelFactory::new(db)
        .delivery_status("in_transit")
        .picked_at(picked)
        .build()
        .await?;

    let repo = ParcelRepository::new(db);
    let now = Utc::now();
    repo.update_delivery_status(parcel.id, &DeliveryStatus::Delivered, now)
        .await?;

    let stored = repo.find_by_id(parcel.id).await?.unwrap();
    assert_eq!(stored.picked_at, Some(picked));
    assert_eq!(stored.delivered_at, Some(now));

    Ok(())
}

/// Tests that any status value is accepted without reachability checks.
///
/// Expected: Ok(1) with the arbitrary status stored and no timestamps stamped
#[tokio::test]
async fn accepts_unlisted_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Parcel)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let parcel = ParcelFactory::new(db).delivery_status("delivered").build().await?;

    let repo = ParcelRepository::new(db);
    let status = DeliveryStatus::parse("returned_to_sender");
    let updated = repo
        .update_delivery_status(parcel.id, &status, Utc::now())
        .await?;

    assert_eq!(updated, 1);
    let stored = repo.find_by_id(parcel.id).await?.unwrap();
    assert_eq!(stored.delivery_status.as_str(), "returned_to_sender");
    assert_eq!(stored.picked_at, None);

    Ok(())
}

/// Tests marking a parcel as cashed out.
///
/// Expected: cashout_status cashed_out with the time recorded
#[tokio::test]
async fn marks_cashed_out() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Parcel)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let parcel = ParcelFactory::new(db).build().await?;

    let repo = ParcelRepository::new(db);
    let now = Utc::now();

    assert_eq!(repo.mark_cashed_out(parcel.id, now).await?, 1);

    let stored = repo.find_by_id(parcel.id).await?.unwrap();
    assert_eq!(stored.cashout_status.as_deref(), Some("cashed_out"));
    assert_eq!(stored.cashed_out_at, Some(now));

    Ok(())
}
