use super::*;

/// Tests recording a rider assignment on a parcel.
///
/// Expected: Ok(1) with status rider_assigned and the rider reference stored
#[tokio::test]
async fn records_rider_reference() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Parcel)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let parcel = ParcelFactory::new(db).build().await?;
    let rider_id = Uuid::new_v4();

    let repo = ParcelRepository::new(db);
    let updated = repo.assign_rider(parcel.id, rider_id, "Rahim").await?;

    assert_eq!(updated, 1);

    let stored = repo.find_by_id(parcel.id).await?.unwrap();
    assert_eq!(stored.delivery_status, DeliveryStatus::RiderAssigned);
    assert_eq!(stored.assigned_rider_id, Some(rider_id));
    assert_eq!(stored.assigned_rider_name.as_deref(), Some("Rahim"));

    Ok(())
}
