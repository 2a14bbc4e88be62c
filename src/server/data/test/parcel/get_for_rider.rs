use super::*;

/// Tests a rider's active task list.
///
/// Verifies that only parcels assigned to the rider with an in-progress status are
/// returned, newest first.
///
/// Expected: Ok with the rider_assigned and in_transit parcels only
#[tokio::test]
async fn active_lists_in_progress_parcels() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Parcel)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let rider_id = Uuid::new_v4();
    let now = Utc::now();

    let assigned = ParcelFactory::new(db)
        .assigned_rider(rider_id, "Rahim")
        .delivery_status("rider_assigned")
        .created_at(now - Duration::hours(1))
        .build()
        .await?;
    let in_transit = ParcelFactory::new(db)
        .assigned_rider(rider_id, "Rahim")
        .delivery_status("in_transit")
        .created_at(now)
        .build()
        .await?;
    ParcelFactory::new(db)
        .assigned_rider(rider_id, "Rahim")
        .delivery_status("delivered")
        .build()
        .await?;
    ParcelFactory::new(db)
        .assigned_rider(Uuid::new_v4(), "Other")
        .delivery_status("in_transit")
        .build()
        .await?;

    let active = ParcelRepository::new(db)
        .get_active_for_rider(rider_id)
        .await?;
    let ids: Vec<Uuid> = active.iter().map(|p| p.id).collect();

    assert_eq!(ids, vec![in_transit.id, assigned.id]);

    Ok(())
}

/// Tests a rider's completed history.
///
/// Expected: Ok with delivered and service-center parcels, latest delivery first
#[tokio::test]
async fn completed_lists_finished_parcels_by_delivery_time() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Parcel)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let rider_id = Uuid::new_v4();
    let now = Utc::now();

    let earlier = ParcelFactory::new(db)
        .assigned_rider(rider_id, "Rahim")
        .delivery_status("delivered")
        .delivered_at(now - Duration::days(1))
        .build()
        .await?;
    let later = ParcelFactory::new(db)
        .assigned_rider(rider_id, "Rahim")
        .delivery_status("service_center_delivered")
        .delivered_at(now)
        .build()
        .await?;
    ParcelFactory::new(db)
        .assigned_rider(rider_id, "Rahim")
        .delivery_status("in_transit")
        .build()
        .await?;

    let completed = ParcelRepository::new(db)
        .get_completed_for_rider(rider_id)
        .await?;
    let ids: Vec<Uuid> = completed.iter().map(|p| p.id).collect();

    assert_eq!(ids, vec![later.id, earlier.id]);

    Ok(())
}
