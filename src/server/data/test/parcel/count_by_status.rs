use super::*;

/// Tests the global per-status aggregation.
///
/// Verifies that one entry is returned per distinct delivery status and that the counts
/// add up to the number of parcels.
///
/// Expected: Ok with pending=2, delivered=1
#[tokio::test]
async fn one_entry_per_distinct_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Parcel)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    ParcelFactory::new(db).delivery_status("pending").build().await?;
    ParcelFactory::new(db).delivery_status("pending").build().await?;
    ParcelFactory::new(db).delivery_status("delivered").build().await?;

    let repo = ParcelRepository::new(db);
    let counts = repo.count_by_status().await?;

    assert_eq!(counts.len(), 2);
    assert_eq!(counts[0].status, "delivered");
    assert_eq!(counts[0].count, 1);
    assert_eq!(counts[1].status, "pending");
    assert_eq!(counts[1].count, 2);
    assert_eq!(
        counts.iter().map(|c| c.count).sum::<u64>(),
        repo.count().await?
    );

    Ok(())
}

/// Tests the per-rider aggregation matches on the assigned rider name.
///
/// Expected: Ok with only the named rider's parcels counted
#[tokio::test]
async fn counts_by_rider_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Parcel)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    ParcelFactory::new(db)
        .assigned_rider(Uuid::new_v4(), "Rahim")
        .delivery_status("in_transit")
        .build()
        .await?;
    ParcelFactory::new(db)
        .assigned_rider(Uuid::new_v4(), "Karim")
        .delivery_status("in_transit")
        .build()
        .await?;

    let counts = ParcelRepository::new(db)
        .count_by_status_for_rider_name("Rahim")
        .await?;

    assert_eq!(counts.len(), 1);
    assert_eq!(counts[0].count, 1);

    Ok(())
}

/// Tests the per-user aggregation only counts paid parcels of that creator.
///
/// Expected: Ok with one paid pending parcel
#[tokio::test]
async fn counts_paid_parcels_of_creator() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Parcel)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    ParcelFactory::new(db)
        .created_by("alice@example.com")
        .payment_status("paid")
        .build()
        .await?;
    ParcelFactory::new(db)
        .created_by("alice@example.com")
        .build()
        .await?;
    ParcelFactory::new(db)
        .created_by("bob@example.com")
        .payment_status("paid")
        .build()
        .await?;

    let counts = ParcelRepository::new(db)
        .count_paid_by_status_for_creator("alice@example.com")
        .await?;

    assert_eq!(counts.len(), 1);
    assert_eq!(counts[0].status, "pending");
    assert_eq!(counts[0].count, 1);

    Ok(())
}
