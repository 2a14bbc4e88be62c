use super::*;

/// Tests inserting a parcel from client-submitted fields.
///
/// Verifies that the repository stamps a creation time, forces the payment status to
/// unpaid and stores shipment fields in the details map.
///
/// Expected: Ok with the stored parcel readable by id
#[tokio::test]
async fn creates_unpaid_parcel() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Parcel)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let repo = ParcelRepository::new(db);

    let before = Utc::now();
    let parcel = repo
        .create(CreateParcelParams {
            created_by: Some("sender@example.com".to_string()),
            delivery_status: DeliveryStatus::Pending,
            cashout_status: Some("pending".to_string()),
            details: details(json!({ "title": "Books", "weight": 2 })),
            ..Default::default()
        })
        .await?;

    assert_eq!(parcel.payment_status, "unpaid");
    assert!(parcel.created_at >= before);

    let stored = repo.find_by_id(parcel.id).await?.unwrap();
    assert_eq!(stored.created_by.as_deref(), Some("sender@example.com"));
    assert_eq!(stored.cashout_status.as_deref(), Some("pending"));
    assert_eq!(stored.assigned_rider_id, None);
    assert_eq!(stored.details["title"], "Books");
    assert_eq!(stored.details["weight"], 2);

    Ok(())
}

/// Tests looking up an id that was never inserted.
///
/// Expected: Ok(None)
#[tokio::test]
async fn find_by_id_returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Parcel)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ParcelRepository::new(db).find_by_id(Uuid::new_v4()).await?;

    assert!(result.is_none());

    Ok(())
}
