use super::*;

/// Tests a partial update writes only the provided columns.
///
/// Expected: Ok(1) with status and details changed and creator untouched
#[tokio::test]
async fn writes_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Parcel)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let parcel = ParcelFactory::new(db)
        .created_by("alice@example.com")
        .details(json!({ "title": "Lamp" }))
        .build()
        .await?;

    let repo = ParcelRepository::new(db);
    let updated = repo
        .update(
            parcel.id,
            UpdateParcelParams {
                delivery_status: Some(DeliveryStatus::InTransit),
                details: details(json!({ "title": "Desk lamp", "fragile": true })),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated, 1);

    let stored = repo.find_by_id(parcel.id).await?.unwrap();
    assert_eq!(stored.delivery_status, DeliveryStatus::InTransit);
    assert_eq!(stored.created_by.as_deref(), Some("alice@example.com"));
    assert_eq!(stored.details["title"], "Desk lamp");
    assert_eq!(stored.details["fragile"], true);

    Ok(())
}

/// Tests the details merge replaces submitted keys whole and keeps the rest.
///
/// Verifies that a nested object is swapped rather than deep-merged and that keys not
/// named in the update survive, including ones written by an earlier update.
///
/// Expected: Ok(1) per update with `size` replaced and `title` plus `note` kept
#[tokio::test]
async fn merges_details_key_by_key() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Parcel)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let parcel = ParcelFactory::new(db)
        .details(json!({ "title": "Lamp", "size": { "w": 10, "h": 20 } }))
        .build()
        .await?;

    let repo = ParcelRepository::new(db);
    let first = repo
        .update(
            parcel.id,
            UpdateParcelParams {
                details: details(json!({ "note": "leave at door" })),
                ..Default::default()
            },
        )
        .await?;
    let second = repo
        .update(
            parcel.id,
            UpdateParcelParams {
                details: details(json!({ "size": { "w": 5 } })),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(first, 1);
    assert_eq!(second, 1);

    let stored = repo.find_by_id(parcel.id).await?.unwrap();
    assert_eq!(stored.details["title"], "Lamp");
    assert_eq!(stored.details["note"], "leave at door");
    assert_eq!(stored.details["size"], json!({ "w": 5 }));

    Ok(())
}

/// Tests updating and deleting an id that matches nothing.
///
/// Expected: Ok(0) for both operations
#[tokio::test]
async fn unknown_id_affects_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Parcel)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let repo = ParcelRepository::new(db);

    let updated = repo
        .update(
            Uuid::new_v4(),
            UpdateParcelParams {
                cashout_status: Some("pending".to_string()),
                ..Default::default()
            },
        )
        .await?;
    let deleted = repo.delete(Uuid::new_v4()).await?;

    assert_eq!(updated, 0);
    assert_eq!(deleted, 0);

    Ok(())
}

/// Tests deleting an existing parcel.
///
/// Expected: Ok(1) and the parcel is gone
#[tokio::test]
async fn deletes_existing_parcel() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Parcel)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let parcel = ParcelFactory::new(db).build().await?;
    let repo = ParcelRepository::new(db);

    assert_eq!(repo.delete(parcel.id).await?, 1);
    assert!(repo.find_by_id(parcel.id).await?.is_none());

    Ok(())
}
