use super::*;

/// Tests listing parcels newest first with an optional creator filter.
///
/// Expected: Ok with only the creator's parcels, most recent first
#[tokio::test]
async fn filters_by_creator_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Parcel)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let older = ParcelFactory::new(db)
        .created_by("alice@example.com")
        .created_at(now - Duration::hours(2))
        .build()
        .await?;
    let newer = ParcelFactory::new(db)
        .created_by("alice@example.com")
        .created_at(now)
        .build()
        .await?;
    ParcelFactory::new(db)
        .created_by("bob@example.com")
        .build()
        .await?;

    let repo = ParcelRepository::new(db);

    let alice = repo.get_all(Some("alice@example.com")).await?;
    let ids: Vec<Uuid> = alice.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![newer.id, older.id]);

    let all = repo.get_all(None).await?;
    assert_eq!(all.len(), 3);

    Ok(())
}

/// Tests the recent-parcels query caps its result.
///
/// Expected: Ok with at most the requested number of parcels
#[tokio::test]
async fn recent_by_creator_respects_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Parcel)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    for i in 0..7 {
        ParcelFactory::new(db)
            .created_by("alice@example.com")
            .created_at(now - Duration::minutes(i))
            .build()
            .await?;
    }

    let recent = ParcelRepository::new(db)
        .get_recent_by_creator("alice@example.com", 5)
        .await?;

    assert_eq!(recent.len(), 5);
    assert!(recent.windows(2).all(|w| w[0].created_at >= w[1].created_at));

    Ok(())
}
