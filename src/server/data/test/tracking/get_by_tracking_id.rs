use super::*;

fn entry(tracking_id: &str, status: &str) -> CreateTrackingLogParams {
    CreateTrackingLogParams {
        tracking_id: tracking_id.to_string(),
        parcel_id: None,
        status: status.to_string(),
        message: None,
        updated_by: Some("admin@example.com".to_string()),
    }
}

/// Tests reading a tracking history in the order it was written.
///
/// Expected: Ok with the two entries of TRK-1, oldest first
#[tokio::test]
async fn returns_history_oldest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::TrackingLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let repo = TrackingLogRepository::new(db);

    repo.create(entry("TRK-1", "pending")).await?;
    repo.create(entry("TRK-1", "in_transit")).await?;
    repo.create(entry("TRK-2", "pending")).await?;

    let logs = repo.get_by_tracking_id("TRK-1").await?;
    let statuses: Vec<&str> = logs.iter().map(|l| l.status.as_str()).collect();

    assert_eq!(statuses, vec!["pending", "in_transit"]);

    Ok(())
}
