use super::*;

/// Tests storing a rider application with extra fields.
///
/// Expected: Ok with extra fields kept in details and an idle work status
#[tokio::test]
async fn stores_application() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Rider)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let repo = RiderRepository::new(db);

    let mut details = Map::new();
    details.insert("bikeRegistration".to_string(), json!("DHK-1234"));

    let rider = repo
        .create(CreateRiderParams {
            email: "rider@example.com".to_string(),
            name: "Rahim".to_string(),
            district: "Dhaka".to_string(),
            status: "pending".to_string(),
            details,
        })
        .await?;

    let stored = repo.find_by_email("rider@example.com").await?.unwrap();
    assert_eq!(stored.id, rider.id);
    assert_eq!(stored.status, "pending");
    assert_eq!(stored.work_status.as_deref(), Some("idle"));
    assert_eq!(stored.details["bikeRegistration"], "DHK-1234");

    Ok(())
}
