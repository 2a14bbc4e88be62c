use super::*;

/// Tests listing riders by approval status.
///
/// Expected: Ok with only pending riders
#[tokio::test]
async fn filters_by_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Rider)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    RiderFactory::new(db).status("pending").build().await?;
    RiderFactory::new(db).status("active").build().await?;

    let pending = RiderRepository::new(db).get_by_status("pending").await?;

    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].status, "pending");

    Ok(())
}

/// Tests the district lookup returns only active riders of that district.
///
/// Expected: Ok with the single active Sylhet rider
#[tokio::test]
async fn available_lists_active_riders_in_district() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Rider)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let active = RiderFactory::new(db)
        .district("Sylhet")
        .status("active")
        .build()
        .await?;
    RiderFactory::new(db)
        .district("Sylhet")
        .status("pending")
        .build()
        .await?;
    RiderFactory::new(db)
        .district("Dhaka")
        .status("active")
        .build()
        .await?;

    let riders = RiderRepository::new(db)
        .get_active_in_district("Sylhet")
        .await?;

    assert_eq!(riders.len(), 1);
    assert_eq!(riders[0].id, active.id);

    Ok(())
}
