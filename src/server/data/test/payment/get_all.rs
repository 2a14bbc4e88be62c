use super::*;

/// Tests listing payments by payer, newest first.
///
/// Expected: Ok with only the payer's payments in descending paid_at order
#[tokio::test]
async fn filters_by_email_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Payment)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let now = Utc::now();

    let older = PaymentFactory::new(db)
        .email("alice@example.com")
        .paid_at(now - Duration::days(1))
        .build()
        .await?;
    let newer = PaymentFactory::new(db)
        .email("alice@example.com")
        .paid_at(now)
        .build()
        .await?;
    PaymentFactory::new(db).email("bob@example.com").build().await?;

    let repo = PaymentRepository::new(db);
    let payments = repo.get_all(Some("alice@example.com")).await?;
    let ids: Vec<Uuid> = payments.iter().map(|p| p.id).collect();

    assert_eq!(ids, vec![newer.id, older.id]);
    assert_eq!(repo.get_all(None).await?.len(), 3);
    assert_eq!(
        repo.get_recent_by_email("alice@example.com", 1).await?[0].id,
        newer.id
    );

    Ok(())
}
