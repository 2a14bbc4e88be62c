use super::*;

/// Tests counting and summing one payer's payments.
///
/// Expected: Ok with count 2 and total 350
#[tokio::test]
async fn sums_payer_amounts() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Payment)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    PaymentFactory::new(db)
        .email("alice@example.com")
        .amount(100.0)
        .build()
        .await?;
    PaymentFactory::new(db)
        .email("alice@example.com")
        .amount(250.0)
        .build()
        .await?;
    PaymentFactory::new(db)
        .email("bob@example.com")
        .amount(999.0)
        .build()
        .await?;

    let repo = PaymentRepository::new(db);
    let summary = repo.summary_by_email("alice@example.com").await?;

    assert_eq!(summary.total_payments, 2);
    assert_eq!(summary.total_amount, 350.0);
    assert_eq!(repo.total_amount().await?, 1349.0);

    Ok(())
}

/// Tests the summary of a payer with no payments.
///
/// Expected: Ok with zero count and zero total
#[tokio::test]
async fn empty_summary_for_unknown_payer() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Payment)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let summary = PaymentRepository::new(db)
        .summary_by_email("nobody@example.com")
        .await?;

    assert_eq!(summary.total_payments, 0);
    assert_eq!(summary.total_amount, 0.0);

    Ok(())
}
