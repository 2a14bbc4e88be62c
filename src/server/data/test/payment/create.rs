use super::*;

/// Tests recording a payment against a parcel.
///
/// Expected: Ok with the payment stored under the parcel reference
#[tokio::test]
async fn stores_payment_for_parcel() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Payment)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let repo = PaymentRepository::new(db);
    let parcel_id = Uuid::new_v4();
    let paid_at = Utc::now();

    let payment = repo
        .create(
            CreatePaymentParams {
                parcel_id,
                email: "alice@example.com".to_string(),
                amount: 150.0,
                payment_method: Some("card".to_string()),
                transaction_id: Some("pi_123".to_string()),
            },
            paid_at,
        )
        .await?;

    assert_eq!(payment.paid_at, paid_at);

    let stored = repo.get_by_parcel_id(parcel_id).await?;
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].id, payment.id);
    assert_eq!(stored[0].transaction_id.as_deref(), Some("pi_123"));

    Ok(())
}
