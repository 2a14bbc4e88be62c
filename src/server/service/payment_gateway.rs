//! Payment intent creation through the external payment processor.

use async_trait::async_trait;
use serde::Deserialize;

use crate::server::{
    error::{payment::PaymentGatewayError, AppError},
    model::payment::PaymentIntent,
};

/// Creates payment intents for a given amount.
#[async_trait]
pub trait PaymentProcessor: Send + Sync {
    /// Creates an intent for an amount in minor currency units.
    async fn create_payment_intent(
        &self,
        amount_in_cents: i64,
    ) -> Result<PaymentIntent, PaymentGatewayError>;
}

/// Validates the amount and delegates intent creation to the processor.
///
/// # Returns
/// - `Ok(PaymentIntent)` - Intent created
/// - `Err(AppError::BadRequest)` - Amount is zero or negative; the processor is not called
/// - `Err(AppError::PaymentGatewayErr)` - The processor failed
pub async fn create_payment_intent(
    processor: &dyn PaymentProcessor,
    amount_in_cents: i64,
) -> Result<PaymentIntent, AppError> {
    if amount_in_cents <= 0 {
        return Err(AppError::BadRequest(format!(
            "Invalid payment amount: {}",
            amount_in_cents
        )));
    }

    Ok(processor.create_payment_intent(amount_in_cents).await?)
}

#[derive(Deserialize)]
struct PaymentIntentResponse {
    client_secret: Option<String>,
}

/// Stripe-compatible payment intent client.
pub struct StripePaymentProcessor {
    http_client: reqwest::Client,
    base_url: String,
    secret_key: String,
    currency: String,
}

impl StripePaymentProcessor {
    pub fn new(
        http_client: reqwest::Client,
        base_url: impl Into<String>,
        secret_key: impl Into<String>,
        currency: impl Into<String>,
    ) -> Self {
        Self {
            http_client,
            base_url: base_url.into(),
            secret_key: secret_key.into(),
            currency: currency.into(),
        }
    }
}

#[async_trait]
impl PaymentProcessor for StripePaymentProcessor {
    async fn create_payment_intent(
        &self,
        amount_in_cents: i64,
    ) -> Result<PaymentIntent, PaymentGatewayError> {
        let url = format!(
            "{}/v1/payment_intents",
            self.base_url.trim_end_matches('/')
        );

        let response = self
            .http_client
            .post(url)
            .bearer_auth(&self.secret_key)
            .form(&[
                ("amount", amount_in_cents.to_string()),
                ("currency", self.currency.clone()),
                ("payment_method_types[]", "card".to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PaymentGatewayError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let intent: PaymentIntentResponse = response
            .json()
            .await
            .map_err(|e| PaymentGatewayError::InvalidResponse(e.to_string()))?;

        let client_secret = intent.client_secret.ok_or_else(|| {
            PaymentGatewayError::InvalidResponse("missing client_secret".to_string())
        })?;

        Ok(PaymentIntent { client_secret })
    }
}
