use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentDto {
    pub parcel_id: String,
    pub email: String,
    pub amount: f64,
    pub payment_method: Option<String>,
    pub transaction_id: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct PaymentDto {
    #[serde(rename = "_id")]
    pub id: Uuid,
    #[serde(rename = "parcelId")]
    pub parcel_id: Uuid,
    pub email: String,
    pub amount: f64,
    #[serde(rename = "paymentMethod")]
    pub payment_method: Option<String>,
    #[serde(rename = "transactionId")]
    pub transaction_id: Option<String>,
    pub paid_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentSummaryDto {
    pub total_payments: u64,
    pub total_amount: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentIntentDto {
    pub amount_in_cents: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntentDto {
    pub client_secret: String,
}
