//! Payment domain models and parameters.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    model::payment::{CreatePaymentDto, PaymentDto, PaymentSummaryDto},
    server::{error::AppError, util::parse::parse_id},
};

/// A recorded payment. Immutable once inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct Payment {
    pub id: Uuid,
    /// Parcel the payment was made for. Not enforced as a foreign key.
    pub parcel_id: Uuid,
    pub email: String,
    pub amount: f64,
    pub payment_method: Option<String>,
    pub transaction_id: Option<String>,
    pub paid_at: DateTime<Utc>,
}

impl Payment {
    pub fn from_entity(entity: entity::payment::Model) -> Self {
        Self {
            id: entity.id,
            parcel_id: entity.parcel_id,
            email: entity.email,
            amount: entity.amount,
            payment_method: entity.payment_method,
            transaction_id: entity.transaction_id,
            paid_at: entity.paid_at,
        }
    }

    pub fn into_dto(self) -> PaymentDto {
        PaymentDto {
            id: self.id,
            parcel_id: self.parcel_id,
            email: self.email,
            amount: self.amount,
            payment_method: self.payment_method,
            transaction_id: self.transaction_id,
            paid_at: self.paid_at,
        }
    }
}

/// Parameters for recording a payment against a parcel.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatePaymentParams {
    pub parcel_id: Uuid,
    pub email: String,
    pub amount: f64,
    pub payment_method: Option<String>,
    pub transaction_id: Option<String>,
}

impl CreatePaymentParams {
    /// Validates a payment submission.
    ///
    /// # Returns
    /// - `Ok(CreatePaymentParams)` - Well-formed parcel id and non-negative amount
    /// - `Err(AppError::BadRequest)` - Malformed parcel id or negative/non-finite amount
    pub fn from_dto(dto: CreatePaymentDto) -> Result<Self, AppError> {
        let parcel_id = parse_id(&dto.parcel_id)?;

        if !dto.amount.is_finite() || dto.amount < 0.0 {
            return Err(AppError::BadRequest(format!(
                "Invalid payment amount: {}",
                dto.amount
            )));
        }

        Ok(Self {
            parcel_id,
            email: dto.email,
            amount: dto.amount,
            payment_method: dto.payment_method,
            transaction_id: dto.transaction_id,
        })
    }
}

/// Count and sum of one user's payments.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentSummary {
    pub total_payments: u64,
    pub total_amount: f64,
}

impl PaymentSummary {
    pub fn into_dto(self) -> PaymentSummaryDto {
        PaymentSummaryDto {
            total_payments: self.total_payments,
            total_amount: self.total_amount,
        }
    }
}

/// Payment intent created by the external processor.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentIntent {
    /// Secret the client application uses to confirm the payment.
    pub client_secret: String,
}
