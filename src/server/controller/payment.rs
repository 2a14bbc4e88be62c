use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, InsertResultDto},
        payment::{CreatePaymentDto, CreatePaymentIntentDto, PaymentDto, PaymentIntentDto, PaymentSummaryDto},
    },
    server::{
        controller::EmailQuery,
        error::{auth::AuthError, AppError},
        middleware::auth::AuthGuard,
        model::payment::{CreatePaymentParams, Payment},
        service::{payment::PaymentService, payment_gateway},
        state::AppState,
        util::parse::require_param,
    },
};

/// Tag for grouping payment endpoints in OpenAPI documentation
pub static PAYMENT_TAG: &str = "payment";

/// Record a payment and mark its parcel as paid.
///
/// # Access Control
/// - Bearer token required
///
/// # Returns
/// - `201 Created` - Id of the recorded payment
/// - `400 Bad Request` - Malformed parcel id or invalid amount
/// - `401 Unauthorized` - No bearer token
/// - `403 Forbidden` - Token rejected
/// - `404 Not Found` - Parcel does not exist or is already paid
#[utoipa::path(
    post,
    path = "/payments",
    tag = PAYMENT_TAG,
    request_body = CreatePaymentDto,
    responses(
        (status = 201, description = "Payment recorded", body = InsertResultDto),
        (status = 400, description = "Invalid payment", body = ErrorDto),
        (status = 401, description = "Missing bearer token", body = ErrorDto),
        (status = 403, description = "Invalid bearer token", body = ErrorDto),
        (status = 404, description = "Parcel not found or already paid", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_payment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreatePaymentDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, state.identity_verifier.as_ref(), &headers)
        .require(&[])
        .await?;

    let params = CreatePaymentParams::from_dto(payload)?;

    let payment = PaymentService::new(&state.db, state.write_consistency)
        .record(params)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(InsertResultDto {
            inserted_id: payment.id,
        }),
    ))
}

/// List payments, newest first.
///
/// Callers may only list their own payments. Without `email` the caller's own
/// payments are returned.
///
/// # Access Control
/// - Bearer token required; `email` must match the token's email
///
/// # Returns
/// - `200 OK` - Payments of the requested email
/// - `401 Unauthorized` - No bearer token
/// - `403 Forbidden` - Token rejected or `email` belongs to someone else
#[utoipa::path(
    get,
    path = "/payments",
    tag = PAYMENT_TAG,
    params(
        ("email" = Option<String>, Query, description = "Payer email; must match the caller")
    ),
    responses(
        (status = 200, description = "Payments, newest first", body = Vec<PaymentDto>),
        (status = 401, description = "Missing bearer token", body = ErrorDto),
        (status = 403, description = "Invalid token or foreign email", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_payments(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<EmailQuery>,
) -> Result<impl IntoResponse, AppError> {
    let identity = AuthGuard::new(&state.db, state.identity_verifier.as_ref(), &headers)
        .require(&[])
        .await?;

    let email = match query.email {
        Some(requested) if requested != identity.email => {
            return Err(AuthError::EmailMismatch {
                caller: identity.email,
                requested,
            }
            .into())
        }
        Some(requested) => requested,
        None => identity.email,
    };

    let payments = PaymentService::new(&state.db, state.write_consistency)
        .get_all(Some(&email))
        .await?;

    let payments: Vec<PaymentDto> = payments.into_iter().map(Payment::into_dto).collect();

    Ok((StatusCode::OK, Json(payments)))
}

/// Count and total amount of a user's payments.
#[utoipa::path(
    get,
    path = "/payments/user/summary",
    tag = PAYMENT_TAG,
    params(
        ("email" = String, Query, description = "Payer email")
    ),
    responses(
        (status = 200, description = "Payment summary", body = PaymentSummaryDto),
        (status = 400, description = "Missing email", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_payment_summary(
    State(state): State<AppState>,
    Query(query): Query<EmailQuery>,
) -> Result<impl IntoResponse, AppError> {
    let email = require_param("email", query.email.as_deref())?;

    let summary = PaymentService::new(&state.db, state.write_consistency)
        .summary_for_user(email)
        .await?;

    Ok((StatusCode::OK, Json(summary.into_dto())))
}

/// The five most recent payments of a user.
#[utoipa::path(
    get,
    path = "/payments/user/recent",
    tag = PAYMENT_TAG,
    params(
        ("email" = String, Query, description = "Payer email")
    ),
    responses(
        (status = 200, description = "Up to five payments, newest first", body = Vec<PaymentDto>),
        (status = 400, description = "Missing email", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_recent_payments(
    State(state): State<AppState>,
    Query(query): Query<EmailQuery>,
) -> Result<impl IntoResponse, AppError> {
    let email = require_param("email", query.email.as_deref())?;

    let payments = PaymentService::new(&state.db, state.write_consistency)
        .get_recent_for_user(email)
        .await?;

    let payments: Vec<PaymentDto> = payments.into_iter().map(Payment::into_dto).collect();

    Ok((StatusCode::OK, Json(payments)))
}

/// Create a payment intent with the external payment processor.
///
/// # Returns
/// - `200 OK` - Client secret of the created intent
/// - `400 Bad Request` - Amount is zero or negative
/// - `500 Internal Server Error` - Payment processor error
#[utoipa::path(
    post,
    path = "/create-payment-intent",
    tag = PAYMENT_TAG,
    request_body = CreatePaymentIntentDto,
    responses(
        (status = 200, description = "Payment intent created", body = PaymentIntentDto),
        (status = 400, description = "Invalid amount", body = ErrorDto),
        (status = 500, description = "Payment gateway error", body = ErrorDto)
    ),
)]
pub async fn create_payment_intent(
    State(state): State<AppState>,
    Json(payload): Json<CreatePaymentIntentDto>,
) -> Result<impl IntoResponse, AppError> {
    let intent = payment_gateway::create_payment_intent(
        state.payment_processor.as_ref(),
        payload.amount_in_cents,
    )
    .await?;

    Ok((
        StatusCode::OK,
        Json(PaymentIntentDto {
            client_secret: intent.client_secret,
        }),
    ))
}
