use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde_json::{Map, Value};

use crate::{
    model::{
        api::{DeleteResultDto, ErrorDto, InsertResultDto, UpdateResultDto},
        parcel::{AssignRiderDto, AssignRiderResultDto, ParcelDto, UpdateParcelStatusDto},
        report::StatusCountDto,
    },
    server::{
        controller::EmailQuery,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            parcel::{CreateParcelParams, DeliveryStatus, Parcel, UpdateParcelParams},
            report::StatusCount,
        },
        service::parcel::ParcelService,
        state::AppState,
        util::parse::{parse_id, require_param},
    },
};

/// Tag for grouping parcel endpoints in OpenAPI documentation
pub static PARCEL_TAG: &str = "parcel";

fn into_dtos(parcels: Vec<Parcel>) -> Vec<ParcelDto> {
    parcels.into_iter().map(Parcel::into_dto).collect()
}

fn into_count_dtos(counts: Vec<StatusCount>) -> Vec<StatusCountDto> {
    counts.into_iter().map(StatusCount::into_dto).collect()
}

/// Create a parcel.
///
/// Accepts an arbitrary parcel document. The parcel starts unpaid and, unless the
/// payload says otherwise, pending.
///
/// # Returns
/// - `201 Created` - Id of the inserted parcel
/// - `400 Bad Request` - A lifecycle field has the wrong type, or the payload is paid
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/parcels",
    tag = PARCEL_TAG,
    responses(
        (status = 201, description = "Parcel created", body = InsertResultDto),
        (status = 400, description = "Invalid parcel document", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_parcel(
    State(state): State<AppState>,
    Json(payload): Json<Map<String, Value>>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateParcelParams::from_payload(payload)?;

    let parcel = ParcelService::new(&state.db, state.write_consistency)
        .create(params)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(InsertResultDto {
            inserted_id: parcel.id,
        }),
    ))
}

/// List parcels, newest first.
///
/// # Access Control
/// - Bearer token required
///
/// # Returns
/// - `200 OK` - Parcels, optionally only those created by `email`
/// - `401 Unauthorized` - No bearer token
/// - `403 Forbidden` - Token rejected
#[utoipa::path(
    get,
    path = "/parcels",
    tag = PARCEL_TAG,
    params(
        ("email" = Option<String>, Query, description = "Only parcels created by this email")
    ),
    responses(
        (status = 200, description = "Parcels, newest first"),
        (status = 401, description = "Missing bearer token", body = ErrorDto),
        (status = 403, description = "Invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_parcels(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<EmailQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, state.identity_verifier.as_ref(), &headers)
        .require(&[])
        .await?;

    let parcels = ParcelService::new(&state.db, state.write_consistency)
        .get_all(query.email.as_deref())
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(parcels))))
}

/// Get a parcel by id.
///
/// # Returns
/// - `200 OK` - The parcel document
/// - `400 Bad Request` - Malformed id
/// - `404 Not Found` - No parcel with that id
#[utoipa::path(
    get,
    path = "/parcels/{id}",
    tag = PARCEL_TAG,
    params(
        ("id" = String, Path, description = "Parcel id")
    ),
    responses(
        (status = 200, description = "Parcel document"),
        (status = 400, description = "Malformed id", body = ErrorDto),
        (status = 404, description = "Parcel not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_parcel(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;

    let parcel = ParcelService::new(&state.db, state.write_consistency)
        .get_by_id(id)
        .await?;

    Ok((StatusCode::OK, Json(parcel.into_dto())))
}

/// Partially update a parcel.
///
/// Fields in the body are merged into the stored document. The payment status cannot
/// be changed here.
///
/// # Returns
/// - `200 OK` - Matched and modified counts
/// - `400 Bad Request` - Malformed id or invalid field
/// - `404 Not Found` - No parcel with that id
#[utoipa::path(
    patch,
    path = "/parcels/{id}",
    tag = PARCEL_TAG,
    params(
        ("id" = String, Path, description = "Parcel id")
    ),
    responses(
        (status = 200, description = "Parcel updated", body = UpdateResultDto),
        (status = 400, description = "Malformed id or invalid field", body = ErrorDto),
        (status = 404, description = "Parcel not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_parcel(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<Map<String, Value>>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;
    let params = UpdateParcelParams::from_payload(payload)?;

    let modified = ParcelService::new(&state.db, state.write_consistency)
        .update(id, params)
        .await?;

    Ok((
        StatusCode::OK,
        Json(UpdateResultDto {
            matched_count: 1,
            modified_count: modified,
        }),
    ))
}

/// Delete a parcel.
///
/// A zero `deletedCount` means no parcel had that id.
///
/// # Returns
/// - `200 OK` - Deleted count
/// - `400 Bad Request` - Malformed id
#[utoipa::path(
    delete,
    path = "/parcels/{id}",
    tag = PARCEL_TAG,
    params(
        ("id" = String, Path, description = "Parcel id")
    ),
    responses(
        (status = 200, description = "Delete result", body = DeleteResultDto),
        (status = 400, description = "Malformed id", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_parcel(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;

    let deleted = ParcelService::new(&state.db, state.write_consistency)
        .delete(id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(DeleteResultDto {
            deleted_count: deleted,
        }),
    ))
}

/// Assign a rider to a parcel.
///
/// Sets the parcel to `rider_assigned` and the rider's work status to `in_delivery`.
///
/// # Returns
/// - `200 OK` - Modified counts of the parcel and rider writes
/// - `400 Bad Request` - Malformed parcel or rider id
/// - `404 Not Found` - No parcel with that id
#[utoipa::path(
    patch,
    path = "/parcels/{id}/assign",
    tag = PARCEL_TAG,
    params(
        ("id" = String, Path, description = "Parcel id")
    ),
    request_body = AssignRiderDto,
    responses(
        (status = 200, description = "Rider assigned", body = AssignRiderResultDto),
        (status = 400, description = "Malformed id", body = ErrorDto),
        (status = 404, description = "Parcel not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn assign_rider(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<AssignRiderDto>,
) -> Result<impl IntoResponse, AppError> {
    let parcel_id = parse_id(&id)?;
    let rider_id = parse_id(&payload.rider_id)?;

    let assignment = ParcelService::new(&state.db, state.write_consistency)
        .assign_rider(parcel_id, rider_id, &payload.rider_name)
        .await?;

    Ok((StatusCode::OK, Json(assignment.into_dto())))
}

/// Set a parcel's delivery status.
///
/// `in_transit` stamps `picked_at`, `delivered` stamps `delivered_at`. Any status value
/// is accepted regardless of the current one.
///
/// # Returns
/// - `200 OK` - Update result
/// - `400 Bad Request` - Malformed id or empty status
/// - `404 Not Found` - No parcel with that id
#[utoipa::path(
    patch,
    path = "/parcels/{id}/status",
    tag = PARCEL_TAG,
    params(
        ("id" = String, Path, description = "Parcel id")
    ),
    request_body = UpdateParcelStatusDto,
    responses(
        (status = 200, description = "Status updated", body = UpdateResultDto),
        (status = 400, description = "Malformed id or empty status", body = ErrorDto),
        (status = 404, description = "Parcel not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_parcel_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateParcelStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;
    let status = require_param("status", Some(payload.status.as_str()))?;

    let modified = ParcelService::new(&state.db, state.write_consistency)
        .update_status(id, DeliveryStatus::parse(status))
        .await?;

    Ok((StatusCode::OK, Json(UpdateResultDto::from_rows(modified))))
}

/// Mark a parcel as cashed out.
///
/// # Returns
/// - `200 OK` - Update result
/// - `400 Bad Request` - Malformed id
/// - `404 Not Found` - No parcel with that id
#[utoipa::path(
    patch,
    path = "/parcels/{id}/cashout",
    tag = PARCEL_TAG,
    params(
        ("id" = String, Path, description = "Parcel id")
    ),
    responses(
        (status = 200, description = "Parcel cashed out", body = UpdateResultDto),
        (status = 400, description = "Malformed id", body = ErrorDto),
        (status = 404, description = "Parcel not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn cash_out_parcel(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;

    let modified = ParcelService::new(&state.db, state.write_consistency)
        .cash_out(id)
        .await?;

    Ok((StatusCode::OK, Json(UpdateResultDto::from_rows(modified))))
}

/// Count all parcels by delivery status.
#[utoipa::path(
    get,
    path = "/parcels/delivery/status-count",
    tag = PARCEL_TAG,
    responses(
        (status = 200, description = "One entry per delivery status", body = Vec<StatusCountDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_delivery_status_count(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let counts = ParcelService::new(&state.db, state.write_consistency)
        .count_by_status()
        .await?;

    Ok((StatusCode::OK, Json(into_count_dtos(counts))))
}

/// Count a rider's parcels by delivery status.
///
/// The rider is looked up by email and parcels are matched on the rider's name. An
/// unknown rider yields an empty list.
#[utoipa::path(
    get,
    path = "/parcels/rider/status-count",
    tag = PARCEL_TAG,
    params(
        ("email" = String, Query, description = "Rider email")
    ),
    responses(
        (status = 200, description = "One entry per delivery status", body = Vec<StatusCountDto>),
        (status = 400, description = "Missing email", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_rider_status_count(
    State(state): State<AppState>,
    Query(query): Query<EmailQuery>,
) -> Result<impl IntoResponse, AppError> {
    let email = require_param("email", query.email.as_deref())?;

    let counts = ParcelService::new(&state.db, state.write_consistency)
        .count_by_status_for_rider(email)
        .await?;

    Ok((StatusCode::OK, Json(into_count_dtos(counts))))
}

/// Count a sender's paid parcels by delivery status.
#[utoipa::path(
    get,
    path = "/parcels/user/status-count",
    tag = PARCEL_TAG,
    params(
        ("email" = String, Query, description = "Sender email")
    ),
    responses(
        (status = 200, description = "One entry per delivery status", body = Vec<StatusCountDto>),
        (status = 400, description = "Missing email", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_status_count(
    State(state): State<AppState>,
    Query(query): Query<EmailQuery>,
) -> Result<impl IntoResponse, AppError> {
    let email = require_param("email", query.email.as_deref())?;

    let counts = ParcelService::new(&state.db, state.write_consistency)
        .count_paid_by_status_for_user(email)
        .await?;

    Ok((StatusCode::OK, Json(into_count_dtos(counts))))
}

/// The five most recent parcels of a sender.
#[utoipa::path(
    get,
    path = "/parcels/user/recent",
    tag = PARCEL_TAG,
    params(
        ("email" = String, Query, description = "Sender email")
    ),
    responses(
        (status = 200, description = "Up to five parcels, newest first"),
        (status = 400, description = "Missing email", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_recent_parcels(
    State(state): State<AppState>,
    Query(query): Query<EmailQuery>,
) -> Result<impl IntoResponse, AppError> {
    let email = require_param("email", query.email.as_deref())?;

    let parcels = ParcelService::new(&state.db, state.write_consistency)
        .get_recent_for_user(email)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(parcels))))
}

/// The calling rider's active tasks.
///
/// # Access Control
/// - `Rider` - Caller's stored role must be `rider`
///
/// # Returns
/// - `200 OK` - Assigned and in-transit parcels, newest first
/// - `401 Unauthorized` - No bearer token
/// - `403 Forbidden` - Token rejected or caller is not a rider
/// - `404 Not Found` - Caller has no rider record
#[utoipa::path(
    get,
    path = "/rider/parcels",
    tag = PARCEL_TAG,
    responses(
        (status = 200, description = "Active tasks"),
        (status = 401, description = "Missing bearer token", body = ErrorDto),
        (status = 403, description = "Not a rider", body = ErrorDto),
        (status = 404, description = "Rider record not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_rider_parcels(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let identity = AuthGuard::new(&state.db, state.identity_verifier.as_ref(), &headers)
        .require(&[Permission::Rider])
        .await?;

    let parcels = ParcelService::new(&state.db, state.write_consistency)
        .get_rider_active_tasks(&identity.email)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(parcels))))
}

/// The calling rider's completed deliveries.
///
/// # Access Control
/// - `Rider` - Caller's stored role must be `rider`
///
/// # Returns
/// - `200 OK` - Delivered parcels, most recent delivery first
/// - `401 Unauthorized` - No bearer token
/// - `403 Forbidden` - Token rejected or caller is not a rider
/// - `404 Not Found` - Caller has no rider record
#[utoipa::path(
    get,
    path = "/rider/completed-parcels",
    tag = PARCEL_TAG,
    responses(
        (status = 200, description = "Completed tasks"),
        (status = 401, description = "Missing bearer token", body = ErrorDto),
        (status = 403, description = "Not a rider", body = ErrorDto),
        (status = 404, description = "Rider record not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_rider_completed_parcels(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let identity = AuthGuard::new(&state.db, state.identity_verifier.as_ref(), &headers)
        .require(&[Permission::Rider])
        .await?;

    let parcels = ParcelService::new(&state.db, state.write_consistency)
        .get_rider_completed_tasks(&identity.email)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(parcels))))
}
