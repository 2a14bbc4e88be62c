use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::{ErrorDto, InsertResultDto},
        rider::{CreateRiderDto, RiderDto, RiderStatusResultDto, UpdateRiderStatusDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::rider::{
            CreateRiderParams, Rider, UpdateRiderStatusParams, RIDER_STATUS_ACTIVE,
            RIDER_STATUS_PENDING,
        },
        service::rider::RiderService,
        state::AppState,
        util::parse::{parse_id, require_param},
    },
};

/// Tag for grouping rider endpoints in OpenAPI documentation
pub static RIDER_TAG: &str = "rider";

#[derive(Deserialize, Debug, Default)]
pub struct DistrictQuery {
    pub district: Option<String>,
}

fn into_dtos(riders: Vec<Rider>) -> Vec<RiderDto> {
    riders.into_iter().map(Rider::into_dto).collect()
}

/// Submit a rider application.
///
/// Applications start as `pending` unless the payload sets a status.
///
/// # Returns
/// - `201 Created` - Id of the new rider record
/// - `400 Bad Request` - Email, name or district is blank
#[utoipa::path(
    post,
    path = "/riders",
    tag = RIDER_TAG,
    request_body = CreateRiderDto,
    responses(
        (status = 201, description = "Application stored", body = InsertResultDto),
        (status = 400, description = "Incomplete application", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn apply(
    State(state): State<AppState>,
    Json(payload): Json<CreateRiderDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateRiderParams::from_dto(payload)?;

    let rider = RiderService::new(&state.db, state.write_consistency)
        .apply(params)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(InsertResultDto {
            inserted_id: rider.id,
        }),
    ))
}

async fn get_riders_with_status(
    state: &AppState,
    headers: &HeaderMap,
    status: &str,
) -> Result<Vec<RiderDto>, AppError> {
    let _ = AuthGuard::new(&state.db, state.identity_verifier.as_ref(), headers)
        .require(&[Permission::Admin])
        .await?;

    let riders = RiderService::new(&state.db, state.write_consistency)
        .get_by_status(status)
        .await?;

    Ok(into_dtos(riders))
}

/// List pending rider applications, newest first.
///
/// # Access Control
/// - `Admin` - Caller's stored role must be `admin`
#[utoipa::path(
    get,
    path = "/riders/pending",
    tag = RIDER_TAG,
    responses(
        (status = 200, description = "Pending riders"),
        (status = 401, description = "Missing bearer token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_pending_riders(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let riders = get_riders_with_status(&state, &headers, RIDER_STATUS_PENDING).await?;

    Ok((StatusCode::OK, Json(riders)))
}

/// List active riders, newest first.
///
/// # Access Control
/// - `Admin` - Caller's stored role must be `admin`
#[utoipa::path(
    get,
    path = "/riders/active",
    tag = RIDER_TAG,
    responses(
        (status = 200, description = "Active riders"),
        (status = 401, description = "Missing bearer token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_active_riders(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let riders = get_riders_with_status(&state, &headers, RIDER_STATUS_ACTIVE).await?;

    Ok((StatusCode::OK, Json(riders)))
}

/// Active riders in a district, for assignment.
///
/// # Returns
/// - `200 OK` - Active riders of the district ordered by name
/// - `400 Bad Request` - Missing district
#[utoipa::path(
    get,
    path = "/riders/available",
    tag = RIDER_TAG,
    params(
        ("district" = String, Query, description = "District to search")
    ),
    responses(
        (status = 200, description = "Available riders"),
        (status = 400, description = "Missing district", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_available_riders(
    State(state): State<AppState>,
    Query(query): Query<DistrictQuery>,
) -> Result<impl IntoResponse, AppError> {
    let district = require_param("district", query.district.as_deref())?;

    let riders = RiderService::new(&state.db, state.write_consistency)
        .get_available(district)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(riders))))
}

/// Approve or change the status of a rider.
///
/// Setting the status to `active` with an `email` also promotes that user account to the
/// `rider` role.
///
/// # Access Control
/// - `Admin` - Caller's stored role must be `admin`
///
/// # Returns
/// - `200 OK` - Modified counts of the rider and user writes
/// - `400 Bad Request` - Malformed id or empty status
/// - `401 Unauthorized` - No bearer token
/// - `403 Forbidden` - Caller is not an admin
/// - `404 Not Found` - No rider with that id
#[utoipa::path(
    patch,
    path = "/riders/{id}/status",
    tag = RIDER_TAG,
    params(
        ("id" = String, Path, description = "Rider id")
    ),
    request_body = UpdateRiderStatusDto,
    responses(
        (status = 200, description = "Status updated", body = RiderStatusResultDto),
        (status = 400, description = "Malformed id or empty status", body = ErrorDto),
        (status = 401, description = "Missing bearer token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Rider not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_rider_status(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(payload): Json<UpdateRiderStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, state.identity_verifier.as_ref(), &headers)
        .require(&[Permission::Admin])
        .await?;

    let rider_id = parse_id(&id)?;
    let status = require_param("status", Some(payload.status.as_str()))?.to_string();

    let change = RiderService::new(&state.db, state.write_consistency)
        .update_status(UpdateRiderStatusParams {
            rider_id,
            status,
            email: payload.email,
        })
        .await?;

    Ok((StatusCode::OK, Json(change.into_dto())))
}
