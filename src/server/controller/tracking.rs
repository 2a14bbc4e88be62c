use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, InsertResultDto},
        tracking::{CreateTrackingLogDto, TrackingLogDto},
    },
    server::{
        error::AppError,
        model::tracking::{CreateTrackingLogParams, TrackingLog},
        service::tracking::TrackingService,
        state::AppState,
    },
};

/// Tag for grouping tracking endpoints in OpenAPI documentation
pub static TRACKING_TAG: &str = "tracking";

/// Append a tracking event. The server sets the event time.
#[utoipa::path(
    post,
    path = "/tracking",
    tag = TRACKING_TAG,
    request_body = CreateTrackingLogDto,
    responses(
        (status = 201, description = "Event recorded", body = InsertResultDto),
        (status = 400, description = "Invalid tracking event", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_tracking_log(
    State(state): State<AppState>,
    Json(payload): Json<CreateTrackingLogDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateTrackingLogParams::from_dto(payload)?;

    let log = TrackingService::new(&state.db).append(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(InsertResultDto {
            inserted_id: log.id,
        }),
    ))
}

/// Tracking history of a tracking id, oldest first.
#[utoipa::path(
    get,
    path = "/tracking/{tracking_id}",
    tag = TRACKING_TAG,
    params(
        ("tracking_id" = String, Path, description = "Tracking id")
    ),
    responses(
        (status = 200, description = "Tracking events, oldest first", body = Vec<TrackingLogDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_tracking_history(
    State(state): State<AppState>,
    Path(tracking_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let logs = TrackingService::new(&state.db)
        .get_history(&tracking_id)
        .await?;

    let logs: Vec<TrackingLogDto> = logs.into_iter().map(TrackingLog::into_dto).collect();

    Ok((StatusCode::OK, Json(logs)))
}
