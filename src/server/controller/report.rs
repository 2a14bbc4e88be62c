use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, report::DashboardStatsDto},
    server::{error::AppError, service::report::ReportService, state::AppState},
};

/// Tag for grouping report endpoints in OpenAPI documentation
pub static REPORT_TAG: &str = "report";

/// Platform-wide totals for the admin dashboard.
///
/// # Returns
/// - `200 OK` - Parcel, user, rider and payment totals with revenue and per-status
///   parcel counts
#[utoipa::path(
    get,
    path = "/dashboard-stats",
    tag = REPORT_TAG,
    responses(
        (status = 200, description = "Dashboard statistics", body = DashboardStatsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_dashboard_stats(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let stats = ReportService::new(&state.db).dashboard_stats().await?;

    Ok((StatusCode::OK, Json(stats.into_dto())))
}
