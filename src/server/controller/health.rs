/// Tag for grouping the liveness endpoint in OpenAPI documentation
pub static HEALTH_TAG: &str = "health";

/// Liveness check.
///
/// # Returns
/// - `200 OK` - Plain-text confirmation that the server is running
#[utoipa::path(
    get,
    path = "/",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Server is running", body = String, content_type = "text/plain")
    ),
)]
pub async fn health() -> &'static str {
    "Parcel Delivery Server is running..."
}
