use axum::{
    routing::{get, patch, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{health, parcel, payment, report, rider, tracking, user},
    docs::ApiDoc,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(health::health))
        .route(
            "/parcels",
            get(parcel::get_parcels).post(parcel::create_parcel),
        )
        .route(
            "/parcels/{id}",
            get(parcel::get_parcel)
                .patch(parcel::update_parcel)
                .delete(parcel::delete_parcel),
        )
        .route("/parcels/{id}/assign", patch(parcel::assign_rider))
        .route("/parcels/{id}/status", patch(parcel::update_parcel_status))
        .route("/parcels/{id}/cashout", patch(parcel::cash_out_parcel))
        .route(
            "/parcels/delivery/status-count",
            get(parcel::get_delivery_status_count),
        )
        .route(
            "/parcels/rider/status-count",
            get(parcel::get_rider_status_count),
        )
        .route(
            "/parcels/user/status-count",
            get(parcel::get_user_status_count),
        )
        .route("/parcels/user/recent", get(parcel::get_user_recent_parcels))
        .route("/rider/parcels", get(parcel::get_rider_parcels))
        .route(
            "/rider/completed-parcels",
            get(parcel::get_rider_completed_parcels),
        )
        .route("/tracking", post(tracking::create_tracking_log))
        .route(
            "/tracking/{tracking_id}",
            get(tracking::get_tracking_history),
        )
        .route(
            "/payments",
            get(payment::get_payments).post(payment::create_payment),
        )
        .route(
            "/payments/user/summary",
            get(payment::get_user_payment_summary),
        )
        .route(
            "/payments/user/recent",
            get(payment::get_user_recent_payments),
        )
        .route(
            "/create-payment-intent",
            post(payment::create_payment_intent),
        )
        .route("/riders", post(rider::apply))
        .route("/riders/pending", get(rider::get_pending_riders))
        .route("/riders/active", get(rider::get_active_riders))
        .route("/riders/available", get(rider::get_available_riders))
        .route("/riders/{id}/status", patch(rider::update_rider_status))
        .route("/users", post(user::upsert_user))
        .route("/users/update-profile", patch(user::update_profile))
        .route("/users/profile", get(user::get_profile))
        .route("/users/search", get(user::search_users))
        // GET takes an email, PATCH takes a user id.
        .route(
            "/users/{user}/role",
            get(user::get_user_role).patch(user::update_user_role),
        )
        .route("/dashboard-stats", get(report::get_dashboard_stats))
}

/// Full application with state, CORS, request tracing and API docs.
pub fn app(state: AppState) -> Router {
    router()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
