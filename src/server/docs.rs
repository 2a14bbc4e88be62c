//! OpenAPI document served by the Swagger UI.

use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};

use crate::{
    model::{
        api::{DeleteResultDto, ErrorDto, InsertResultDto, UpdateResultDto},
        parcel::{AssignRiderDto, AssignRiderResultDto, UpdateParcelStatusDto},
        payment::{
            CreatePaymentDto, CreatePaymentIntentDto, PaymentDto, PaymentIntentDto,
            PaymentSummaryDto,
        },
        report::{DashboardStatsDto, StatusCountDto},
        rider::{CreateRiderDto, RiderStatusResultDto, UpdateRiderStatusDto},
        tracking::{CreateTrackingLogDto, TrackingLogDto},
        user::{
            UpdateProfileDto, UpdateRoleDto, UpsertUserDto, UpsertUserResultDto, UserProfileDto,
            UserRoleDto, UserSearchResultDto,
        },
    },
    server::controller::{health, parcel, payment, report, rider, tracking, user},
};

/// Registers the `bearer` scheme referenced by protected routes.
struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "parcel-delivery",
        description = "Parcel delivery coordination API"
    ),
    paths(
        health::health,
        parcel::create_parcel,
        parcel::get_parcels,
        parcel::get_parcel,
        parcel::update_parcel,
        parcel::delete_parcel,
        parcel::assign_rider,
        parcel::update_parcel_status,
        parcel::cash_out_parcel,
        parcel::get_delivery_status_count,
        parcel::get_rider_status_count,
        parcel::get_user_status_count,
        parcel::get_user_recent_parcels,
        parcel::get_rider_parcels,
        parcel::get_rider_completed_parcels,
        payment::create_payment,
        payment::get_payments,
        payment::get_user_payment_summary,
        payment::get_user_recent_payments,
        payment::create_payment_intent,
        rider::apply,
        rider::get_pending_riders,
        rider::get_active_riders,
        rider::get_available_riders,
        rider::update_rider_status,
        tracking::create_tracking_log,
        tracking::get_tracking_history,
        user::upsert_user,
        user::update_profile,
        user::get_profile,
        user::search_users,
        user::get_user_role,
        user::update_user_role,
        report::get_dashboard_stats
    ),
    components(schemas(
        ErrorDto,
        InsertResultDto,
        UpdateResultDto,
        DeleteResultDto,
        AssignRiderDto,
        AssignRiderResultDto,
        UpdateParcelStatusDto,
        CreatePaymentDto,
        PaymentDto,
        PaymentSummaryDto,
        CreatePaymentIntentDto,
        PaymentIntentDto,
        StatusCountDto,
        DashboardStatsDto,
        UpdateRiderStatusDto,
        RiderStatusResultDto,
        CreateRiderDto,
        CreateTrackingLogDto,
        TrackingLogDto,
        UpdateProfileDto,
        UpdateRoleDto,
        UpsertUserDto,
        UpsertUserResultDto,
        UserProfileDto,
        UserRoleDto,
        UserSearchResultDto
    )),
    modifiers(&BearerAuth)
)]
pub struct ApiDoc;
