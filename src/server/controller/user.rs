use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, UpdateResultDto},
        user::{
            UpdateProfileDto, UpdateRoleDto, UpsertUserDto, UpsertUserResultDto, UserProfileDto,
            UserRoleDto, UserSearchResultDto,
        },
    },
    server::{
        controller::EmailQuery,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::user::{AssignableRole, UpdateProfileParams, UpsertOutcome, UpsertUserParams, User},
        service::user::UserService,
        state::AppState,
        util::parse::{parse_id, require_param},
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Register a user on first login, or record a repeat login.
///
/// New accounts always get the `user` role; a role in the payload is ignored.
///
/// # Returns
/// - `201 Created` - Account created
/// - `200 OK` - Account already existed; its last login time was refreshed
/// - `400 Bad Request` - Missing email
#[utoipa::path(
    post,
    path = "/users",
    tag = USER_TAG,
    request_body = UpsertUserDto,
    responses(
        (status = 201, description = "User created", body = UpsertUserResultDto),
        (status = 200, description = "User already exists", body = UpsertUserResultDto),
        (status = 400, description = "Missing email", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upsert_user(
    State(state): State<AppState>,
    Json(payload): Json<UpsertUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = UpsertUserParams::from_dto(payload)?;

    let outcome = UserService::new(&state.db).upsert(params).await?;

    let response = match outcome {
        UpsertOutcome::Inserted(id) => (
            StatusCode::CREATED,
            Json(UpsertUserResultDto {
                inserted: true,
                inserted_id: Some(id),
                message: "User created".to_string(),
            }),
        ),
        UpsertOutcome::Existing => (
            StatusCode::OK,
            Json(UpsertUserResultDto {
                inserted: false,
                inserted_id: None,
                message: "User already exists".to_string(),
            }),
        ),
    };

    Ok(response)
}

/// Update a user's name, photo or email.
///
/// # Returns
/// - `200 OK` - Update result
/// - `400 Bad Request` - Missing email, or the new email belongs to another user
/// - `404 Not Found` - No user with that email
#[utoipa::path(
    patch,
    path = "/users/update-profile",
    tag = USER_TAG,
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Profile updated", body = UpdateResultDto),
        (status = 400, description = "Missing email or email already in use", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_profile(
    State(state): State<AppState>,
    Json(payload): Json<UpdateProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = UpdateProfileParams::from_dto(payload)?;

    let modified = UserService::new(&state.db).update_profile(params).await?;

    Ok((StatusCode::OK, Json(UpdateResultDto::from_rows(modified))))
}

/// Get a user's profile by email.
#[utoipa::path(
    get,
    path = "/users/profile",
    tag = USER_TAG,
    params(
        ("email" = String, Query, description = "User email")
    ),
    responses(
        (status = 200, description = "User profile", body = UserProfileDto),
        (status = 400, description = "Missing email", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_profile(
    State(state): State<AppState>,
    Query(query): Query<EmailQuery>,
) -> Result<impl IntoResponse, AppError> {
    let email = require_param("email", query.email.as_deref())?;

    let user = UserService::new(&state.db).get_by_email(email).await?;

    Ok((StatusCode::OK, Json(user.into_profile_dto())))
}

/// Case-insensitive search of users by email fragment.
///
/// # Returns
/// - `200 OK` - Up to ten matching users
/// - `400 Bad Request` - Missing email fragment
#[utoipa::path(
    get,
    path = "/users/search",
    tag = USER_TAG,
    params(
        ("email" = String, Query, description = "Email fragment")
    ),
    responses(
        (status = 200, description = "Matching users", body = Vec<UserSearchResultDto>),
        (status = 400, description = "Missing email fragment", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_users(
    State(state): State<AppState>,
    Query(query): Query<EmailQuery>,
) -> Result<impl IntoResponse, AppError> {
    let fragment = require_param("email", query.email.as_deref())?;

    let users = UserService::new(&state.db).search(fragment).await?;

    let users: Vec<UserSearchResultDto> = users.into_iter().map(User::into_search_dto).collect();

    Ok((StatusCode::OK, Json(users)))
}

/// Look up the role of a user by email.
///
/// Unknown emails report the `user` role.
#[utoipa::path(
    get,
    path = "/users/{email}/role",
    tag = USER_TAG,
    params(
        ("email" = String, Path, description = "User email")
    ),
    responses(
        (status = 200, description = "User role", body = UserRoleDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_role(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let role = UserService::new(&state.db).get_role(&email).await?;

    Ok((StatusCode::OK, Json(UserRoleDto { role })))
}

/// Change a user's role by id.
///
/// Only `admin` and `user` can be assigned here; riders are promoted through rider
/// approval.
///
/// # Access Control
/// - `Admin` - Caller's stored role must be `admin`
///
/// # Returns
/// - `200 OK` - Update result
/// - `400 Bad Request` - Malformed id or unassignable role
/// - `401 Unauthorized` - No bearer token
/// - `403 Forbidden` - Caller is not an admin
/// - `404 Not Found` - No user with that id
#[utoipa::path(
    patch,
    path = "/users/{id}/role",
    tag = USER_TAG,
    params(
        ("id" = String, Path, description = "User id")
    ),
    request_body = UpdateRoleDto,
    responses(
        (status = 200, description = "Role updated", body = UpdateResultDto),
        (status = 400, description = "Malformed id or invalid role", body = ErrorDto),
        (status = 401, description = "Missing bearer token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_user_role(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(payload): Json<UpdateRoleDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, state.identity_verifier.as_ref(), &headers)
        .require(&[Permission::Admin])
        .await?;

    let id = parse_id(&id)?;
    let role: AssignableRole = payload.role.parse()?;

    let modified = UserService::new(&state.db).set_role(id, role).await?;

    Ok((StatusCode::OK, Json(UpdateResultDto::from_rows(modified))))
}
