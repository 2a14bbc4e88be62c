use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory::user::UserFactory};

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::{AuthGuard, Permission},
    test_support::StaticIdentityVerifier,
};

mod require;

fn bearer(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );
    headers
}
