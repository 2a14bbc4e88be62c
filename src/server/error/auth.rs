use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Failures of the identity verifier when checking a bearer token.
#[derive(Error, Debug)]
pub enum IdentityError {
    /// Signature, expiry, issuer or audience validation failed.
    #[error("Token validation failed: {0}")]
    Invalid(#[from] jsonwebtoken::errors::Error),

    /// The token is valid but does not identify an email address.
    #[error("Token does not carry an email claim")]
    MissingEmail,

    /// The token is not known to the static test verifier.
    #[cfg(test)]
    #[error("Unrecognized token")]
    Unrecognized,
}

#[derive(Error, Debug)]
pub enum AuthError {
    /// No `Authorization: Bearer <token>` header on the request.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Missing or malformed bearer token")]
    MissingBearerToken,

    /// The identity verifier rejected the bearer token.
    ///
    /// Results in a 403 Forbidden response.
    #[error("Bearer token rejected: {0}")]
    InvalidToken(#[source] IdentityError),

    /// Verified identity has no stored user record to read a role from.
    ///
    /// Results in a 403 Forbidden response.
    #[error("User {0} not found in database")]
    UserNotInDatabase(String),

    /// Stored role does not equal the role required by the route.
    ///
    /// Results in a 403 Forbidden response.
    #[error("User {email} denied access: {reason}")]
    AccessDenied { email: String, reason: String },

    /// The request targets another user's records.
    ///
    /// Results in a 403 Forbidden response.
    #[error("User {caller} attempted to access records of {requested}")]
    EmailMismatch { caller: String, requested: String },
}

/// Converts authentication errors into HTTP responses.
///
/// Maps authentication errors to appropriate HTTP status codes and generic messages:
/// - `MissingBearerToken` → 401 Unauthorized with "Unauthorized access"
/// - all other variants → 403 Forbidden with "Forbidden access"
///
/// All errors are logged at debug level for diagnostics while keeping client-facing messages
/// generic to avoid information leakage.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::MissingBearerToken => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Unauthorized access".to_string(),
                }),
            )
                .into_response(),
            Self::InvalidToken(_)
            | Self::UserNotInDatabase(_)
            | Self::AccessDenied { .. }
            | Self::EmailMismatch { .. } => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "Forbidden access".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
