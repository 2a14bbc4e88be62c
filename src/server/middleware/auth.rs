//! Per-route authorization gate.
//!
//! Controllers build an `AuthGuard` from the request headers and call `require` with the
//! permissions the route needs. Checks run in order: bearer token extraction, identity
//! verification, then the stored-role comparison for each permission.

use axum::http::{header::AUTHORIZATION, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::UserRole,
    service::identity::{Identity, IdentityVerifier},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Admin,
    Rider,
}

impl Permission {
    fn role(&self) -> UserRole {
        match self {
            Self::Admin => UserRole::Admin,
            Self::Rider => UserRole::Rider,
        }
    }
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    verifier: &'a dyn IdentityVerifier,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        verifier: &'a dyn IdentityVerifier,
        headers: &'a HeaderMap,
    ) -> Self {
        Self {
            db,
            verifier,
            headers,
        }
    }

    /// Verifies the caller and checks each required permission.
    ///
    /// An empty permission list only verifies the bearer token. Otherwise the caller's
    /// stored user is loaded once and its role must equal the role of every permission.
    ///
    /// # Returns
    /// - `Ok(Identity)` - Caller verified and all permissions satisfied
    /// - `Err(AuthError::MissingBearerToken)` - No well-formed `Bearer` header (401)
    /// - `Err(AuthError::InvalidToken)` - Verifier rejected the token (403)
    /// - `Err(AuthError::UserNotInDatabase)` - No stored user for the caller (403)
    /// - `Err(AuthError::AccessDenied)` - Stored role differs from a required role (403)
    /// - `Err(AppError::DbErr)` - Database error during the role lookup
    pub async fn require(&self, permissions: &[Permission]) -> Result<Identity, AppError> {
        let token = bearer_token(self.headers).ok_or(AuthError::MissingBearerToken)?;

        let identity = self
            .verifier
            .verify(token)
            .await
            .map_err(AuthError::InvalidToken)?;

        if permissions.is_empty() {
            return Ok(identity);
        }

        let Some(user) = UserRepository::new(self.db)
            .find_by_email(&identity.email)
            .await?
        else {
            return Err(AuthError::UserNotInDatabase(identity.email).into());
        };

        for permission in permissions {
            let required = permission.role();
            if !user.has_role(required) {
                return Err(AuthError::AccessDenied {
                    email: identity.email,
                    reason: format!("requires role {} but has role {}", required, user.role),
                }
                .into());
            }
        }

        Ok(identity)
    }
}

/// Extracts the token from an `Authorization: Bearer <token>` header.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?.trim();

    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}
