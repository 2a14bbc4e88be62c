//! User domain models and parameters.
//!
//! Users are keyed by email. Two role enumerations exist: `UserRole` covers every role a
//! stored account can hold, while `AssignableRole` is the narrower set an admin may set
//! directly through the role-change endpoint. Rider accounts are only created through
//! rider approval.

use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::{
    model::user::{UpdateProfileDto, UpsertUserDto, UserProfileDto, UserSearchResultDto},
    server::{error::AppError, model::parcel::into_object},
};

/// Role held by a stored user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserRole {
    User,
    Admin,
    Rider,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
            Self::Rider => "rider",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role an admin may assign through the role-change endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignableRole {
    Admin,
    User,
}

impl AssignableRole {
    pub fn as_role(&self) -> UserRole {
        match self {
            Self::Admin => UserRole::Admin,
            Self::User => UserRole::User,
        }
    }
}

impl FromStr for AssignableRole {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "admin" => Ok(Self::Admin),
            "user" => Ok(Self::User),
            other => Err(AppError::BadRequest(format!("Invalid role: {}", other))),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: Option<String>,
    pub photo_url: Option<String>,
    /// Stored role string; compared verbatim by the authorization gate.
    pub role: String,
    pub details: Map<String, Value>,
    pub created_at: DateTime<Utc>,
    pub last_log_in: DateTime<Utc>,
}

impl User {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            name: entity.name,
            photo_url: entity.photo_url,
            role: entity.role,
            details: into_object(entity.details),
            created_at: entity.created_at,
            last_log_in: entity.last_log_in,
        }
    }

    pub fn has_role(&self, role: UserRole) -> bool {
        self.role == role.as_str()
    }

    pub fn into_profile_dto(self) -> UserProfileDto {
        UserProfileDto {
            email: self.email,
            name: self.name,
            photo_url: self.photo_url,
            role: self.role,
        }
    }

    pub fn into_search_dto(self) -> UserSearchResultDto {
        UserSearchResultDto {
            id: self.id,
            email: self.email,
            name: self.name,
            role: self.role,
            created_at: self.created_at,
        }
    }
}

/// Parameters for the login upsert.
#[derive(Debug, Clone, PartialEq)]
pub struct UpsertUserParams {
    pub email: String,
    pub name: Option<String>,
    pub photo_url: Option<String>,
    /// Extra profile fields stored on a newly created account.
    pub details: Map<String, Value>,
}

impl UpsertUserParams {
    /// Converts a login payload. Any submitted `role` is discarded.
    ///
    /// # Returns
    /// - `Ok(UpsertUserParams)` - Payload accepted
    /// - `Err(AppError::BadRequest)` - Email is blank
    pub fn from_dto(dto: UpsertUserDto) -> Result<Self, AppError> {
        if dto.email.trim().is_empty() {
            return Err(AppError::BadRequest("email is required".to_string()));
        }

        let mut details = dto.details;
        for key in ["_id", "created_at", "last_log_in"] {
            details.remove(key);
        }

        Ok(Self {
            email: dto.email,
            name: dto.name,
            photo_url: dto.photo_url,
            details,
        })
    }
}

/// Parameters for a partial profile update of the user identified by `email`.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateProfileParams {
    pub email: String,
    pub name: Option<String>,
    pub photo_url: Option<String>,
    pub new_email: Option<String>,
}

impl UpdateProfileParams {
    pub fn from_dto(dto: UpdateProfileDto) -> Result<Self, AppError> {
        if dto.email.trim().is_empty() {
            return Err(AppError::BadRequest("email is required".to_string()));
        }

        Ok(Self {
            email: dto.email,
            name: dto.name,
            photo_url: dto.photo_url,
            new_email: dto.new_email.filter(|e| !e.trim().is_empty()),
        })
    }
}

/// Outcome of the login upsert.
#[derive(Debug, Clone, PartialEq)]
pub enum UpsertOutcome {
    Inserted(Uuid),
    Existing,
}
