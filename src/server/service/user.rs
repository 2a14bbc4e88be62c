//! User account service.

use chrono::Utc;
use sea_orm::{DatabaseConnection, SqlErr};
use uuid::Uuid;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{
        AssignableRole, UpdateProfileParams, UpsertOutcome, UpsertUserParams, User, UserRole,
    },
};

/// Maximum number of users returned by the email search.
const SEARCH_LIMIT: u64 = 10;

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates the account on first login or refreshes its login time.
    ///
    /// Two concurrent first logins for one email race on the unique email column; the
    /// loser falls back to refreshing the winner's login time.
    ///
    /// # Returns
    /// - `Ok(UpsertOutcome::Inserted(id))` - New account created with role `user`
    /// - `Ok(UpsertOutcome::Existing)` - Account existed; `last_log_in` refreshed
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn upsert(&self, params: UpsertUserParams) -> Result<UpsertOutcome, AppError> {
        let repo = UserRepository::new(self.db);
        let now = Utc::now();

        if repo.find_by_email(&params.email).await?.is_some() {
            repo.touch_last_log_in(&params.email, now).await?;
            return Ok(UpsertOutcome::Existing);
        }

        let email = params.email.clone();
        match repo.create(params, now).await {
            Ok(user) => Ok(UpsertOutcome::Inserted(user.id)),
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                tracing::debug!("Concurrent first login for {}", email);
                repo.touch_last_log_in(&email, now).await?;
                Ok(UpsertOutcome::Existing)
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Updates name, photo and email of the user identified by `params.email`.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of users modified
    /// - `Err(AppError::BadRequest)` - The new email belongs to another user
    /// - `Err(AppError::NotFound)` - No user with that email
    pub async fn update_profile(&self, params: UpdateProfileParams) -> Result<u64, AppError> {
        let modified = match UserRepository::new(self.db)
            .update_profile(params, Utc::now())
            .await
        {
            Ok(modified) => modified,
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                return Err(AppError::BadRequest("Email already in use".to_string()));
            }
            Err(err) => return Err(err.into()),
        };

        if modified == 0 {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        Ok(modified)
    }

    pub async fn get_by_email(&self, email: &str) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Case-insensitive email search, capped at ten users.
    pub async fn search(&self, fragment: &str) -> Result<Vec<User>, AppError> {
        Ok(UserRepository::new(self.db)
            .search_by_email(fragment, SEARCH_LIMIT)
            .await?)
    }

    /// Sets the role of a user by id.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of users modified
    /// - `Err(AppError::NotFound)` - No user with that id
    pub async fn set_role(&self, id: Uuid, role: AssignableRole) -> Result<u64, AppError> {
        let modified = UserRepository::new(self.db)
            .set_role_by_id(id, role.as_role())
            .await?;

        if modified == 0 {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        Ok(modified)
    }

    /// Stored role of a user, `user` when no account exists.
    pub async fn get_role(&self, email: &str) -> Result<String, AppError> {
        let user = UserRepository::new(self.db).find_by_email(email).await?;

        Ok(user
            .map(|u| u.role)
            .unwrap_or_else(|| UserRole::User.as_str().to_string()))
    }
}
