//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user accounts keyed by email.
//! It handles account creation on first login, login timestamps, profile edits, role
//! changes and the case-insensitive email search used by the admin tools.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use serde_json::Value;
use uuid::Uuid;

use crate::server::model::user::{UpdateProfileParams, UpsertUserParams, User, UserRole};

use entity::user::Column;

/// Repository providing database operations for user management.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to a database connection or transaction
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds a user by email.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that email
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Inserts a new account with the `user` role.
    ///
    /// # Arguments
    /// - `params` - Email, optional profile fields and extra details
    /// - `now` - Creation and login time
    ///
    /// # Returns
    /// - `Ok(User)` - The inserted user
    /// - `Err(DbErr)` - Database error, including a unique violation when the email
    ///   was inserted concurrently
    pub async fn create(&self, params: UpsertUserParams, now: DateTime<Utc>) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            email: ActiveValue::Set(params.email),
            name: ActiveValue::Set(params.name),
            photo_url: ActiveValue::Set(params.photo_url),
            role: ActiveValue::Set(UserRole::User.as_str().to_string()),
            details: ActiveValue::Set(Value::Object(params.details)),
            created_at: ActiveValue::Set(now),
            last_log_in: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Refreshes a user's last login time.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of users updated (0 or 1)
    /// - `Err(DbErr)` - Database error during update
    pub async fn touch_last_log_in(&self, email: &str, now: DateTime<Utc>) -> Result<u64, DbErr> {
        let result = entity::prelude::User::update_many()
            .col_expr(Column::LastLogIn, Expr::value(now))
            .filter(Column::Email.eq(email))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Updates the profile of the user identified by `params.email`.
    ///
    /// Name, photo and email are only written when provided; the login time is always
    /// refreshed.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of users updated (0 or 1)
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_profile(
        &self,
        params: UpdateProfileParams,
        now: DateTime<Utc>,
    ) -> Result<u64, DbErr> {
        let mut update = entity::prelude::User::update_many()
            .col_expr(Column::LastLogIn, Expr::value(now));

        if let Some(name) = params.name {
            update = update.col_expr(Column::Name, Expr::value(Some(name)));
        }
        if let Some(photo_url) = params.photo_url {
            update = update.col_expr(Column::PhotoUrl, Expr::value(Some(photo_url)));
        }
        if let Some(new_email) = params.new_email {
            update = update.col_expr(Column::Email, Expr::value(new_email));
        }

        let result = update
            .filter(Column::Email.eq(params.email))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Sets the role of the user with the given id.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of users updated (0 or 1)
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_role_by_id(&self, id: Uuid, role: UserRole) -> Result<u64, DbErr> {
        let result = entity::prelude::User::update_many()
            .col_expr(Column::Role, Expr::value(role.as_str()))
            .filter(Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Sets the role of the user with the given email.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of users updated; 0 when no account uses that email
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_role_by_email(&self, email: &str, role: UserRole) -> Result<u64, DbErr> {
        let result = entity::prelude::User::update_many()
            .col_expr(Column::Role, Expr::value(role.as_str()))
            .filter(Column::Email.eq(email))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Searches users whose email contains a fragment, ignoring case.
    ///
    /// `%` and `_` in the fragment match literally.
    ///
    /// # Arguments
    /// - `fragment` - Part of an email address
    /// - `limit` - Maximum number of users returned
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - Matching users ordered by email
    /// - `Err(DbErr)` - Database error during query
    pub async fn search_by_email(&self, fragment: &str, limit: u64) -> Result<Vec<User>, DbErr> {
        let escaped = fragment
            .to_lowercase()
            .replace('\\', "\\\\")
            .replace('%', "\\%")
            .replace('_', "\\_");
        let pattern = format!("%{}%", escaped);

        let entities = entity::prelude::User::find()
            .filter(Expr::cust_with_values(
                "LOWER(email) LIKE ? ESCAPE '\\'",
                [pattern],
            ))
            .order_by_asc(Column::Email)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::User::find().count(self.db).await
    }
}
