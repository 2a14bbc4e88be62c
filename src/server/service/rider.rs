//! Rider application and approval service.

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    config::WriteConsistency,
    data::{rider::RiderRepository, user::UserRepository},
    error::AppError,
    model::{
        rider::{CreateRiderParams, Rider, RiderStatusChange, UpdateRiderStatusParams},
        user::UserRole,
    },
};

pub struct RiderService<'a> {
    db: &'a DatabaseConnection,
    consistency: WriteConsistency,
}

impl<'a> RiderService<'a> {
    pub fn new(db: &'a DatabaseConnection, consistency: WriteConsistency) -> Self {
        Self { db, consistency }
    }

    pub async fn apply(&self, params: CreateRiderParams) -> Result<Rider, AppError> {
        Ok(RiderRepository::new(self.db).create(params).await?)
    }

    pub async fn get_by_status(&self, status: &str) -> Result<Vec<Rider>, AppError> {
        Ok(RiderRepository::new(self.db).get_by_status(status).await?)
    }

    /// Active riders serving a district.
    pub async fn get_available(&self, district: &str) -> Result<Vec<Rider>, AppError> {
        Ok(RiderRepository::new(self.db)
            .get_active_in_district(district)
            .await?)
    }

    /// Changes a rider's approval status and promotes the linked user on activation.
    ///
    /// When the new status is `active` and an email is given, the user with that email
    /// gets the `rider` role. A missing user is logged but does not fail the call.
    ///
    /// # Returns
    /// - `Ok(RiderStatusChange)` - Per-table modified counts
    /// - `Err(AppError::NotFound)` - No rider with that id; no user is promoted
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn update_status(
        &self,
        params: UpdateRiderStatusParams,
    ) -> Result<RiderStatusChange, AppError> {
        match self.consistency {
            WriteConsistency::BestEffort => update_status_on(self.db, &params).await,
            WriteConsistency::Transactional => {
                let txn = self.db.begin().await?;
                let change = update_status_on(&txn, &params).await?;
                txn.commit().await?;
                Ok(change)
            }
        }
    }
}

async fn update_status_on<C: ConnectionTrait>(
    conn: &C,
    params: &UpdateRiderStatusParams,
) -> Result<RiderStatusChange, AppError> {
    let rider_modified = RiderRepository::new(conn)
        .update_status(params.rider_id, &params.status)
        .await?;

    if rider_modified == 0 {
        return Err(AppError::NotFound("Rider not found".to_string()));
    }

    let user_modified = match params.promotes_user() {
        Some(email) => {
            let modified = UserRepository::new(conn)
                .set_role_by_email(email, UserRole::Rider)
                .await?;
            if modified == 0 {
                tracing::warn!(
                    "Rider {} activated but no user with email {} exists to promote",
                    params.rider_id,
                    email
                );
            }
            modified
        }
        None => 0,
    };

    Ok(RiderStatusChange {
        rider_modified,
        user_modified,
    })
}
