//! Parcel lifecycle service.
//!
//! Orchestrates parcel CRUD, the status transitions and rider assignment. Assignment
//! touches two tables; how those writes commit is governed by `WriteConsistency`.

use chrono::Utc;
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};
use uuid::Uuid;

use crate::server::{
    config::WriteConsistency,
    data::{parcel::ParcelRepository, rider::RiderRepository},
    error::AppError,
    model::{
        parcel::{CreateParcelParams, DeliveryStatus, Parcel, RiderAssignment, UpdateParcelParams},
        report::StatusCount,
        rider::WORK_STATUS_IN_DELIVERY,
    },
};

/// Number of parcels returned by the recent-parcels query.
const RECENT_PARCELS_LIMIT: u64 = 5;

pub struct ParcelService<'a> {
    db: &'a DatabaseConnection,
    consistency: WriteConsistency,
}

impl<'a> ParcelService<'a> {
    pub fn new(db: &'a DatabaseConnection, consistency: WriteConsistency) -> Self {
        Self { db, consistency }
    }

    pub async fn create(&self, params: CreateParcelParams) -> Result<Parcel, AppError> {
        let repo = ParcelRepository::new(self.db);

        Ok(repo.create(params).await?)
    }

    /// Lists parcels newest first, optionally only those of one creator.
    pub async fn get_all(&self, created_by: Option<&str>) -> Result<Vec<Parcel>, AppError> {
        let repo = ParcelRepository::new(self.db);

        Ok(repo.get_all(created_by).await?)
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Parcel, AppError> {
        let repo = ParcelRepository::new(self.db);

        repo.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Parcel not found".to_string()))
    }

    /// Merges a partial update into an existing parcel.
    ///
    /// Submitted shipment fields are merged key by key over the stored ones.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of parcels modified; 0 when the update carried no fields
    /// - `Err(AppError::NotFound)` - No parcel with that id
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn update(&self, id: Uuid, params: UpdateParcelParams) -> Result<u64, AppError> {
        let repo = ParcelRepository::new(self.db);

        if params.is_empty() {
            return match repo.find_by_id(id).await? {
                Some(_) => Ok(0),
                None => Err(AppError::NotFound("Parcel not found".to_string())),
            };
        }

        match repo.update(id, params).await? {
            0 => Err(AppError::NotFound("Parcel not found".to_string())),
            modified => Ok(modified),
        }
    }

    /// Deletes a parcel. Returns the number of parcels removed.
    pub async fn delete(&self, id: Uuid) -> Result<u64, AppError> {
        let repo = ParcelRepository::new(self.db);

        Ok(repo.delete(id).await?)
    }

    /// Assigns a rider to a parcel and marks the rider as in delivery.
    ///
    /// The parcel write happens first; if it matches nothing the rider is left alone.
    /// With `BestEffort` the two writes are independent, with `Transactional` they
    /// commit together.
    ///
    /// # Returns
    /// - `Ok(RiderAssignment)` - Per-table modified counts
    /// - `Err(AppError::NotFound)` - No parcel with that id
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn assign_rider(
        &self,
        parcel_id: Uuid,
        rider_id: Uuid,
        rider_name: &str,
    ) -> Result<RiderAssignment, AppError> {
        match self.consistency {
            WriteConsistency::BestEffort => {
                assign_rider_on(self.db, parcel_id, rider_id, rider_name).await
            }
            WriteConsistency::Transactional => {
                let txn = self.db.begin().await?;
                let assignment = assign_rider_on(&txn, parcel_id, rider_id, rider_name).await?;
                txn.commit().await?;
                Ok(assignment)
            }
        }
    }

    /// Sets a parcel's delivery status, stamping pickup or delivery time.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of parcels modified
    /// - `Err(AppError::NotFound)` - No parcel with that id
    pub async fn update_status(&self, id: Uuid, status: DeliveryStatus) -> Result<u64, AppError> {
        let repo = ParcelRepository::new(self.db);

        let modified = repo.update_delivery_status(id, &status, Utc::now()).await?;
        if modified == 0 {
            return Err(AppError::NotFound("Parcel not found".to_string()));
        }

        tracing::debug!("Parcel {} moved to {}", id, status);

        Ok(modified)
    }

    /// Marks a parcel as cashed out.
    pub async fn cash_out(&self, id: Uuid) -> Result<u64, AppError> {
        let repo = ParcelRepository::new(self.db);

        let modified = repo.mark_cashed_out(id, Utc::now()).await?;
        if modified == 0 {
            return Err(AppError::NotFound("Parcel not found".to_string()));
        }

        Ok(modified)
    }

    /// Lists the in-progress parcels of the rider registered under `email`.
    ///
    /// # Returns
    /// - `Ok(Vec<Parcel>)` - Assigned and in-transit parcels, newest first
    /// - `Err(AppError::NotFound)` - No rider record for that email
    pub async fn get_rider_active_tasks(&self, email: &str) -> Result<Vec<Parcel>, AppError> {
        let rider_id = self.rider_id_for(email).await?;

        Ok(ParcelRepository::new(self.db)
            .get_active_for_rider(rider_id)
            .await?)
    }

    /// Lists the finished parcels of the rider registered under `email`.
    ///
    /// # Returns
    /// - `Ok(Vec<Parcel>)` - Delivered parcels, most recent delivery first
    /// - `Err(AppError::NotFound)` - No rider record for that email
    pub async fn get_rider_completed_tasks(&self, email: &str) -> Result<Vec<Parcel>, AppError> {
        let rider_id = self.rider_id_for(email).await?;

        Ok(ParcelRepository::new(self.db)
            .get_completed_for_rider(rider_id)
            .await?)
    }

    pub async fn count_by_status(&self) -> Result<Vec<StatusCount>, AppError> {
        Ok(ParcelRepository::new(self.db).count_by_status().await?)
    }

    /// Per-status counts of the parcels carrying the name of the rider with `email`.
    ///
    /// An unknown rider yields an empty list.
    pub async fn count_by_status_for_rider(&self, email: &str) -> Result<Vec<StatusCount>, AppError> {
        let Some(rider) = RiderRepository::new(self.db).find_by_email(email).await? else {
            return Ok(Vec::new());
        };

        Ok(ParcelRepository::new(self.db)
            .count_by_status_for_rider_name(&rider.name)
            .await?)
    }

    /// Per-status counts of a sender's paid parcels.
    pub async fn count_paid_by_status_for_user(
        &self,
        email: &str,
    ) -> Result<Vec<StatusCount>, AppError> {
        Ok(ParcelRepository::new(self.db)
            .count_paid_by_status_for_creator(email)
            .await?)
    }

    /// The five most recent parcels of a sender.
    pub async fn get_recent_for_user(&self, email: &str) -> Result<Vec<Parcel>, AppError> {
        Ok(ParcelRepository::new(self.db)
            .get_recent_by_creator(email, RECENT_PARCELS_LIMIT)
            .await?)
    }

    async fn rider_id_for(&self, email: &str) -> Result<Uuid, AppError> {
        RiderRepository::new(self.db)
            .find_by_email(email)
            .await?
            .map(|rider| rider.id)
            .ok_or_else(|| AppError::NotFound("Rider not found".to_string()))
    }
}

async fn assign_rider_on<C: ConnectionTrait>(
    conn: &C,
    parcel_id: Uuid,
    rider_id: Uuid,
    rider_name: &str,
) -> Result<RiderAssignment, AppError> {
    let parcel_modified = ParcelRepository::new(conn)
        .assign_rider(parcel_id, rider_id, rider_name)
        .await?;

    if parcel_modified == 0 {
        return Err(AppError::NotFound("Parcel not found".to_string()));
    }

    let rider_modified = RiderRepository::new(conn)
        .set_work_status(rider_id, WORK_STATUS_IN_DELIVERY)
        .await?;

    if rider_modified == 0 {
        tracing::warn!(
            "Parcel {} assigned to rider {} but no rider record was updated",
            parcel_id,
            rider_id
        );
    }

    Ok(RiderAssignment {
        parcel_modified,
        rider_modified,
    })
}
