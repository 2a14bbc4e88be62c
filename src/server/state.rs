//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - Identity verifier for bearer tokens
//! - Payment processor for payment intents
//! - Write consistency mode for operations spanning two tables

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::{
    config::WriteConsistency,
    service::{identity::IdentityVerifier, payment_gateway::PaymentProcessor},
};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: `DatabaseConnection` is a pool handle and the
/// external collaborators sit behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Verifies bearer tokens into caller identities.
    pub identity_verifier: Arc<dyn IdentityVerifier>,

    /// Creates payment intents with the external processor.
    pub payment_processor: Arc<dyn PaymentProcessor>,

    /// How rider assignment, rider activation and payment recording commit.
    pub write_consistency: WriteConsistency,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `identity_verifier` - Bearer token verifier
    /// - `payment_processor` - Payment intent client
    /// - `write_consistency` - Commit mode for two-table writes
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(
        db: DatabaseConnection,
        identity_verifier: Arc<dyn IdentityVerifier>,
        payment_processor: Arc<dyn PaymentProcessor>,
        write_consistency: WriteConsistency,
    ) -> Self {
        Self {
            db,
            identity_verifier,
            payment_processor,
            write_consistency,
        }
    }
}
