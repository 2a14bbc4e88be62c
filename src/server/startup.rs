use std::sync::Arc;

use crate::server::{
    config::Config,
    error::AppError,
    service::{
        identity::{IdentityVerifier, JwtIdentityVerifier},
        payment_gateway::{PaymentProcessor, StripePaymentProcessor},
    },
};

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then
/// automatically runs all pending SeaORM migrations to ensure the database schema is
/// up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the HTTP client used for payment processor calls.
///
/// Redirects are disabled so a misconfigured gateway URL cannot bounce requests
/// carrying the secret key to another host.
///
/// # Returns
/// - `Ok(reqwest::Client)` - Configured client
/// - `Err(AppError::InternalError)` - The TLS backend could not be initialised
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(std::time::Duration::from_secs(30))
        .build()
        .map_err(|e| AppError::InternalError(format!("Failed to build HTTP client: {}", e)))
}

/// Creates the bearer token verifier from configuration.
///
/// # Returns
/// - `Ok(Arc<dyn IdentityVerifier>)` - Verifier for the configured provider project
/// - `Err(AppError::ConfigErr)` - The configured public key is invalid
pub fn setup_identity_verifier(config: &Config) -> Result<Arc<dyn IdentityVerifier>, AppError> {
    let verifier = JwtIdentityVerifier::new(
        &config.identity_public_key,
        &config.identity_project_id,
        &config.identity_issuer(),
    )?;

    Ok(Arc::new(verifier))
}

/// Creates the payment processor client from configuration.
pub fn setup_payment_processor(
    config: &Config,
    http_client: reqwest::Client,
) -> Arc<dyn PaymentProcessor> {
    Arc::new(StripePaymentProcessor::new(
        http_client,
        config.payment_gateway_url.clone(),
        config.payment_gateway_secret_key.clone(),
        config.payment_currency.clone(),
    ))
}
