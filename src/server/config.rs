use std::str::FromStr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_PAYMENT_GATEWAY_URL: &str = "https://api.stripe.com";
const DEFAULT_PAYMENT_CURRENCY: &str = "usd";
const IDENTITY_ISSUER_PREFIX: &str = "https://securetoken.google.com/";

/// How operations that write to two tables commit their writes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WriteConsistency {
    /// Two independent writes. A failed second write leaves the first in place.
    #[default]
    BestEffort,
    /// Both writes run inside one database transaction.
    Transactional,
}

impl WriteConsistency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BestEffort => "best_effort",
            Self::Transactional => "transactional",
        }
    }
}

impl FromStr for WriteConsistency {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "best_effort" | "best-effort" => Ok(Self::BestEffort),
            "transactional" => Ok(Self::Transactional),
            _ => Err(ConfigError::InvalidEnvVar {
                name: "WRITE_CONSISTENCY".to_string(),
                value: value.to_string(),
            }),
        }
    }
}

pub struct Config {
    pub database_url: String,
    pub port: u16,

    pub identity_project_id: String,
    pub identity_public_key: String,

    pub payment_gateway_secret_key: String,
    pub payment_gateway_url: String,
    pub payment_currency: String,

    pub write_consistency: WriteConsistency,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of a variable by name, or `None` when unset
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and parseable
    /// - `Err(AppError::ConfigErr)` - A required variable is missing or a value is invalid
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        let port = match lookup("PORT") {
            Some(value) => value.parse::<u16>().map_err(|_| ConfigError::InvalidEnvVar {
                name: "PORT".to_string(),
                value,
            })?,
            None => DEFAULT_PORT,
        };

        let write_consistency = match lookup("WRITE_CONSISTENCY") {
            Some(value) => value.parse::<WriteConsistency>()?,
            None => WriteConsistency::default(),
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            port,
            identity_project_id: required("IDENTITY_PROJECT_ID")?,
            identity_public_key: required("IDENTITY_PUBLIC_KEY")?,
            payment_gateway_secret_key: required("PAYMENT_GATEWAY_SECRET_KEY")?,
            payment_gateway_url: lookup("PAYMENT_GATEWAY_URL")
                .unwrap_or_else(|| DEFAULT_PAYMENT_GATEWAY_URL.to_string()),
            payment_currency: lookup("PAYMENT_CURRENCY")
                .unwrap_or_else(|| DEFAULT_PAYMENT_CURRENCY.to_string()),
            write_consistency,
        })
    }

    /// Token issuer expected by the identity verifier.
    pub fn identity_issuer(&self) -> String {
        format!("{}{}", IDENTITY_ISSUER_PREFIX, self.identity_project_id)
    }
}
