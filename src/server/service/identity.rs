//! Bearer token verification against the external identity provider.
//!
//! The provider signs RS256 JWTs whose issuer is derived from the project id and whose
//! audience is the project id itself. Verification only needs the provider's public key;
//! no network call is made per request.

use async_trait::async_trait;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::Deserialize;

use crate::server::error::{auth::IdentityError, config::ConfigError};

/// Verified caller identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub email: String,
    /// Provider-assigned subject id.
    pub subject: String,
}

/// Validates a bearer token and yields the caller's identity.
#[async_trait]
pub trait IdentityVerifier: Send + Sync {
    async fn verify(&self, token: &str) -> Result<Identity, IdentityError>;
}

#[derive(Deserialize)]
struct Claims {
    sub: String,
    email: Option<String>,
}

/// Verifies RS256 JWTs issued by the identity provider.
pub struct JwtIdentityVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl JwtIdentityVerifier {
    /// Creates a verifier for one provider project.
    ///
    /// # Arguments
    /// - `public_key_pem` - PEM-encoded RSA public key of the provider
    /// - `project_id` - Expected token audience
    /// - `issuer` - Expected token issuer
    ///
    /// # Returns
    /// - `Ok(JwtIdentityVerifier)` - Verifier ready for use
    /// - `Err(ConfigError::InvalidIdentityKey)` - The key is not a valid RSA PEM key
    pub fn new(public_key_pem: &str, project_id: &str, issuer: &str) -> Result<Self, ConfigError> {
        let key = DecodingKey::from_rsa_pem(public_key_pem.as_bytes())
            .map_err(ConfigError::InvalidIdentityKey)?;

        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_audience(&[project_id]);
        validation.set_issuer(&[issuer]);
        validation.set_required_spec_claims(&["exp", "sub", "aud", "iss"]);

        Ok(Self { key, validation })
    }
}

#[async_trait]
impl IdentityVerifier for JwtIdentityVerifier {
    async fn verify(&self, token: &str) -> Result<Identity, IdentityError> {
        let data = decode::<Claims>(token, &self.key, &self.validation)?;

        let email = data
            .claims
            .email
            .filter(|e| !e.is_empty())
            .ok_or(IdentityError::MissingEmail)?;

        Ok(Identity {
            email,
            subject: data.claims.sub,
        })
    }
}
