//! In-memory stand-ins for the external collaborators and a router builder for
//! HTTP-level tests.

use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
};

use async_trait::async_trait;
use axum::Router;
use sea_orm::DatabaseConnection;

use crate::server::{
    config::WriteConsistency,
    error::{auth::IdentityError, payment::PaymentGatewayError},
    model::payment::PaymentIntent,
    router,
    service::{
        identity::{Identity, IdentityVerifier},
        payment_gateway::PaymentProcessor,
    },
    state::AppState,
};

/// Maps fixed bearer tokens to identities.
#[derive(Default)]
pub struct StaticIdentityVerifier {
    tokens: HashMap<String, Identity>,
}

impl StaticIdentityVerifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a token that verifies to `email`.
    pub fn with_token(mut self, token: &str, email: &str) -> Self {
        self.tokens.insert(
            token.to_string(),
            Identity {
                email: email.to_string(),
                subject: format!("uid-{}", email),
            },
        );
        self
    }
}

#[async_trait]
impl IdentityVerifier for StaticIdentityVerifier {
    async fn verify(&self, token: &str) -> Result<Identity, IdentityError> {
        self.tokens
            .get(token)
            .cloned()
            .ok_or(IdentityError::Unrecognized)
    }
}

/// Payment processor that answers without any network call and counts invocations.
pub struct FakePaymentProcessor {
    fail: bool,
    calls: AtomicUsize,
}

impl FakePaymentProcessor {
    pub fn succeeding() -> Self {
        Self {
            fail: false,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PaymentProcessor for FakePaymentProcessor {
    async fn create_payment_intent(
        &self,
        amount_in_cents: i64,
    ) -> Result<PaymentIntent, PaymentGatewayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.fail {
            return Err(PaymentGatewayError::Api {
                status: 402,
                body: "card_declined".to_string(),
            });
        }

        Ok(PaymentIntent {
            client_secret: format!("pi_test_{}_secret", amount_in_cents),
        })
    }
}

/// Builds the full application router over a test database.
pub fn test_app(
    db: DatabaseConnection,
    verifier: StaticIdentityVerifier,
    processor: Arc<FakePaymentProcessor>,
) -> Router {
    router::app(AppState::new(
        db,
        Arc::new(verifier),
        processor,
        WriteConsistency::BestEffort,
    ))
}
