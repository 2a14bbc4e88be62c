use thiserror::Error;

/// Failures talking to the external payment processor.
#[derive(Error, Debug)]
pub enum PaymentGatewayError {
    /// The request never produced a response.
    #[error("Payment gateway request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The processor answered with a non-success status.
    #[error("Payment gateway returned status {status}: {body}")]
    Api { status: u16, body: String },

    /// The processor answered 2xx but the body is not a usable payment intent.
    #[error("Invalid payment gateway response: {0}")]
    InvalidResponse(String),
}
