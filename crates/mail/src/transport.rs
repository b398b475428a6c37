//! The delivery seam shared by every mail provider.

use async_trait::async_trait;

use crate::compose::OutboundEmail;

/// Error type for mail delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum MailError {
    /// No provider credential is configured.
    #[error("Mail provider is not configured")]
    NotConfigured,

    /// The HTTP request to the provider failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider answered with a non-2xx status code.
    #[error("Mail provider rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },

    /// SMTP transport-level failure (authentication, connection, etc.).
    #[error("SMTP transport error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),

    /// The recipient or sender address could not be parsed.
    #[error("Email address parse error: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The MIME message could not be assembled.
    #[error("Email build error: {0}")]
    Build(String),
}

/// Delivers a composed message through one provider.
#[async_trait]
pub trait MailTransport: Send + Sync {
    async fn send(&self, email: &OutboundEmail) -> Result<(), MailError>;

    /// Provider name, for logging.
    fn name(&self) -> &'static str;
}
