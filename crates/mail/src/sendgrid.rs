//! SendGrid v3 `mail/send` transport.

use async_trait::async_trait;
use serde::Serialize;

use crate::compose::{Mailbox, OutboundEmail};
use crate::transport::{MailError, MailTransport};

/// Production endpoint of the SendGrid v3 API.
pub const DEFAULT_SENDGRID_URL: &str = "https://api.sendgrid.com/v3/mail/send";

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct SendGridRequest<'a> {
    pub personalizations: Vec<Personalization<'a>>,
    pub from: &'a Mailbox,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<&'a Mailbox>,
    pub content: Vec<ContentPart<'a>>,
}

#[derive(Debug, Serialize)]
pub struct Personalization<'a> {
    pub to: Vec<&'a Mailbox>,
    pub subject: &'a str,
}

#[derive(Debug, Serialize)]
pub struct ContentPart<'a> {
    #[serde(rename = "type")]
    pub content_type: &'static str,
    pub value: &'a str,
}

impl<'a> SendGridRequest<'a> {
    pub fn from_email(email: &'a OutboundEmail) -> Self {
        Self {
            personalizations: vec![Personalization {
                to: vec![&email.to],
                subject: &email.subject,
            }],
            from: &email.from,
            reply_to: email.reply_to.as_ref(),
            content: vec![ContentPart {
                content_type: "text/html",
                value: &email.html,
            }],
        }
    }
}

// ---------------------------------------------------------------------------
// Transport
// ---------------------------------------------------------------------------

/// Sends mail through the SendGrid REST API with bearer authentication.
pub struct SendGridTransport {
    client: reqwest::Client,
    api_key: String,
    url: String,
}

impl SendGridTransport {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_url(api_key, DEFAULT_SENDGRID_URL)
    }

    /// Point the transport at another endpoint (sandbox or local stub).
    pub fn with_url(api_key: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl MailTransport for SendGridTransport {
    async fn send(&self, email: &OutboundEmail) -> Result<(), MailError> {
        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&SendGridRequest::from_email(email))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(MailError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        tracing::info!(to = %email.to.email, "Email sent via SendGrid");
        Ok(())
    }

    fn name(&self) -> &'static str {
        "sendgrid"
    }
}
