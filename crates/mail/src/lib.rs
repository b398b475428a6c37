//! Mail relay for the marketing site.
//!
//! The relay is expressed once: [`compose`] turns a validated payload into
//! an [`OutboundEmail`], and a [`MailTransport`] delivers it. Two transports
//! are provided:
//!
//! - [`sendgrid::SendGridTransport`]: SendGrid v3 REST API.
//! - [`smtp::SmtpTransport`]: any STARTTLS SMTP relay, via `lettre`.

pub mod compose;
pub mod config;
pub mod relay;
pub mod sendgrid;
pub mod smtp;
pub mod transport;

pub use compose::{compose_contact_email, compose_direct_email, Mailbox, OutboundEmail};
pub use config::{MailConfig, TransportConfig};
pub use relay::MailRelay;
pub use transport::{MailError, MailTransport};
