//! SMTP transport over STARTTLS, via `lettre`.

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::compose::{Mailbox, OutboundEmail};
use crate::config::SmtpConfig;
use crate::transport::{MailError, MailTransport};

/// Sends mail through an SMTP relay.
pub struct SmtpTransport {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpTransport {
    /// Build the transport. Fails if the relay hostname is unusable for TLS.
    pub fn new(config: &SmtpConfig) -> Result<Self, MailError> {
        let mut builder =
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)?.port(config.port);

        if let (Some(user), Some(pass)) = (&config.user, &config.password) {
            builder = builder.credentials(Credentials::new(user.clone(), pass.clone()));
        }

        Ok(Self {
            mailer: builder.build(),
        })
    }
}

/// Convert a [`Mailbox`] into a parsed `lettre` mailbox.
fn to_lettre(mailbox: &Mailbox) -> Result<lettre::message::Mailbox, MailError> {
    let address: lettre::Address = mailbox.email.parse()?;
    Ok(lettre::message::Mailbox::new(mailbox.name.clone(), address))
}

/// Assemble the MIME message for an [`OutboundEmail`].
pub fn build_message(email: &OutboundEmail) -> Result<Message, MailError> {
    let mut builder = Message::builder()
        .from(to_lettre(&email.from)?)
        .to(to_lettre(&email.to)?)
        .subject(email.subject.clone())
        .header(ContentType::TEXT_HTML);

    if let Some(reply_to) = &email.reply_to {
        builder = builder.reply_to(to_lettre(reply_to)?);
    }

    builder
        .body(email.html.clone())
        .map_err(|e| MailError::Build(e.to_string()))
}

#[async_trait]
impl MailTransport for SmtpTransport {
    async fn send(&self, email: &OutboundEmail) -> Result<(), MailError> {
        let message = build_message(email)?;
        self.mailer.send(message).await?;
        tracing::info!(to = %email.to.email, "Email sent via SMTP");
        Ok(())
    }

    fn name(&self) -> &'static str {
        "smtp"
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::config::DEFAULT_SMTP_PORT;

    fn email(to: &str) -> OutboundEmail {
        OutboundEmail {
            from: Mailbox::named("noreply@condominiofacil.com.br", "Condomínio Fácil"),
            to: Mailbox::new(to),
            reply_to: Some(Mailbox::named("ana@example.com", "Ana")),
            subject: "Nova Demonstração".into(),
            html: "<p>Olá</p>".into(),
        }
    }

    #[test]
    fn message_carries_headers() {
        let message = build_message(&email("vendas@example.com")).unwrap();
        let raw = String::from_utf8(message.formatted()).unwrap();
        assert!(raw.contains("To: vendas@example.com"));
        assert!(raw.contains("Reply-To: Ana <ana@example.com>"));
        assert!(raw.contains("Content-Type: text/html"));
    }

    #[test]
    fn invalid_recipient_is_address_error() {
        assert_matches!(build_message(&email("nobody")), Err(MailError::Address(_)));
    }

    #[tokio::test]
    async fn transport_builds_from_config() {
        let config = SmtpConfig {
            host: "smtp.example.com".into(),
            port: DEFAULT_SMTP_PORT,
            user: Some("user".into()),
            password: Some("pass".into()),
        };
        let transport = SmtpTransport::new(&config).unwrap();
        assert_eq!(transport.name(), "smtp");
    }
}
