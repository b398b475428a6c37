//! The relay: compose once, deliver through whichever transport is configured.

use std::sync::Arc;

use condofacil_core::contact::{ContactForm, DirectMessage};

use crate::compose::{compose_contact_email, compose_direct_email, Mailbox, OutboundEmail};
use crate::config::{MailConfig, TransportConfig};
use crate::sendgrid::SendGridTransport;
use crate::smtp::SmtpTransport;
use crate::transport::{MailError, MailTransport};

/// Forwards contact-form submissions and direct messages to a mail provider.
#[derive(Clone)]
pub struct MailRelay {
    sender: Mailbox,
    contact_inbox: String,
    transport: Option<Arc<dyn MailTransport>>,
}

impl MailRelay {
    /// Build the relay and its transport from configuration.
    pub fn from_config(config: &MailConfig) -> Result<Self, MailError> {
        let transport: Option<Arc<dyn MailTransport>> = match &config.transport {
            Some(TransportConfig::SendGrid { api_key }) => {
                Some(Arc::new(SendGridTransport::new(api_key.clone())))
            }
            Some(TransportConfig::Smtp(smtp)) => Some(Arc::new(SmtpTransport::new(smtp)?)),
            None => None,
        };
        Ok(Self::new(config, transport))
    }

    /// Build the relay around an explicit transport (or none).
    pub fn new(config: &MailConfig, transport: Option<Arc<dyn MailTransport>>) -> Self {
        Self {
            sender: Mailbox::named(config.from_address.clone(), config.from_name.clone()),
            contact_inbox: config.contact_inbox.clone(),
            transport,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.transport.is_some()
    }

    pub fn transport_name(&self) -> &'static str {
        self.transport.as_ref().map_or("none", |t| t.name())
    }

    /// Forward a demo request to the sales inbox. The form must already be validated.
    pub async fn send_contact(&self, form: &ContactForm) -> Result<(), MailError> {
        let email = compose_contact_email(form, &self.sender, &self.contact_inbox);
        self.deliver(&email).await
    }

    /// Forward a pre-rendered message. The message must already be validated.
    pub async fn send_direct(&self, message: &DirectMessage) -> Result<(), MailError> {
        let email = compose_direct_email(message, &self.sender);
        self.deliver(&email).await
    }

    async fn deliver(&self, email: &OutboundEmail) -> Result<(), MailError> {
        let transport = self.transport.as_ref().ok_or(MailError::NotConfigured)?;
        match transport.send(email).await {
            Ok(()) => Ok(()),
            Err(e) => {
                tracing::error!(transport = transport.name(), to = %email.to.email, error = %e, "Email delivery failed");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use assert_matches::assert_matches;
    use async_trait::async_trait;

    use super::*;

    /// Captures every message instead of sending it.
    #[derive(Default)]
    struct Outbox {
        sent: Mutex<Vec<OutboundEmail>>,
    }

    #[async_trait]
    impl MailTransport for Outbox {
        async fn send(&self, email: &OutboundEmail) -> Result<(), MailError> {
            self.sent.lock().unwrap().push(email.clone());
            Ok(())
        }

        fn name(&self) -> &'static str {
            "outbox"
        }
    }

    fn form() -> ContactForm {
        ContactForm {
            nome: "Ana".into(),
            email: "ana@example.com".into(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn unconfigured_relay_refuses_to_send() {
        let relay = MailRelay::from_config(&MailConfig::default()).unwrap();
        assert!(!relay.is_configured());
        assert_eq!(relay.transport_name(), "none");
        assert_matches!(relay.send_contact(&form()).await, Err(MailError::NotConfigured));
    }

    #[tokio::test]
    async fn contact_form_goes_to_configured_inbox() {
        let outbox = Arc::new(Outbox::default());
        let config = MailConfig {
            contact_inbox: "vendas@example.com".into(),
            ..Default::default()
        };
        let relay = MailRelay::new(&config, Some(outbox.clone()));

        relay.send_contact(&form()).await.unwrap();

        let sent = outbox.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to.email, "vendas@example.com");
        assert_eq!(sent[0].from.email, config.from_address);
    }

    #[tokio::test]
    async fn direct_message_goes_to_its_recipient() {
        let outbox = Arc::new(Outbox::default());
        let relay = MailRelay::new(&MailConfig::default(), Some(outbox.clone()));
        let message = DirectMessage {
            to: "ops@example.com".into(),
            subject: "Oi".into(),
            html: "<p>Oi</p>".into(),
        };

        relay.send_direct(&message).await.unwrap();

        let sent = outbox.sent.lock().unwrap();
        assert_eq!(sent[0].to.email, "ops@example.com");
        assert_eq!(relay.transport_name(), "outbox");
    }

    #[tokio::test]
    async fn sendgrid_config_selects_sendgrid() {
        let config = MailConfig {
            transport: Some(TransportConfig::SendGrid {
                api_key: "SG.test".into(),
            }),
            ..Default::default()
        };
        let relay = MailRelay::from_config(&config).unwrap();
        assert_eq!(relay.transport_name(), "sendgrid");
    }
}
