//! Mail relay configuration from environment variables.

/// Default sender address when `SENDGRID_FROM_EMAIL` is not set.
pub const DEFAULT_FROM_ADDRESS: &str = "noreply@condominiofacil.com.br";

/// Display name used on every outgoing message.
pub const DEFAULT_FROM_NAME: &str = "Condomínio Fácil";

/// Inbox that receives demo requests when `CONTACT_INBOX` is not set.
pub const DEFAULT_CONTACT_INBOX: &str = "desenvolvimento@msconsultoriati.com";

/// Default SMTP port (STARTTLS).
pub const DEFAULT_SMTP_PORT: u16 = 587;

/// SMTP relay settings.
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub user: Option<String>,
    pub password: Option<String>,
}

/// Which provider delivers outgoing mail.
#[derive(Debug, Clone)]
pub enum TransportConfig {
    SendGrid { api_key: String },
    Smtp(SmtpConfig),
}

/// Configuration for the mail relay.
#[derive(Debug, Clone)]
pub struct MailConfig {
    /// RFC 5322 "From" address.
    pub from_address: String,
    /// "From" display name.
    pub from_name: String,
    /// Recipient of contact-form submissions.
    pub contact_inbox: String,
    /// `None` when no provider is configured; sends then fail with
    /// [`MailError::NotConfigured`](crate::MailError::NotConfigured).
    pub transport: Option<TransportConfig>,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            from_address: DEFAULT_FROM_ADDRESS.to_string(),
            from_name: DEFAULT_FROM_NAME.to_string(),
            contact_inbox: DEFAULT_CONTACT_INBOX.to_string(),
            transport: None,
        }
    }
}

impl MailConfig {
    /// Load configuration from environment variables.
    ///
    /// SendGrid wins when its key is present; SMTP is used when only
    /// `SMTP_HOST` is set.
    ///
    /// | Variable              | Default                                |
    /// |-----------------------|----------------------------------------|
    /// | `SENDGRID_API_KEY`    | (unset)                                |
    /// | `SENDGRID_FROM_EMAIL` | `noreply@condominiofacil.com.br`       |
    /// | `CONTACT_INBOX`       | `desenvolvimento@msconsultoriati.com`  |
    /// | `SMTP_HOST`           | (unset)                                |
    /// | `SMTP_PORT`           | `587`                                  |
    /// | `SMTP_USER`           | (unset)                                |
    /// | `SMTP_PASSWORD`       | (unset)                                |
    pub fn from_env() -> Self {
        let var = |name: &str| {
            std::env::var(name)
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let transport = if let Some(api_key) = var("SENDGRID_API_KEY") {
            Some(TransportConfig::SendGrid { api_key })
        } else {
            var("SMTP_HOST").map(|host| {
                TransportConfig::Smtp(SmtpConfig {
                    host,
                    port: var("SMTP_PORT")
                        .and_then(|p| p.parse().ok())
                        .unwrap_or(DEFAULT_SMTP_PORT),
                    user: var("SMTP_USER"),
                    password: var("SMTP_PASSWORD"),
                })
            })
        };

        Self {
            from_address: var("SENDGRID_FROM_EMAIL")
                .unwrap_or_else(|| DEFAULT_FROM_ADDRESS.to_string()),
            from_name: DEFAULT_FROM_NAME.to_string(),
            contact_inbox: var("CONTACT_INBOX")
                .unwrap_or_else(|| DEFAULT_CONTACT_INBOX.to_string()),
            transport,
        }
    }

    /// Provider name for logs and health output.
    pub fn transport_name(&self) -> &'static str {
        match self.transport {
            Some(TransportConfig::SendGrid { .. }) => "sendgrid",
            Some(TransportConfig::Smtp(_)) => "smtp",
            None => "none",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_no_transport() {
        let config = MailConfig::default();
        assert!(config.transport.is_none());
        assert_eq!(config.transport_name(), "none");
        assert_eq!(config.contact_inbox, DEFAULT_CONTACT_INBOX);
    }

    #[test]
    fn transport_names() {
        let mut config = MailConfig::default();
        config.transport = Some(TransportConfig::SendGrid {
            api_key: "SG.x".into(),
        });
        assert_eq!(config.transport_name(), "sendgrid");
        config.transport = Some(TransportConfig::Smtp(SmtpConfig {
            host: "smtp.example.com".into(),
            port: DEFAULT_SMTP_PORT,
            user: None,
            password: None,
        }));
        assert_eq!(config.transport_name(), "smtp");
    }
}
