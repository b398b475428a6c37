//! Payloads accepted by the mail relay and their validation.
//!
//! Field names follow the public form contract (`nome`, `condominio`, ...)
//! so existing front-ends can post to the relay unchanged.

use serde::Deserialize;
use validator::Validate;

use crate::error::CoreError;

/// Message returned when the contact form lacks a name or email.
pub const CONTACT_REQUIRED_MESSAGE: &str = "Nome e email são obrigatórios";

/// Message returned when a direct message lacks any field.
pub const DIRECT_REQUIRED_MESSAGE: &str = "Campos obrigatórios ausentes";

/// Demo request submitted from the marketing site.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ContactForm {
    #[serde(default)]
    #[validate(length(max = 200))]
    pub nome: String,
    #[serde(default)]
    #[validate(email)]
    pub email: String,
    #[serde(default)]
    #[validate(length(max = 200))]
    pub condominio: Option<String>,
    #[serde(default)]
    #[validate(length(max = 50))]
    pub telefone: Option<String>,
}

impl ContactForm {
    /// Require a name and a well-formed email; bound the optional fields.
    ///
    /// Fields are checked as they will be sent, i.e. trimmed.
    pub fn check(&self) -> Result<(), CoreError> {
        let trimmed = Self {
            nome: self.nome.trim().to_string(),
            email: self.email.trim().to_string(),
            condominio: self.condominio.as_deref().map(|v| v.trim().to_string()),
            telefone: self.telefone.as_deref().map(|v| v.trim().to_string()),
        };
        if trimmed.nome.is_empty() || trimmed.email.is_empty() {
            return Err(CoreError::Validation(CONTACT_REQUIRED_MESSAGE.to_string()));
        }
        trimmed.validate()?;
        Ok(())
    }
}

/// Pre-rendered message to forward as-is.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct DirectMessage {
    #[serde(default)]
    #[validate(email)]
    pub to: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub html: String,
}

impl DirectMessage {
    pub fn check(&self) -> Result<(), CoreError> {
        if [&self.to, &self.subject, &self.html]
            .iter()
            .any(|field| field.trim().is_empty())
        {
            return Err(CoreError::Validation(DIRECT_REQUIRED_MESSAGE.to_string()));
        }
        let trimmed = Self {
            to: self.to.trim().to_string(),
            ..self.clone()
        };
        trimmed.validate()?;
        Ok(())
    }
}
