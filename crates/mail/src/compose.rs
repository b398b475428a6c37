//! Pure composition of outgoing messages from relay payloads.

use serde::Serialize;

use condofacil_core::contact::{ContactForm, DirectMessage};

/// Shown in place of optional contact fields left blank.
pub const NOT_PROVIDED: &str = "Não informado";

/// An address with an optional display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mailbox {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Mailbox {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: None,
        }
    }

    pub fn named(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: Some(name.into()),
        }
    }
}

/// A fully composed HTML message, independent of the delivering provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    pub from: Mailbox,
    pub to: Mailbox,
    pub reply_to: Option<Mailbox>,
    pub subject: String,
    pub html: String,
}

/// Compose the notification sent to the sales inbox for a demo request.
///
/// Replies go to the person who filled in the form.
pub fn compose_contact_email(form: &ContactForm, from: &Mailbox, inbox: &str) -> OutboundEmail {
    let nome = form.nome.trim();
    let email = form.email.trim();
    let condominio = non_blank(form.condominio.as_deref());
    let telefone = non_blank(form.telefone.as_deref());

    OutboundEmail {
        from: from.clone(),
        to: Mailbox::new(inbox),
        reply_to: Some(Mailbox::named(email, nome)),
        subject: format!(
            "🏢 Nova Demonstração: {nome} - {}",
            condominio.unwrap_or("Condomínio")
        ),
        html: render_contact_html(
            nome,
            email,
            condominio.unwrap_or(NOT_PROVIDED),
            telefone.unwrap_or(NOT_PROVIDED),
        ),
    }
}

/// Compose a pre-rendered message; recipient, subject and body pass through.
pub fn compose_direct_email(message: &DirectMessage, from: &Mailbox) -> OutboundEmail {
    OutboundEmail {
        from: from.clone(),
        to: Mailbox::new(message.to.trim()),
        reply_to: None,
        subject: message.subject.clone(),
        html: message.html.clone(),
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Escape text for interpolation into HTML.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn render_contact_html(nome: &str, email: &str, condominio: &str, telefone: &str) -> String {
    let nome = html_escape(nome);
    let email = html_escape(email);
    let condominio = html_escape(condominio);
    let telefone = html_escape(telefone);

    let row = |label: &str, value: &str| {
        format!(
            r#"<tr>
  <td style="padding: 14px 12px; border-bottom: 1px solid #e2e8f0; font-weight: 600; color: #475569; width: 140px;">{label}</td>
  <td style="padding: 14px 12px; border-bottom: 1px solid #e2e8f0; color: #1e293b; font-size: 15px;">{value}</td>
</tr>"#
        )
    };

    let rows = [
        row("👤 Nome:", &nome),
        row(
            "📧 Email:",
            &format!(r#"<a href="mailto:{email}" style="color: #3b82f6; text-decoration: none;">{email}</a>"#),
        ),
        row("🏢 Condomínio:", &condominio),
        row("📱 Telefone:", &telefone),
    ]
    .join("\n");

    format!(
        r#"<div style="font-family: 'Segoe UI', Arial, sans-serif; max-width: 600px; margin: 0 auto; background: #f8fafc;">
<div style="background: linear-gradient(135deg, #1e3a8a 0%, #3b82f6 100%); padding: 40px 30px; text-align: center; border-radius: 12px 12px 0 0;">
  <h1 style="color: white; margin: 0; font-size: 28px; font-weight: 700;">🏢 Condomínio Fácil</h1>
  <p style="color: #bfdbfe; margin-top: 8px; font-size: 14px;">Nova Solicitação de Demonstração</p>
</div>
<div style="padding: 30px; background: white;">
  <h2 style="color: #1e3a8a; margin-top: 0; font-size: 20px; border-bottom: 2px solid #e2e8f0; padding-bottom: 12px;">📋 Dados do Contato</h2>
  <table style="width: 100%; border-collapse: collapse; margin-top: 20px;">
{rows}
  </table>
</div>
<div style="padding: 20px; background: #1e3a8a; text-align: center; border-radius: 0 0 12px 12px;">
  <p style="color: #bfdbfe; margin: 0; font-size: 12px;">Este email foi enviado automaticamente pelo site Condomínio Fácil</p>
</div>
</div>"#
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
