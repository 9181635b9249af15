mod client;
mod template;

pub use client::HttpMailer;
pub use template::{ContactTemplate, OutgoingMail};

use dedgar_types::ContactForm;

/// Outbound mail provider
#[async_trait::async_trait]
pub trait Mailer: Send + Sync {
    /// Deliver one message, returning the provider's message id
    async fn send(&self, mail: &OutgoingMail) -> Result<String, MailError>;
}

#[derive(Debug, thiserror::Error)]
pub enum MailError {
    #[error("API error: {0}")]
    Api(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Rate limit exceeded")]
    RateLimited,

    #[error("Authentication error")]
    Authentication,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactOutcome {
    Sent { message_id: String },
    /// Dropped by the link filter; nothing was sent
    Filtered,
}

/// Send a contact form submission using the provided mailer and template
pub async fn send_contact(
    mailer: &dyn Mailer,
    template: &ContactTemplate,
    form: &ContactForm,
) -> Result<ContactOutcome, MailError> {
    if template.is_spam(&form.message) {
        tracing::info!("Dropping contact message from {} with foreign link", form.email);
        return Ok(ContactOutcome::Filtered);
    }

    let mail = template.render(form);
    let message_id = mailer.send(&mail).await?;
    tracing::info!("Email sent to {}: {message_id}", mail.to);

    Ok(ContactOutcome::Sent { message_id })
}
