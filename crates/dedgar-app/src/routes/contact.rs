use std::sync::Arc;

use axum::{Form, extract::State};
use dedgar_mail::{ContactOutcome, send_contact};
use dedgar_types::ContactForm;

use crate::state::AppState;

/// Always answers "Form submitted"; delivery problems are only logged
pub async fn contact_handler(
    State(state): State<Arc<AppState>>,
    Form(form): Form<ContactForm>,
) -> &'static str {
    tracing::info!("Contact form from {} <{}>", form.name, form.email);

    let Some(mailer) = state.mailer.as_deref() else {
        tracing::warn!("Mail disabled, dropping message: {}", form.message);
        return "Form submitted";
    };

    match send_contact(mailer, &state.contact, &form).await {
        Ok(ContactOutcome::Sent { message_id }) => {
            tracing::info!("Email sent to {}: {message_id}", state.contact.recipient);
        }
        Ok(ContactOutcome::Filtered) => {}
        Err(e) => tracing::error!("Failed to send contact email: {e}"),
    }

    "Form submitted"
}
