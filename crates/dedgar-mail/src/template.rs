use dedgar_types::ContactForm;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactTemplate {
    pub sender: String,
    pub recipient: String,
    pub subject: String,
    /// Messages may only link to this host
    pub allowed_link_host: String,
}

impl Default for ContactTemplate {
    fn default() -> Self {
        Self {
            sender: "contact@shinobu.ninja".to_string(),
            recipient: "contact@shinobu.ninja".to_string(),
            subject: "dedgar contact form submission".to_string(),
            allowed_link_host: "dedgar.com/".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutgoingMail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub text: String,
}

impl ContactTemplate {
    pub fn new(sender: String, recipient: String, subject: String, allowed_link_host: String) -> Self {
        Self {
            sender,
            recipient,
            subject,
            allowed_link_host,
        }
    }

    /// A message with a link anywhere but our own host
    pub fn is_spam(&self, message: &str) -> bool {
        message.contains("http") && !message.contains(&self.allowed_link_host)
    }

    /// Plain text body: name, email and message on separate lines
    pub fn render(&self, form: &ContactForm) -> OutgoingMail {
        OutgoingMail {
            from: self.sender.clone(),
            to: self.recipient.clone(),
            subject: self.subject.clone(),
            text: format!("{}\n{}\n{}", form.name, form.email, form.message),
        }
    }
}
