use async_trait::async_trait;
use serde::Serialize;

use crate::template::OutgoingMail;
use crate::{MailError, Mailer};

/// Mail API client posting JSON messages with a bearer key
#[derive(Clone)]
pub struct HttpMailer {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
}

#[derive(Serialize)]
struct SendRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    text: &'a str,
    charset: &'static str,
}

impl HttpMailer {
    pub fn new(api_url: String, api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
            api_key,
        }
    }
}

#[async_trait]
impl Mailer for HttpMailer {
    async fn send(&self, mail: &OutgoingMail) -> Result<String, MailError> {
        if self.api_key.is_empty() {
            return Err(MailError::Authentication);
        }

        let request = SendRequest {
            from: &mail.from,
            to: [&mail.to],
            subject: &mail.subject,
            text: &mail.text,
            charset: "UTF-8",
        };

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if status == 429 {
            return Err(MailError::RateLimited);
        }

        if status == 401 || status == 403 {
            return Err(MailError::Authentication);
        }

        if !status.is_success() {
            return Err(MailError::Api(format!("HTTP {status}")));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| MailError::Api(format!("Failed to parse response: {e}")))?;

        let id = json["id"]
            .as_str()
            .or_else(|| json["message_id"].as_str())
            .ok_or_else(|| MailError::Api("No message id in response".to_string()))?;

        Ok(id.to_string())
    }
}
