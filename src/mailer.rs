// src/mailer.rs

use base64::Engine;
use reqwest::blocking::Client;
use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

pub const DEFAULT_API_URL: &str = "https://api.brevo.com";

#[derive(Debug, Error)]
pub enum MailerError {
    #[error("request failed: {0}")]
    RequestFailed(String),
    #[error("API error ({status}): {body}")]
    Api { status: u16, body: String },
}

/// Sends HTML reports through Brevo's transactional email API.
#[derive(Debug, Clone)]
pub struct BrevoMailer {
    api_url: String,
    api_key: String,
    sender_email: String,
    sender_name: String,
    configuration_set: Option<String>,
    client: Client,
}

/// A file carried along with the message.
#[derive(Debug, Clone)]
pub struct Attachment {
    pub name: String,
    pub content: Vec<u8>,
}

#[derive(Serialize)]
struct BrevoSender<'a> {
    name: &'a str,
    email: &'a str,
}

#[derive(Serialize)]
struct BrevoRecipient<'a> {
    email: &'a str,
}

#[derive(Serialize)]
struct BrevoAttachment {
    name: String,
    content: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BrevoPayload<'a> {
    sender: BrevoSender<'a>,
    to: Vec<BrevoRecipient<'a>>,
    subject: &'a str,
    html_content: &'a str,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    headers: BTreeMap<&'static str, &'a str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    attachment: Vec<BrevoAttachment>,
}

impl BrevoMailer {
    pub fn new(api_key: String, sender_email: String, sender_name: String) -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_key,
            sender_email,
            sender_name,
            configuration_set: None,
            client: Client::new(),
        }
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Tags outgoing mail with a delivery configuration set.
    pub fn with_configuration_set(mut self, configuration_set: Option<String>) -> Self {
        self.configuration_set = configuration_set;
        self
    }

    fn endpoint(&self) -> String {
        format!("{}/v3/smtp/email", self.api_url.trim_end_matches('/'))
    }

    fn payload<'a>(
        &'a self,
        recipients: &'a [String],
        subject: &'a str,
        html_content: &'a str,
        attachments: &[Attachment],
    ) -> BrevoPayload<'a> {
        let mut headers = BTreeMap::new();
        if let Some(set) = self.configuration_set.as_deref() {
            headers.insert("X-SES-CONFIGURATION-SET", set);
        }

        BrevoPayload {
            sender: BrevoSender {
                name: &self.sender_name,
                email: &self.sender_email,
            },
            to: recipients
                .iter()
                .map(|email| BrevoRecipient {
                    email: email.as_str(),
                })
                .collect(),
            subject,
            html_content,
            headers,
            attachment: attachments
                .iter()
                .map(|a| BrevoAttachment {
                    name: a.name.clone(),
                    content: base64::engine::general_purpose::STANDARD.encode(&a.content),
                })
                .collect(),
        }
    }

    pub fn send_report(
        &self,
        recipients: &[String],
        subject: &str,
        html_content: &str,
        attachments: &[Attachment],
    ) -> Result<(), MailerError> {
        tracing::warn!("Sending email to {:?}", recipients);

        let payload = self.payload(recipients, subject, html_content, attachments);

        let resp = self
            .client
            .post(self.endpoint())
            .header("api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&payload)
            .send()
            .map_err(|e| MailerError::RequestFailed(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_else(|_| "(no body)".to_string());
            tracing::error!("Email API rejected the report: {} - {}", status, body);
            return Err(MailerError::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}
