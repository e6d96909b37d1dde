//! Outbound delivery of quote emails.

use super::QuoteEmail;
use crate::config::{EmailConfig, EMAIL_ENDPOINT};
use crate::error::Result;
use reqwest::blocking::Client;
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;

/// Why the provider did not accept an email.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The provider answered with an error; `message` is its response text.
    #[error("{message}")]
    Provider { status: u16, message: String },

    /// The request did not reach the provider.
    #[error("Could not reach the email service: {0}")]
    Network(String),
}

/// Performs the single outbound call for a quote email.
pub trait MailTransport {
    /// Deliver one email.
    fn send(&self, config: &EmailConfig, email: &QuoteEmail)
        -> std::result::Result<(), TransportError>;
}

/// Request body expected by the provider's REST endpoint.
#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a QuoteEmail,
}

/// Sends emails with an HTTP POST to the provider.
#[derive(Debug, Clone)]
pub struct HttpMailTransport {
    client: Client,
    endpoint: String,
}

impl HttpMailTransport {
    /// Create a transport for the default provider endpoint.
    pub fn new() -> Result<Self> {
        Self::with_endpoint(EMAIL_ENDPOINT)
    }

    /// Create a transport for a specific endpoint.
    ///
    /// The request has no timeout: a send either resolves or fails.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Result<Self> {
        let client = Client::builder().timeout(None::<Duration>).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

impl MailTransport for HttpMailTransport {
    fn send(
        &self,
        config: &EmailConfig,
        email: &QuoteEmail,
    ) -> std::result::Result<(), TransportError> {
        let body = SendRequest {
            service_id: &config.service_id,
            template_id: &config.template_id,
            user_id: &config.public_key,
            template_params: email,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let text = response.text().unwrap_or_default();
        let message = if text.trim().is_empty() {
            format!("Failed to send the quote ({})", status)
        } else {
            text.trim().to_string()
        };
        Err(TransportError::Provider {
            status: status.as_u16(),
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let config = EmailConfig::new("svc", "tpl", "key");
        let email = QuoteEmail {
            subject: "Quote".into(),
            name: "Kim".into(),
            ..Default::default()
        };
        let body = SendRequest {
            service_id: &config.service_id,
            template_id: &config.template_id,
            user_id: &config.public_key,
            template_params: &email,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["service_id"], "svc");
        assert_eq!(json["user_id"], "key");
        assert_eq!(json["template_params"]["subject"], "Quote");
        assert_eq!(json["template_params"]["name"], "Kim");
    }

    #[test]
    fn test_provider_error_displays_message() {
        let err = TransportError::Provider {
            status: 400,
            message: "Invalid template".into(),
        };
        assert_eq!(err.to_string(), "Invalid template");
    }
}
