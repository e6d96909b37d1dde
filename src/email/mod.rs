//! Sending a quote by email through a transactional email provider.

mod transport;

pub use transport::{HttpMailTransport, MailTransport, TransportError};

use crate::config::EmailConfig;
use crate::error::{QuoteError, Result};
use crate::order::Order;
use crate::summary;
use serde::{Deserialize, Serialize};
use std::cell::Cell;

/// Default subject line.
pub const DEFAULT_SUBJECT: &str = "Shelving quote request";

/// Customer contact details entered with the quote.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub phone: String,
    pub email: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub memo: String,
}

/// Template fields sent to the provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteEmail {
    pub subject: String,
    pub message: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub memo: String,
    /// Itemized order lines followed by totals.
    pub order_lines: String,
}

impl QuoteEmail {
    /// Build the email for an order.
    pub fn for_order(customer: &Customer, order: &Order, message: impl Into<String>) -> Self {
        let mut order_lines = summary::order_lines(order);
        order_lines.push('\n');
        order_lines.push_str(&summary::totals_text(&order.totals()));

        Self {
            subject: format!("{} - {}", DEFAULT_SUBJECT, customer.name),
            message: message.into(),
            name: customer.name.clone(),
            phone: customer.phone.clone(),
            email: customer.email.clone(),
            address: customer.address.clone(),
            memo: customer.memo.clone(),
            order_lines,
        }
    }
}

/// Observable result of a send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// The provider accepted the email.
    Sent,
    /// The provider or network failed; the message is shown to the user.
    ProviderError(String),
}

impl SendOutcome {
    /// Check if the email was sent.
    pub fn is_sent(&self) -> bool {
        matches!(self, SendOutcome::Sent)
    }
}

/// Sends quotes one at a time and exposes whether a send is in progress.
#[derive(Debug)]
pub struct QuoteSender {
    config: EmailConfig,
    sending: Cell<bool>,
}

impl QuoteSender {
    /// Create a sender. Fails unless every credential is set.
    pub fn new(config: EmailConfig) -> Result<Self> {
        if !config.is_complete() {
            return Err(QuoteError::EmailNotConfigured);
        }
        Ok(Self {
            config,
            sending: Cell::new(false),
        })
    }

    /// Provider credentials.
    pub fn config(&self) -> &EmailConfig {
        &self.config
    }

    /// Check if a send is in progress.
    pub fn is_sending(&self) -> bool {
        self.sending.get()
    }

    /// Send the quote for an order once. Never retries and never changes the order.
    ///
    /// Returns an error only when the send could not be started.
    pub fn send(
        &self,
        transport: &dyn MailTransport,
        order: &Order,
        email: &QuoteEmail,
    ) -> Result<SendOutcome> {
        if self.sending.get() {
            return Err(QuoteError::AlreadySending);
        }
        if order.is_empty() {
            return Err(QuoteError::EmptyOrder);
        }

        self.sending.set(true);
        tracing::info!("Sending quote to {}", email.email);
        let result = transport.send(&self.config, email);
        self.sending.set(false);

        Ok(match result {
            Ok(()) => {
                tracing::info!("Quote sent");
                SendOutcome::Sent
            }
            Err(err) => {
                tracing::warn!("Quote email failed: {}", err);
                SendOutcome::ProviderError(err.to_string())
            }
        })
    }
}
