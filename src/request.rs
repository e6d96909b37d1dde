//! Quote request document: the designs to price and who is asking.

use crate::catalog::Catalog;
use crate::config::Limits;
use crate::email::Customer;
use crate::error::{QuoteError, Result};
use crate::model::Draft;
use crate::order::Order;
use crate::validation::{self, ValidationResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

fn one() -> u32 {
    1
}

/// One design and how many of it are ordered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Design {
    /// The configured draft.
    pub draft: Draft,
    /// Number of identical frames.
    #[serde(default = "one")]
    pub quantity: u32,
}

/// A full quote request as read from disk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuoteRequest {
    /// Designs in the order they are committed.
    pub designs: Vec<Design>,
    /// Contact details, needed only for sending.
    #[serde(default)]
    pub customer: Option<Customer>,
    /// Free-text message for the email.
    #[serde(default)]
    pub message: String,
}

impl QuoteRequest {
    /// Load a request from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(QuoteError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Parse a request from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let mut request: QuoteRequest = serde_json::from_str(text)?;
        for design in &mut request.designs {
            design.draft = std::mem::take(&mut design.draft).with_assigned_ids();
        }
        Ok(request)
    }

    /// Validate every design, one result per design.
    pub fn validate(&self, catalog: &Catalog, limits: &Limits) -> Vec<ValidationResult> {
        self.designs
            .iter()
            .map(|d| validation::collect_issues(&d.draft, catalog, limits))
            .collect()
    }

    /// Commit every design into a new order.
    pub fn build_order(&self, catalog: &Catalog, limits: &Limits) -> Result<Order> {
        let mut order = Order::new();
        for design in &self.designs {
            order.commit(&design.draft, catalog, limits, design.quantity)?;
        }
        Ok(order)
    }
}
