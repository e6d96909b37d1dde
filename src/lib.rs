//! shelf-quote - Pricing and validation for modular shelving quotes.
//!
//! This library turns a configured shelving design (shape, side dimensions,
//! bays, materials) into a line-itemized estimate with weight-based shipping,
//! and can send the resulting quote by email.
//!
//! # Example
//!
//! ```no_run
//! use shelf_quote::{build_quote, render_summary, Catalog, Limits};
//! use std::path::Path;
//!
//! let catalog = Catalog::builtin();
//! let order = build_quote(Path::new("request.json"), &catalog, &Limits::default()).unwrap();
//! println!("{}", render_summary(&order));
//! ```

pub mod catalog;
pub mod config;
pub mod email;
pub mod error;
pub mod layout;
pub mod model;
pub mod order;
pub mod pricing;
pub mod request;
pub mod summary;
pub mod validation;

// Re-exports for convenience
pub use catalog::{Catalog, Material};
pub use config::{EmailConfig, Limits};
pub use email::{Customer, HttpMailTransport, MailTransport, QuoteEmail, QuoteSender, SendOutcome};
pub use error::{QuoteError, Result};
pub use layout::{layout_sides, preview, Preview};
pub use model::{Bay, BayId, Draft, MaterialChoice, Section, ShapeKind, Side};
pub use order::{Order, OrderItem};
pub use pricing::{price_bay, price_columns, price_order, shipping_cost, OrderTotals};
pub use request::{Design, QuoteRequest};
pub use summary::render_summary;
pub use validation::{collect_issues, validate, ValidationIssue, ValidationResult};

/// Build an order from a quote request file.
///
/// This is the main high-level function that performs the full pipeline:
/// 1. Load the request
/// 2. Validate every design
/// 3. Commit the designs into an order
///
/// Warnings are logged; the first broken rule stops the build.
pub fn build_quote(
    input_path: &std::path::Path,
    catalog: &Catalog,
    limits: &Limits,
) -> Result<Order> {
    let request = QuoteRequest::from_json_file(input_path)?;

    for (idx, result) in request.validate(catalog, limits).iter().enumerate() {
        for warning in &result.warnings {
            tracing::warn!("Design {}: {}", idx + 1, warning);
        }
        if let Some(issue) = result.first_error() {
            return Err(issue.clone().into());
        }
    }

    request.build_order(catalog, limits)
}
