//! Draft validation.

mod issue;
mod validate;

pub use issue::{Field, ValidationIssue};
pub use validate::{collect_issues, validate, ValidationResult};
