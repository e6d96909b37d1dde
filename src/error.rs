//! Error types for quote building.

use std::path::PathBuf;
use thiserror::Error;

use crate::model::{BayId, ItemId};
use crate::validation::ValidationIssue;

/// Error codes for quote processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// File not found (-1)
    FileNotFound = -1,
    /// Malformed input document (-3)
    ParseError = -3,
    /// Draft failed validation (E100)
    InvalidDraft = 100,
    /// Catalog or order lookup failed (E200)
    NotFound = 200,
    /// Bay does not fit on its side (E201)
    NoRoom = 201,
    /// Email could not be sent (E300)
    EmailFailed = 300,
}

/// Main error type for the quote calculator.
#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Invalid(#[from] ValidationIssue),

    #[error("Unknown material: {id}")]
    UnknownMaterial { id: String },

    #[error("Unknown add-on: {id}")]
    UnknownAddOn { id: String },

    #[error("Unknown detail processing: {id}")]
    UnknownProcessing { id: String },

    #[error("Side {side} does not exist for this shape")]
    SideNotFound { side: usize },

    #[error("Bay {id} not found")]
    BayNotFound { id: BayId },

    #[error("Order item {id} not found")]
    ItemNotFound { id: ItemId },

    #[error("Side {side} has no room for a {width}mm bay ({remaining}mm left)")]
    NoRoom {
        side: usize,
        width: f64,
        remaining: f64,
    },

    #[error("Email is not configured: service id, template id and public key are required")]
    EmailNotConfigured,

    #[error("The order is empty")]
    EmptyOrder,

    #[error("A quote is already being sent")]
    AlreadySending,

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl QuoteError {
    /// Get the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            QuoteError::FileNotFound { .. } => ErrorCode::FileNotFound,
            QuoteError::Json(_) => ErrorCode::ParseError,
            QuoteError::Invalid(_) => ErrorCode::InvalidDraft,
            QuoteError::UnknownMaterial { .. } => ErrorCode::NotFound,
            QuoteError::UnknownAddOn { .. } => ErrorCode::NotFound,
            QuoteError::UnknownProcessing { .. } => ErrorCode::NotFound,
            QuoteError::SideNotFound { .. } => ErrorCode::NotFound,
            QuoteError::BayNotFound { .. } => ErrorCode::NotFound,
            QuoteError::ItemNotFound { .. } => ErrorCode::NotFound,
            QuoteError::NoRoom { .. } => ErrorCode::NoRoom,
            QuoteError::EmailNotConfigured => ErrorCode::EmailFailed,
            QuoteError::EmptyOrder => ErrorCode::EmailFailed,
            QuoteError::AlreadySending => ErrorCode::EmailFailed,
            QuoteError::Http(_) => ErrorCode::EmailFailed,
            QuoteError::Io(_) => ErrorCode::FileNotFound,
        }
    }

    /// Get the numeric error code value.
    pub fn code_value(&self) -> i32 {
        self.code() as i32
    }
}

/// Result type alias for quote operations.
pub type Result<T> = std::result::Result<T, QuoteError>;
