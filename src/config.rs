//! Configuration constants and limits for the quote calculator.
//!
//! All lengths are millimetres, all prices are whole currency units (KRW).

/// Floating-point comparison epsilon.
pub const EPS: f64 = 0.0001;

/// Minimum width of a regular (non-corner) bay.
pub const BAY_MIN_WIDTH: f64 = 400.0;

/// Maximum width of a regular (non-corner) bay.
pub const BAY_MAX_WIDTH: f64 = 800.0;

/// Shortest column the frame can be assembled with.
pub const COLUMN_MIN_LENGTH: f64 = 1000.0;

/// Longest column the frame can be assembled with.
pub const COLUMN_MAX_LENGTH: f64 = 3000.0;

/// Minimum width of a section (one side of the shape).
pub const SECTION_MIN_WIDTH: f64 = 400.0;

/// Width of a column as seen along a side.
pub const COLUMN_WIDTH: f64 = 40.0;

/// Thickness of a shelf support bracket, counted on both sides of a bay.
pub const SUPPORT_THICKNESS: f64 = 15.0;

/// Depth of a regular shelf (its length as a part).
pub const SHELF_DEPTH: f64 = 400.0;

/// Long edge of the corner shelf footprint.
pub const CORNER_LONG: f64 = 800.0;

/// Short edge of the corner shelf footprint.
pub const CORNER_SHORT: f64 = 600.0;

/// Shelves in a newly created bay or corner.
pub const DEFAULT_SHELF_COUNT: u32 = 3;

/// Column length at which the extra length surcharge applies.
pub const EXTRA_LENGTH_THRESHOLD: f64 = 2400.0;

/// Surcharge per column when the extra length threshold is reached.
pub const EXTRA_LENGTH_SURCHARGE: f64 = 30_000.0;

/// Shipping for a parcel up to 10 kg.
pub const SHIPPING_UP_TO_10KG: f64 = 4000.0;

/// Shipping for a parcel up to 20 kg.
pub const SHIPPING_UP_TO_20KG: f64 = 6000.0;

/// Shipping for a parcel up to 30 kg.
pub const SHIPPING_UP_TO_30KG: f64 = 8000.0;

/// Shipping for every started 10 kg above 30 kg.
pub const SHIPPING_PER_EXTRA_10KG: f64 = 3000.0;

/// VAT rate applied at order level. Prices are displayed tax-exclusive.
// TODO: confirm with the product owner whether VAT should be charged on quotes.
pub const VAT_RATE: f64 = 0.0;

/// Provider endpoint for outbound quote emails.
pub const EMAIL_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

use serde::{Deserialize, Serialize};

/// Dimensional limits used by validation and pricing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Limits {
    /// Minimum regular bay width.
    pub bay_min_width: f64,
    /// Maximum regular bay width.
    pub bay_max_width: f64,
    /// Minimum column length.
    pub column_min_length: f64,
    /// Maximum column length.
    pub column_max_length: f64,
    /// Minimum section width.
    pub section_min_width: f64,
    /// Column width along a side.
    pub column_width: f64,
    /// Support bracket thickness.
    pub support_thickness: f64,
    /// Regular shelf depth.
    pub shelf_depth: f64,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            bay_min_width: BAY_MIN_WIDTH,
            bay_max_width: BAY_MAX_WIDTH,
            column_min_length: COLUMN_MIN_LENGTH,
            column_max_length: COLUMN_MAX_LENGTH,
            section_min_width: SECTION_MIN_WIDTH,
            column_width: COLUMN_WIDTH,
            support_thickness: SUPPORT_THICKNESS,
            shelf_depth: SHELF_DEPTH,
        }
    }
}

impl Limits {
    /// Check if a regular bay width is allowed.
    pub fn bay_width_in_range(&self, width: f64) -> bool {
        float_cmp::in_range(width, self.bay_min_width, self.bay_max_width)
    }

    /// Check if a column length (or section height) is allowed.
    pub fn column_length_in_range(&self, length: f64) -> bool {
        float_cmp::in_range(length, self.column_min_length, self.column_max_length)
    }
}

/// Email provider credentials. All three must be set before a quote can be sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmailConfig {
    /// Provider service id.
    pub service_id: String,
    /// Provider template id.
    pub template_id: String,
    /// Provider public key.
    pub public_key: String,
}

impl EmailConfig {
    /// Create a new email configuration.
    pub fn new(
        service_id: impl Into<String>,
        template_id: impl Into<String>,
        public_key: impl Into<String>,
    ) -> Self {
        Self {
            service_id: service_id.into(),
            template_id: template_id.into(),
            public_key: public_key.into(),
        }
    }

    /// Check that every credential is present.
    pub fn is_complete(&self) -> bool {
        !self.service_id.trim().is_empty()
            && !self.template_id.trim().is_empty()
            && !self.public_key.trim().is_empty()
    }
}

/// Utility functions for floating-point comparisons.
pub mod float_cmp {
    use super::EPS;

    /// Check if two floats are approximately equal.
    #[inline]
    pub fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    /// Check if a float is approximately zero.
    #[inline]
    pub fn approx_zero(a: f64) -> bool {
        a.abs() < EPS
    }

    /// Check if a is in range [min, max] with epsilon tolerance.
    #[inline]
    pub fn in_range(a: f64, min: f64, max: f64) -> bool {
        a >= min - EPS && a <= max + EPS
    }
}
