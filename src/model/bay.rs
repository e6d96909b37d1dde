//! Bay - One shelf-width slot along a side.

use super::BayId;
use crate::config::{Limits, CORNER_LONG, CORNER_SHORT};
use serde::{Deserialize, Serialize};

/// How a corner footprint is turned relative to its side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CornerOrientation {
    /// Long edge runs along the side.
    #[default]
    Standard,
    /// Short edge runs along the side.
    Swapped,
}

impl CornerOrientation {
    /// Flip between standard and swapped.
    pub fn toggled(self) -> Self {
        match self {
            CornerOrientation::Standard => CornerOrientation::Swapped,
            CornerOrientation::Swapped => CornerOrientation::Standard,
        }
    }
}

/// A detail processing option chosen for a bay.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessingChoice {
    /// Catalog processing id.
    pub id: String,
    /// Hole count, for per-hole options.
    #[serde(default)]
    pub holes: u32,
}

/// A bay or, when `corner` is set, the corner bay at the start of a side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Bay {
    /// Generated identifier.
    #[serde(default)]
    pub id: BayId,
    /// Shelf width in mm. Ignored for corners, which have a fixed footprint.
    #[serde(default)]
    pub width: f64,
    /// Number of shelves in the bay.
    pub shelf_count: u32,
    /// Chosen add-on ids.
    #[serde(default)]
    pub add_ons: Vec<String>,
    /// Chosen detail processing.
    #[serde(default)]
    pub processing: Vec<ProcessingChoice>,
    /// Corner orientation; `None` for a regular bay.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corner: Option<CornerOrientation>,
}

impl Bay {
    /// Create a regular bay.
    pub fn new(id: BayId, width: f64, shelf_count: u32) -> Self {
        Self {
            id,
            width,
            shelf_count,
            ..Default::default()
        }
    }

    /// Create a corner bay.
    pub fn corner(id: BayId, orientation: CornerOrientation, shelf_count: u32) -> Self {
        Self {
            id,
            shelf_count,
            corner: Some(orientation),
            ..Default::default()
        }
    }

    /// Check if this bay is a corner.
    pub fn is_corner(&self) -> bool {
        self.corner.is_some()
    }

    /// Width this bay occupies along its side, excluding supports and columns.
    pub fn along_side_width(&self) -> f64 {
        match self.corner {
            Some(CornerOrientation::Standard) => CORNER_LONG,
            Some(CornerOrientation::Swapped) => CORNER_SHORT,
            None => self.width,
        }
    }

    /// Depth of the bay footprint, perpendicular to its side.
    pub fn depth(&self, limits: &Limits) -> f64 {
        match self.corner {
            Some(CornerOrientation::Standard) => CORNER_SHORT,
            Some(CornerOrientation::Swapped) => CORNER_LONG,
            None => limits.shelf_depth,
        }
    }

    /// Width and length of one shelf panel.
    ///
    /// A corner shelf is the same panel whichever way it is turned.
    pub fn shelf_dimensions(&self, limits: &Limits) -> (f64, f64) {
        if self.is_corner() {
            (CORNER_LONG, CORNER_SHORT)
        } else {
            (self.width, limits.shelf_depth)
        }
    }

    /// Get a short label for summaries.
    pub fn label(&self) -> String {
        match self.corner {
            Some(CornerOrientation::Standard) => {
                format!("Corner {}x{}", CORNER_LONG, CORNER_SHORT)
            }
            Some(CornerOrientation::Swapped) => {
                format!("Corner {}x{} (swapped)", CORNER_LONG, CORNER_SHORT)
            }
            None => format!("Bay {}mm", self.width),
        }
    }
}
