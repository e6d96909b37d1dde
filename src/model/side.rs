//! Sides of a shape and the section dimensions entered for them.

use super::Bay;
use serde::{Deserialize, Serialize};

/// User-entered dimensions of one side of the shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Wall width available to the side, in mm.
    pub width: f64,
    /// Lowest floor-to-ceiling height measured along the side.
    pub min_height: f64,
    /// Highest floor-to-ceiling height measured along the side.
    pub max_height: f64,
    /// Additional height measurements (beams, sloped ceilings).
    #[serde(default)]
    pub extra_heights: Vec<f64>,
}

impl Section {
    /// Create a new section.
    pub fn new(width: f64, min_height: f64, max_height: f64) -> Self {
        Self {
            width,
            min_height,
            max_height,
            extra_heights: Vec::new(),
        }
    }

    /// Column length this section needs: the tallest measured height.
    pub fn column_length(&self) -> f64 {
        self.extra_heights
            .iter()
            .copied()
            .fold(self.max_height, f64::max)
    }
}

/// One linear run of bays, optionally starting with a corner.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Side {
    /// Corner bay at the start of the side.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corner: Option<Bay>,
    /// Regular bays in placement order.
    #[serde(default)]
    pub bays: Vec<Bay>,
}

impl Side {
    /// Every bay on the side, corner first.
    pub fn items(&self) -> impl Iterator<Item = &Bay> {
        self.corner.iter().chain(self.bays.iter())
    }

    /// Number of bays including the corner.
    pub fn item_count(&self) -> usize {
        self.bays.len() + usize::from(self.corner.is_some())
    }

    /// Check if the side holds nothing.
    pub fn is_empty(&self) -> bool {
        self.item_count() == 0
    }
}
