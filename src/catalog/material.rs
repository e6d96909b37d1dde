//! Material - Board stock a shelf or column is cut from.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Which part of the frame a material is sold for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Shelf,
    Column,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Shelf => write!(f, "shelf"),
            Category::Column => write!(f, "column"),
        }
    }
}

/// A catalog material.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Catalog identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Part category this material is sold for.
    pub category: Category,
    /// Flat price per square metre.
    pub price_per_m2: f64,
    /// Price per square metre keyed by thickness in mm, when the price depends on it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_per_m2_by_thickness: Option<BTreeMap<u32, f64>>,
    /// Thicknesses in mm this material is stocked in, in catalog order.
    pub available_thicknesses: Vec<u32>,
    /// Density in kg/m³.
    pub density: f64,
    /// Largest width that can be priced from the catalog.
    pub max_width: f64,
    /// Largest length that can be priced from the catalog.
    pub max_length: f64,
}

impl Material {
    /// Price per square metre for the given thickness.
    ///
    /// Uses the thickness table when there is one. A thickness missing from the
    /// table falls back to the first stocked thickness that is priced, and
    /// then to the flat price.
    pub fn unit_price(&self, thickness: u32) -> f64 {
        let Some(table) = &self.price_per_m2_by_thickness else {
            return self.price_per_m2;
        };

        if let Some(price) = table.get(&thickness) {
            return *price;
        }

        self.available_thicknesses
            .iter()
            .find_map(|t| table.get(t).copied())
            .unwrap_or(self.price_per_m2)
    }

    /// Check if this material is stocked in the given thickness.
    pub fn supports_thickness(&self, thickness: u32) -> bool {
        self.available_thicknesses.contains(&thickness)
    }

    /// Check if a part of this size is beyond catalog bounds.
    pub fn is_oversized(&self, width: f64, length: f64) -> bool {
        width > self.max_width + crate::config::EPS || length > self.max_length + crate::config::EPS
    }
}
