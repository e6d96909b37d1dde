//! Part specification for one manufacturable unit kind.

use serde::{Deserialize, Serialize};

/// What a part is used as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartKind {
    #[default]
    Shelf,
    Column,
}

/// Identical parts cut from one material.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartSpec {
    /// Shelf or column.
    pub kind: PartKind,
    /// Catalog material id.
    pub material_id: String,
    /// Thickness in mm.
    pub thickness: u32,
    /// Width in mm.
    pub width: f64,
    /// Length in mm.
    pub length: f64,
    /// Number of identical parts.
    pub count: u32,
}

impl PartSpec {
    /// Create a new part specification.
    pub fn new(
        kind: PartKind,
        material_id: impl Into<String>,
        thickness: u32,
        width: f64,
        length: f64,
        count: u32,
    ) -> Self {
        Self {
            kind,
            material_id: material_id.into(),
            thickness,
            width,
            length,
            count,
        }
    }

    /// Face area of one part in m².
    pub fn area_m2(&self) -> f64 {
        self.width / 1000.0 * (self.length / 1000.0)
    }

    /// Total volume of all parts in m³.
    pub fn volume_m3(&self) -> f64 {
        self.area_m2() * (self.thickness as f64 / 1000.0) * self.count as f64
    }

    /// Get display dimensions (thickness x width x length).
    pub fn dimensions_string(&self) -> String {
        format!("{}T x {} x {}", self.thickness, self.width, self.length)
    }
}
