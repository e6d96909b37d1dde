//! Committed order lines.

use crate::model::{Bay, GroupId, ItemId, MaterialChoice, ShapeKind};
use crate::pricing::CostBreakdown;
use serde::{Deserialize, Serialize};

/// What an order line is for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LineKind {
    /// The uprights shared by every bay of a group.
    Columns {
        /// Column material.
        material: MaterialChoice,
        /// Column length in mm.
        length: f64,
        /// Bays currently in the group.
        bay_count: u32,
    },
    /// One bay or corner and its shelves.
    Bay {
        /// Side the bay was placed on.
        side: usize,
        /// The bay as configured when committed.
        bay: Bay,
        /// Shelf material.
        material: MaterialChoice,
    },
}

/// An immutable line of the estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    /// Line identifier.
    pub id: ItemId,
    /// Group linking bays to their column line.
    pub group: GroupId,
    /// Shape the group was designed as.
    pub shape: ShapeKind,
    /// Number of units ordered.
    pub quantity: u32,
    /// Line contents.
    pub kind: LineKind,
    /// Price as computed when the line was committed or last repriced.
    pub cost: CostBreakdown,
}

impl OrderItem {
    /// Check if this is a column line.
    pub fn is_columns(&self) -> bool {
        matches!(self.kind, LineKind::Columns { .. })
    }

    /// Check if this is a bay line.
    pub fn is_bay(&self) -> bool {
        matches!(self.kind, LineKind::Bay { .. })
    }

    /// Get a one-line description for summaries.
    pub fn description(&self) -> String {
        match &self.kind {
            LineKind::Columns {
                material, length, ..
            } => format!(
                "{} columns {}mm ({}, {}T)",
                self.shape, length, material.material_id, material.thickness
            ),
            LineKind::Bay {
                side,
                bay,
                material,
            } => format!(
                "Side {} {} x{} shelves ({}, {}T)",
                side + 1,
                bay.label(),
                bay.shelf_count,
                material.material_id,
                material.thickness
            ),
        }
    }
}
