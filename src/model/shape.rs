//! Shape - Floor-plan layout of the shelving frame.

use serde::{Deserialize, Serialize};

/// Floor-plan layout. Each shape has a fixed number of sides and a fixed set
/// of sides that start with a corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    /// One straight run against a wall.
    #[default]
    Straight,
    /// Two runs joined by one corner.
    LShape,
    /// Three runs joined by two corners.
    UShape,
    /// Four runs closing a rectangle, a corner at the start of every side.
    Box,
}

impl ShapeKind {
    /// All shapes, in menu order.
    pub const ALL: [ShapeKind; 4] = [
        ShapeKind::Straight,
        ShapeKind::LShape,
        ShapeKind::UShape,
        ShapeKind::Box,
    ];

    /// Parse a shape from its command-line name.
    pub fn from_name(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "straight" | "i" => Some(ShapeKind::Straight),
            "l" | "l_shape" | "l-shape" => Some(ShapeKind::LShape),
            "u" | "u_shape" | "u-shape" => Some(ShapeKind::UShape),
            "box" => Some(ShapeKind::Box),
            _ => None,
        }
    }

    /// Which sides start with a corner, indexed by side.
    pub fn corner_flags(&self) -> &'static [bool] {
        match self {
            ShapeKind::Straight => &[false],
            ShapeKind::LShape => &[false, true],
            ShapeKind::UShape => &[false, true, true],
            ShapeKind::Box => &[true, true, true, true],
        }
    }

    /// Number of sides.
    pub fn side_count(&self) -> usize {
        self.corner_flags().len()
    }

    /// Check if the given side starts with a corner.
    pub fn has_corner(&self, side: usize) -> bool {
        self.corner_flags().get(side).copied().unwrap_or(false)
    }
}

impl std::fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShapeKind::Straight => write!(f, "Straight"),
            ShapeKind::LShape => write!(f, "L-shape"),
            ShapeKind::UShape => write!(f, "U-shape"),
            ShapeKind::Box => write!(f, "Box"),
        }
    }
}
