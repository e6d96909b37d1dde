//! User-facing validation messages.

use crate::catalog::Category;
use crate::model::BayId;
use thiserror::Error;

/// Input field a validation issue belongs to, so it can be shown next to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// The shape picker.
    Shape,
    /// Height inputs of a side.
    SectionHeight { side: usize },
    /// Width input of a side.
    SectionWidth { side: usize },
    /// One extra height input of a side.
    ExtraHeight { side: usize, index: usize },
    /// Shelf material and thickness picker.
    ShelfMaterial,
    /// Column material and thickness picker.
    ColumnMaterial,
    /// A bay's inputs.
    Bay { id: BayId },
    /// The bay list of a side.
    Side { side: usize },
}

/// A broken rule in a draft. Side numbers in messages are 1-based.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationIssue {
    #[error("Choose a shape and enter dimensions for all {expected} side(s) ({found} given)")]
    MissingSections { expected: usize, found: usize },

    #[error("Side {}: enter both the minimum and maximum height", .side + 1)]
    HeightMissing { side: usize },

    #[error("Side {}: height {height}mm must be between {min}mm and {max}mm", .side + 1)]
    HeightOutOfRange {
        side: usize,
        height: f64,
        min: f64,
        max: f64,
    },

    #[error("Side {}: minimum height {min}mm is greater than maximum height {max}mm", .side + 1)]
    HeightOrder { side: usize, min: f64, max: f64 },

    #[error("Side {}: enter the width", .side + 1)]
    WidthMissing { side: usize },

    #[error("Side {}: width {width}mm must be at least {min}mm", .side + 1)]
    WidthTooSmall { side: usize, width: f64, min: f64 },

    #[error("Side {}: extra height {height}mm must be between {min}mm and {max}mm", .side + 1)]
    ExtraHeightOutOfRange {
        side: usize,
        index: usize,
        height: f64,
        min: f64,
        max: f64,
    },

    #[error("Select a shelf material")]
    ShelfMaterialMissing,

    #[error("Select a column material")]
    ColumnMaterialMissing,

    #[error("Material '{id}' is not in the catalog")]
    MaterialNotFound { id: String, column: bool },

    #[error("Material '{id}' is a {found} material and cannot be used for {expected}s")]
    MaterialWrongCategory {
        id: String,
        found: Category,
        expected: Category,
        column: bool,
    },

    #[error("Add at least one bay")]
    NoBays,

    #[error("Side {}: enter a width for every bay", .side + 1)]
    BayWidthMissing { side: usize, bay: BayId },

    #[error("Side {}: every bay needs at least one shelf", .side + 1)]
    ShelfCountMissing { side: usize, bay: BayId },

    #[error("Side {}: add-on '{id}' is not available", .side + 1)]
    AddOnNotFound { side: usize, bay: BayId, id: String },

    #[error("Side {}: detail processing '{id}' is not available", .side + 1)]
    ProcessingNotFound { side: usize, bay: BayId, id: String },

    #[error("Side {}: bay width {width}mm must be between {min}mm and {max}mm", .side + 1)]
    BayWidthOutOfRange {
        side: usize,
        bay: BayId,
        width: f64,
        min: f64,
        max: f64,
    },

    #[error("Side {}: bays need {required}mm but the side is {available}mm wide", .side + 1)]
    SideTooLong {
        side: usize,
        required: f64,
        available: f64,
    },

    #[error("{material} is not available in {thickness}mm")]
    ThicknessUnsupported {
        material: String,
        thickness: u32,
        column: bool,
    },
}

impl ValidationIssue {
    /// Field the issue should be shown next to.
    pub fn field(&self) -> Field {
        match self {
            ValidationIssue::MissingSections { .. } => Field::Shape,
            ValidationIssue::HeightMissing { side }
            | ValidationIssue::HeightOutOfRange { side, .. }
            | ValidationIssue::HeightOrder { side, .. } => Field::SectionHeight { side: *side },
            ValidationIssue::WidthMissing { side } | ValidationIssue::WidthTooSmall { side, .. } => {
                Field::SectionWidth { side: *side }
            }
            ValidationIssue::ExtraHeightOutOfRange { side, index, .. } => Field::ExtraHeight {
                side: *side,
                index: *index,
            },
            ValidationIssue::ShelfMaterialMissing => Field::ShelfMaterial,
            ValidationIssue::ColumnMaterialMissing => Field::ColumnMaterial,
            ValidationIssue::MaterialNotFound { column, .. }
            | ValidationIssue::MaterialWrongCategory { column, .. }
            | ValidationIssue::ThicknessUnsupported { column, .. } => {
                if *column {
                    Field::ColumnMaterial
                } else {
                    Field::ShelfMaterial
                }
            }
            ValidationIssue::BayWidthMissing { bay, .. }
            | ValidationIssue::ShelfCountMissing { bay, .. }
            | ValidationIssue::AddOnNotFound { bay, .. }
            | ValidationIssue::ProcessingNotFound { bay, .. }
            | ValidationIssue::BayWidthOutOfRange { bay, .. } => Field::Bay { id: *bay },
            ValidationIssue::NoBays => Field::Side { side: 0 },
            ValidationIssue::SideTooLong { side, .. } => Field::Side { side: *side },
        }
    }
}
