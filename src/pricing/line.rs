//! Line-level pricing for bays and column sets.

use super::part::{price_part, PartCost};
use crate::catalog::Catalog;
use crate::config::{Limits, EPS, EXTRA_LENGTH_SURCHARGE, EXTRA_LENGTH_THRESHOLD};
use crate::error::{QuoteError, Result};
use crate::model::{Bay, MaterialChoice, PartKind, PartSpec};
use serde::{Deserialize, Serialize};

/// Cost breakdown of one order line. No tax is applied at line level.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// Part the line is built from.
    pub part: PartSpec,
    /// Part cost and weight.
    pub part_cost: PartCost,
    /// Add-on, detail processing and surcharge cost.
    pub processing_cost: f64,
    /// Material cost plus processing cost.
    pub subtotal: f64,
}

impl CostBreakdown {
    /// Material cost of the line.
    pub fn material_cost(&self) -> f64 {
        self.part_cost.material_cost
    }

    /// Weight of the line in kg.
    pub fn weight_kg(&self) -> f64 {
        self.part_cost.weight_kg
    }

    /// Line must be priced by consultation.
    pub fn is_custom(&self) -> bool {
        self.part_cost.is_custom
    }
}

/// Shelf part for a bay ordered `quantity` times.
pub fn shelf_part(bay: &Bay, shelf: &MaterialChoice, limits: &Limits, quantity: u32) -> PartSpec {
    let (width, length) = bay.shelf_dimensions(limits);
    PartSpec::new(
        PartKind::Shelf,
        shelf.material_id.clone(),
        shelf.thickness,
        width,
        length,
        bay.shelf_count * quantity,
    )
}

/// Column part for a group of `bay_count` bays ordered `quantity` times.
pub fn column_part(
    column: &MaterialChoice,
    length: f64,
    bay_count: u32,
    limits: &Limits,
    quantity: u32,
) -> PartSpec {
    PartSpec::new(
        PartKind::Column,
        column.material_id.clone(),
        column.thickness,
        limits.column_width,
        length,
        (bay_count + 1) * quantity,
    )
}

/// Price one bay: its shelves plus add-ons and detail processing per unit.
pub fn price_bay(
    bay: &Bay,
    shelf: &MaterialChoice,
    catalog: &Catalog,
    limits: &Limits,
    quantity: u32,
) -> Result<CostBreakdown> {
    let material = catalog
        .material(&shelf.material_id)
        .ok_or_else(|| QuoteError::UnknownMaterial {
            id: shelf.material_id.clone(),
        })?;

    let part = shelf_part(bay, shelf, limits, quantity);
    let part_cost = price_part(&part, material);

    let mut per_unit = 0.0;
    for id in &bay.add_ons {
        let add_on = catalog
            .add_on(id)
            .ok_or_else(|| QuoteError::UnknownAddOn { id: id.clone() })?;
        per_unit += add_on.price;
    }
    for choice in &bay.processing {
        let processing = catalog
            .processing(&choice.id)
            .ok_or_else(|| QuoteError::UnknownProcessing {
                id: choice.id.clone(),
            })?;
        per_unit += processing.cost(choice.holes);
    }

    let processing_cost = per_unit * quantity as f64;
    Ok(CostBreakdown {
        subtotal: part_cost.material_cost + processing_cost,
        part,
        part_cost,
        processing_cost,
    })
}

/// Extra length surcharge for a column part, charged per column.
pub fn extra_length_surcharge(part: &PartSpec) -> f64 {
    if part.length >= EXTRA_LENGTH_THRESHOLD - EPS {
        EXTRA_LENGTH_SURCHARGE * part.count as f64
    } else {
        0.0
    }
}

/// Price a column part specification.
pub fn price_columns(part: &PartSpec, catalog: &Catalog) -> Result<CostBreakdown> {
    let material = catalog
        .material(&part.material_id)
        .ok_or_else(|| QuoteError::UnknownMaterial {
            id: part.material_id.clone(),
        })?;

    let part_cost = price_part(part, material);
    let processing_cost = extra_length_surcharge(part);
    Ok(CostBreakdown {
        part: part.clone(),
        subtotal: part_cost.material_cost + processing_cost,
        part_cost,
        processing_cost,
    })
}
