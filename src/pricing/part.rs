//! Cost and weight of one part specification.

use crate::catalog::Material;
use crate::model::PartSpec;
use serde::{Deserialize, Serialize};

/// Computed figures for a part specification.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartCost {
    /// Face area of one part in m².
    pub area_m2: f64,
    /// Price per m² used.
    pub unit_price: f64,
    /// Volume of all parts in m³.
    pub volume_m3: f64,
    /// Weight of all parts in kg.
    pub weight_kg: f64,
    /// Material cost of all parts. Zero for custom parts.
    pub material_cost: f64,
    /// Part is beyond catalog bounds and must be priced by consultation.
    pub is_custom: bool,
}

/// Price a part specification against its material.
pub fn price_part(part: &PartSpec, material: &Material) -> PartCost {
    let area_m2 = part.area_m2();
    let unit_price = material.unit_price(part.thickness);
    let volume_m3 = part.volume_m3();
    let weight_kg = volume_m3 * material.density;
    let is_custom = material.is_oversized(part.width, part.length);

    let material_cost = if is_custom {
        tracing::warn!(
            "{} {} is beyond {} bounds, priced by consultation",
            part.count,
            part.dimensions_string(),
            material.name
        );
        0.0
    } else {
        area_m2 * unit_price * part.count as f64
    };

    PartCost {
        area_m2,
        unit_price,
        volume_m3,
        weight_kg,
        material_cost,
        is_custom,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, Category};
    use crate::config::float_cmp::approx_eq;
    use crate::model::PartKind;

    fn board(density: f64) -> Material {
        Material {
            id: "board".into(),
            name: "Board".into(),
            category: Category::Shelf,
            price_per_m2: 50_000.0,
            price_per_m2_by_thickness: None,
            available_thicknesses: vec![18],
            density,
            max_width: 800.0,
            max_length: 600.0,
        }
    }

    #[test]
    fn test_weight_follows_volume_and_density() {
        let part = PartSpec::new(PartKind::Shelf, "board", 18, 400.0, 600.0, 1);
        let cost = price_part(&part, &board(720.0));
        // 0.4 x 0.6 x 0.018 x 720
        assert!(approx_eq(cost.weight_kg, 3.1104));
        assert!(approx_eq(cost.area_m2, 0.24));
        assert!(approx_eq(cost.material_cost, 12_000.0));
        assert!(!cost.is_custom);
    }

    #[test]
    fn test_count_scales_cost_and_weight() {
        let one = price_part(
            &PartSpec::new(PartKind::Shelf, "board", 18, 500.0, 400.0, 1),
            &board(500.0),
        );
        let four = price_part(
            &PartSpec::new(PartKind::Shelf, "board", 18, 500.0, 400.0, 4),
            &board(500.0),
        );
        assert!(approx_eq(four.material_cost, one.material_cost * 4.0));
        assert!(approx_eq(four.weight_kg, one.weight_kg * 4.0));
        assert!(approx_eq(four.area_m2, one.area_m2));
    }

    #[test]
    fn test_oversized_part_is_custom_with_zero_cost() {
        let wide = price_part(
            &PartSpec::new(PartKind::Shelf, "board", 18, 900.0, 400.0, 3),
            &board(500.0),
        );
        assert!(wide.is_custom);
        assert_eq!(wide.material_cost, 0.0);
        assert!(wide.weight_kg > 0.0);

        let long = price_part(
            &PartSpec::new(PartKind::Shelf, "board", 18, 400.0, 650.0, 1),
            &board(500.0),
        );
        assert!(long.is_custom);
        assert_eq!(long.material_cost, 0.0);
    }

    #[test]
    fn test_thickness_table_price() {
        let catalog = Catalog::builtin();
        let birch = catalog.material("birch-ply").unwrap();
        let part = PartSpec::new(PartKind::Shelf, "birch-ply", 24, 500.0, 400.0, 1);
        let cost = price_part(&part, birch);
        assert_eq!(cost.unit_price, 70_000.0);
        assert!(approx_eq(cost.material_cost, 0.2 * 70_000.0));
    }
}
