//! Builtin product tables.

use super::{AddOn, Catalog, Category, DetailProcessing, Material, ProcessingPrice};
use std::collections::BTreeMap;

#[allow(clippy::too_many_arguments)] // Table rows read better positionally
fn material(
    id: &str,
    name: &str,
    category: Category,
    price_per_m2: f64,
    by_thickness: &[(u32, f64)],
    available_thicknesses: &[u32],
    density: f64,
    max: (f64, f64),
) -> Material {
    Material {
        id: id.to_string(),
        name: name.to_string(),
        category,
        price_per_m2,
        price_per_m2_by_thickness: if by_thickness.is_empty() {
            None
        } else {
            Some(by_thickness.iter().copied().collect())
        },
        available_thicknesses: available_thicknesses.to_vec(),
        density,
        max_width: max.0,
        max_length: max.1,
    }
}

fn add_on(id: &str, name: &str, price: f64, description: &str) -> AddOn {
    AddOn {
        id: id.to_string(),
        name: name.to_string(),
        price,
        description: description.to_string(),
    }
}

pub(super) fn catalog() -> Catalog {
    let materials = [
        material(
            "birch-ply",
            "Birch plywood",
            Category::Shelf,
            55_000.0,
            &[(18, 55_000.0), (24, 70_000.0)],
            &[18, 24],
            680.0,
            (800.0, 600.0),
        ),
        material(
            "pine",
            "Solid pine",
            Category::Shelf,
            38_000.0,
            &[],
            &[18],
            500.0,
            (800.0, 600.0),
        ),
        material(
            "tempered-glass",
            "Tempered glass",
            Category::Shelf,
            120_000.0,
            &[(8, 120_000.0), (10, 140_000.0)],
            &[8, 10],
            2500.0,
            (600.0, 600.0),
        ),
        material(
            "steel-black",
            "Black powder-coated steel",
            Category::Column,
            250_000.0,
            &[(2, 250_000.0), (3, 320_000.0)],
            &[2, 3],
            7850.0,
            (40.0, 2700.0),
        ),
        material(
            "aluminium",
            "Anodised aluminium",
            Category::Column,
            200_000.0,
            &[],
            &[2],
            2700.0,
            (40.0, 2400.0),
        ),
    ];

    let add_ons = vec![
        add_on("door", "Hinged door", 45_000.0, "Full-width door on soft-close hinges"),
        add_on("drawer", "Drawer", 60_000.0, "Under-shelf drawer with runners"),
        add_on("back-panel", "Back panel", 25_000.0, "Closes the back of the bay"),
    ];

    let processing = BTreeMap::from([
        (
            "cable-hole".to_string(),
            DetailProcessing {
                label: "Cable hole".to_string(),
                price: ProcessingPrice::PerHole(3000.0),
            },
        ),
        (
            "edge-rounding".to_string(),
            DetailProcessing {
                label: "Edge rounding".to_string(),
                price: ProcessingPrice::Flat(8000.0),
            },
        ),
    ]);

    Catalog {
        materials: materials.into_iter().map(|m| (m.id.clone(), m)).collect(),
        add_ons,
        processing,
    }
}
