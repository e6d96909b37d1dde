//! Add-ons and detail processing sold per bay.

use serde::{Deserialize, Serialize};

/// A flat-priced accessory (door, drawer, back panel, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddOn {
    /// Catalog identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Price per bay.
    pub price: f64,
    /// Short description shown next to the option.
    #[serde(default)]
    pub description: String,
}

/// How a detail processing option is charged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessingPrice {
    /// Charged for every hole drilled.
    PerHole(f64),
    /// Charged once.
    Flat(f64),
}

/// A machining option applied to a bay's shelves (cable holes, edge rounding, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailProcessing {
    /// Display label.
    pub label: String,
    /// Pricing rule.
    pub price: ProcessingPrice,
}

impl DetailProcessing {
    /// Cost of this processing for the given number of holes.
    ///
    /// `holes` is ignored for flat-priced options.
    pub fn cost(&self, holes: u32) -> f64 {
        match self.price {
            ProcessingPrice::PerHole(price) => price * holes as f64,
            ProcessingPrice::Flat(price) => price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_processing_cost() {
        let holes = DetailProcessing {
            label: "Cable hole".into(),
            price: ProcessingPrice::PerHole(2000.0),
        };
        assert_eq!(holes.cost(3), 6000.0);
        assert_eq!(holes.cost(0), 0.0);

        let rounding = DetailProcessing {
            label: "Edge rounding".into(),
            price: ProcessingPrice::Flat(5000.0),
        };
        assert_eq!(rounding.cost(7), 5000.0);
    }
}
