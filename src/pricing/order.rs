//! Order totals and weight-based shipping.

use super::line::CostBreakdown;
use crate::config::{
    SHIPPING_PER_EXTRA_10KG, SHIPPING_UP_TO_10KG, SHIPPING_UP_TO_20KG, SHIPPING_UP_TO_30KG,
    VAT_RATE,
};
use serde::{Deserialize, Serialize};

/// Totals of a whole order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderTotals {
    /// Material cost of priced lines.
    pub material_cost: f64,
    /// Add-on, processing and surcharge cost of priced lines.
    pub processing_cost: f64,
    /// Sum of priced line subtotals.
    pub subtotal: f64,
    /// VAT on the subtotal.
    pub vat: f64,
    /// Weight of every line, custom ones included.
    pub weight_kg: f64,
    /// Shipping for the total weight.
    pub shipping: f64,
    /// Subtotal plus VAT plus shipping.
    pub total: f64,
    /// At least one line needs a consultation and is left out of the money totals.
    pub has_custom: bool,
}

/// Shipping cost for a parcel weight in kg.
///
/// Up to 10, 20 and 30 kg are flat brackets; above 30 kg every started 10 kg
/// adds a fixed amount.
pub fn shipping_cost(weight_kg: f64) -> f64 {
    if weight_kg <= 0.0 {
        0.0
    } else if weight_kg <= 10.0 {
        SHIPPING_UP_TO_10KG
    } else if weight_kg <= 20.0 {
        SHIPPING_UP_TO_20KG
    } else if weight_kg <= 30.0 {
        SHIPPING_UP_TO_30KG
    } else {
        SHIPPING_UP_TO_30KG + ((weight_kg - 30.0) / 10.0).ceil() * SHIPPING_PER_EXTRA_10KG
    }
}

/// Sum order lines into totals.
pub fn price_order<'a>(lines: impl IntoIterator<Item = &'a CostBreakdown>) -> OrderTotals {
    let mut totals = OrderTotals::default();

    for line in lines {
        totals.weight_kg += line.weight_kg();
        if line.is_custom() {
            totals.has_custom = true;
            continue;
        }
        totals.material_cost += line.material_cost();
        totals.processing_cost += line.processing_cost;
        totals.subtotal += line.subtotal;
    }

    totals.vat = totals.subtotal * VAT_RATE;
    totals.shipping = shipping_cost(totals.weight_kg);
    totals.total = totals.subtotal + totals.vat + totals.shipping;
    totals
}
