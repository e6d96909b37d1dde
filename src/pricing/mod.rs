//! Cost calculation for parts, order lines and whole orders.

mod line;
mod order;
mod part;

pub use line::{
    column_part, extra_length_surcharge, price_bay, price_columns, shelf_part, CostBreakdown,
};
pub use order::{price_order, shipping_cost, OrderTotals};
pub use part::{price_part, PartCost};
