//! Order book: committed lines grouped by shared columns.

mod book;
mod item;

pub use book::Order;
pub use item::{LineKind, OrderItem};
