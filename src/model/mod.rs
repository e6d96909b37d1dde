//! Data model types for shelving designs.

mod bay;
mod draft;
mod id;
mod part;
mod shape;
mod side;

pub use bay::{Bay, CornerOrientation, ProcessingChoice};
pub use draft::{Draft, MaterialChoice};
pub use id::{BayId, GroupId, ItemId};
pub use part::{PartKind, PartSpec};
pub use shape::ShapeKind;
pub use side::{Section, Side};
