//! Shape layout: along-side lengths and preview geometry.

mod linear;
mod preview;

pub use linear::{
    can_add_bay, item_span, layout_side, layout_sides, remaining_length, required_length,
    SideLayout, Slot, SlotKind,
};
pub use preview::{preview, Heading, Preview, Rect};
