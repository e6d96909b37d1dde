//! Along-side length bookkeeping for one run of bays.
//!
//! A side is laid out as `column, (supports + bay + column)*`: every bay is
//! flanked by a support on each side and closed by the next column.

use crate::config::Limits;
use crate::model::{Bay, Draft, Side};
use serde::{Deserialize, Serialize};

/// Length one bay adds to its side, including its supports and closing column.
pub fn item_span(bay_width: f64, limits: &Limits) -> f64 {
    bay_width + 2.0 * limits.support_thickness + limits.column_width
}

/// Length a side needs for its corner and bays.
///
/// An empty side still needs its first column.
pub fn required_length(side: &Side, limits: &Limits) -> f64 {
    limits.column_width
        + side
            .items()
            .map(|bay| item_span(bay.along_side_width(), limits))
            .sum::<f64>()
}

/// Length still free on a side of the given width.
pub fn remaining_length(side: &Side, section_width: f64, limits: &Limits) -> f64 {
    section_width - required_length(side, limits)
}

/// Check if a regular bay of the given width fits on the side.
pub fn can_add_bay(side: &Side, bay_width: f64, section_width: f64, limits: &Limits) -> bool {
    item_span(bay_width, limits) <= remaining_length(side, section_width, limits) + crate::config::EPS
}

/// What occupies a slot along a side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotKind {
    Column,
    Support,
    Bay,
    Corner,
}

/// One slot along a side, as an offset from the side's start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    /// What is in the slot.
    pub kind: SlotKind,
    /// Offset from the start of the side.
    pub offset: f64,
    /// Length along the side.
    pub length: f64,
    /// Depth away from the wall.
    pub depth: f64,
}

/// Linear layout of one side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SideLayout {
    /// Side index within the shape.
    pub index: usize,
    /// Slots in placement order.
    pub slots: Vec<Slot>,
    /// Length the side needs.
    pub required_length: f64,
    /// Width entered for the side.
    pub available_length: f64,
}

impl SideLayout {
    /// Check if the side's bays fit in its width.
    pub fn fits(&self) -> bool {
        self.remaining() >= -crate::config::EPS
    }

    /// Length still free on the side (negative when overfull).
    pub fn remaining(&self) -> f64 {
        self.available_length - self.required_length
    }
}

fn push_bay(slots: &mut Vec<Slot>, cursor: &mut f64, bay: &Bay, limits: &Limits) {
    let depth = bay.depth(limits);
    let kind = if bay.is_corner() {
        SlotKind::Corner
    } else {
        SlotKind::Bay
    };
    for (kind, length) in [
        (SlotKind::Support, limits.support_thickness),
        (kind, bay.along_side_width()),
        (SlotKind::Support, limits.support_thickness),
        (SlotKind::Column, limits.column_width),
    ] {
        slots.push(Slot {
            kind,
            offset: *cursor,
            length,
            depth,
        });
        *cursor += length;
    }
}

/// Lay out one side as a sequence of slots.
pub fn layout_side(index: usize, side: &Side, section_width: f64, limits: &Limits) -> SideLayout {
    let first_depth = side
        .items()
        .next()
        .map(|b| b.depth(limits))
        .unwrap_or(limits.shelf_depth);

    let mut slots = vec![Slot {
        kind: SlotKind::Column,
        offset: 0.0,
        length: limits.column_width,
        depth: first_depth,
    }];
    let mut cursor = limits.column_width;

    for bay in side.items() {
        push_bay(&mut slots, &mut cursor, bay, limits);
    }

    SideLayout {
        index,
        slots,
        required_length: cursor,
        available_length: section_width,
    }
}

/// Lay out every side of a draft.
pub fn layout_sides(draft: &Draft, limits: &Limits) -> Vec<SideLayout> {
    draft
        .sides
        .iter()
        .enumerate()
        .map(|(i, side)| {
            let width = draft.sections.get(i).map(|s| s.width).unwrap_or(0.0);
            layout_side(i, side, width, limits)
        })
        .collect()
}
