//! Plan-view preview geometry.
//!
//! Sides are walked clockwise in screen coordinates (y grows downwards):
//! east, south, west, north. Each side starts where the previous one ended
//! and its slots extend to the right of the walking direction.

use super::linear::{SideLayout, SlotKind};
use serde::{Deserialize, Serialize};

/// Walking direction of a side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Heading {
    East,
    South,
    West,
    North,
}

impl Heading {
    /// Heading of the side with the given index.
    pub fn for_side(index: usize) -> Self {
        match index % 4 {
            0 => Heading::East,
            1 => Heading::South,
            2 => Heading::West,
            _ => Heading::North,
        }
    }
}

/// Axis-aligned rectangle in preview coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Side the rectangle belongs to.
    pub side: usize,
    /// What the rectangle shows.
    pub kind: SlotKind,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Right edge.
    pub fn x_max(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge.
    pub fn y_max(&self) -> f64 {
        self.y + self.height
    }
}

/// Rectangles for the whole frame, shifted so the bounds start at the origin.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Preview {
    /// Rectangles in placement order.
    pub rects: Vec<Rect>,
    /// Bounding width.
    pub width: f64,
    /// Bounding height.
    pub height: f64,
}

/// Place a slot that starts `offset` along a side walked from (ox, oy).
fn place(
    heading: Heading,
    origin: (f64, f64),
    offset: f64,
    length: f64,
    depth: f64,
) -> (f64, f64, f64, f64) {
    let (ox, oy) = origin;
    match heading {
        Heading::East => (ox + offset, oy, length, depth),
        Heading::South => (ox - depth, oy + offset, depth, length),
        Heading::West => (ox - offset - length, oy - depth, length, depth),
        Heading::North => (ox, oy - offset - length, depth, length),
    }
}

fn end_point(heading: Heading, origin: (f64, f64), length: f64) -> (f64, f64) {
    let (ox, oy) = origin;
    match heading {
        Heading::East => (ox + length, oy),
        Heading::South => (ox, oy + length),
        Heading::West => (ox - length, oy),
        Heading::North => (ox, oy - length),
    }
}

/// Convert side layouts into preview rectangles.
pub fn preview(sides: &[SideLayout]) -> Preview {
    let mut rects = Vec::new();
    let mut origin = (0.0, 0.0);

    for side in sides {
        let heading = Heading::for_side(side.index);
        for slot in &side.slots {
            let (x, y, width, height) = place(heading, origin, slot.offset, slot.length, slot.depth);
            rects.push(Rect {
                side: side.index,
                kind: slot.kind,
                x,
                y,
                width,
                height,
            });
        }
        origin = end_point(heading, origin, side.required_length);
    }

    if rects.is_empty() {
        return Preview::default();
    }

    let min_x = rects.iter().map(|r| r.x).fold(f64::MAX, f64::min);
    let min_y = rects.iter().map(|r| r.y).fold(f64::MAX, f64::min);
    let max_x = rects.iter().map(Rect::x_max).fold(f64::MIN, f64::max);
    let max_y = rects.iter().map(Rect::y_max).fold(f64::MIN, f64::max);

    for rect in &mut rects {
        rect.x -= min_x;
        rect.y -= min_y;
    }

    Preview {
        rects,
        width: max_x - min_x,
        height: max_y - min_y,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::float_cmp::approx_eq;
    use crate::config::Limits;
    use crate::layout::layout_side;
    use crate::model::{Bay, BayId, CornerOrientation, Side};

    #[test]
    fn test_straight_preview_width_is_required_length() {
        let limits = Limits::default();
        let side = Side {
            corner: None,
            bays: vec![Bay::new(BayId(1), 600.0, 3), Bay::new(BayId(2), 800.0, 3)],
        };
        let layout = layout_side(0, &side, 2000.0, &limits);
        let preview = preview(&[layout.clone()]);

        assert!(approx_eq(preview.width, layout.required_length));
        assert!(approx_eq(preview.height, limits.shelf_depth));
        assert!(preview.rects.iter().all(|r| r.x >= 0.0 && r.y >= 0.0));
    }

    #[test]
    fn test_second_side_runs_south_from_end_of_first() {
        let limits = Limits::default();
        let first = layout_side(
            0,
            &Side {
                corner: None,
                bays: vec![Bay::new(BayId(1), 600.0, 3)],
            },
            2000.0,
            &limits,
        );
        let second = layout_side(
            1,
            &Side {
                corner: Some(Bay::corner(BayId(2), CornerOrientation::Standard, 3)),
                bays: vec![Bay::new(BayId(3), 500.0, 3)],
            },
            2000.0,
            &limits,
        );
        let preview = preview(&[first.clone(), second.clone()]);

        let south: Vec<_> = preview.rects.iter().filter(|r| r.side == 1).collect();
        let top = south.iter().map(|r| r.y).fold(f64::MAX, f64::min);
        let bottom = south.iter().map(|r| r.y_max()).fold(f64::MIN, f64::max);
        assert!(approx_eq(bottom - top, second.required_length));

        // The corner is as deep as its short edge along the first side's end.
        let corner = south.iter().find(|r| r.kind == SlotKind::Corner).unwrap();
        assert!(approx_eq(corner.width, 600.0));
        assert!(approx_eq(corner.height, 800.0));
        assert!(approx_eq(preview.width, first.required_length.max(600.0)));
    }

    #[test]
    fn test_empty_preview() {
        assert_eq!(preview(&[]), Preview::default());
    }
}
