//! Draft - The design being configured, before it is committed to an order.
//!
//! A draft is updated through transformations that return a new draft, so
//! the caller holding it is the only place state changes.

use super::{Bay, BayId, CornerOrientation, Section, ShapeKind, Side};
use crate::config::{Limits, DEFAULT_SHELF_COUNT};
use crate::error::{QuoteError, Result};
use crate::layout;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A material picked for shelves or columns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialChoice {
    /// Catalog material id.
    pub material_id: String,
    /// Thickness in mm.
    pub thickness: u32,
}

impl MaterialChoice {
    /// Create a new material choice.
    pub fn new(material_id: impl Into<String>, thickness: u32) -> Self {
        Self {
            material_id: material_id.into(),
            thickness,
        }
    }
}

/// In-progress configuration of one shelving design.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Draft {
    /// Floor-plan layout.
    pub shape: ShapeKind,
    /// Dimensions per side, indexed like `sides`.
    #[serde(default)]
    pub sections: Vec<Section>,
    /// Bays per side.
    #[serde(default)]
    pub sides: Vec<Side>,
    /// Shelf material.
    #[serde(default)]
    pub shelf: Option<MaterialChoice>,
    /// Column material.
    #[serde(default)]
    pub column: Option<MaterialChoice>,
    /// Next bay id to hand out.
    #[serde(default)]
    pub(crate) next_bay_id: u32,
}

impl Draft {
    /// Create an empty draft for a shape, with blank sections and the corners the shape needs.
    pub fn new(shape: ShapeKind) -> Self {
        let mut draft = Self {
            shape,
            next_bay_id: 1,
            ..Default::default()
        };
        draft.sections = vec![Section::default(); shape.side_count()];
        for i in 0..shape.side_count() {
            let corner = shape.has_corner(i).then(|| draft.new_corner());
            draft.sides.push(Side {
                corner,
                bays: Vec::new(),
            });
        }
        draft
    }

    /// Load a draft from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(QuoteError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Parse a draft from JSON text. Bays without an id are given one.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let draft: Draft = serde_json::from_str(text)?;
        Ok(draft.with_assigned_ids())
    }

    /// Give every bay without an id a fresh one.
    pub fn with_assigned_ids(mut self) -> Self {
        let max_id = self
            .sides
            .iter()
            .flat_map(|s| s.items())
            .map(|b| b.id.0)
            .max()
            .unwrap_or(0);
        self.next_bay_id = self.next_bay_id.max(max_id.saturating_add(1));

        let mut next = self.next_bay_id;
        for bay in self
            .sides
            .iter_mut()
            .flat_map(|s| s.corner.iter_mut().chain(s.bays.iter_mut()))
        {
            if bay.id.0 == 0 {
                bay.id = BayId(next);
                next = next.saturating_add(1);
            }
        }
        self.next_bay_id = next;
        self
    }

    fn allocate_id(&mut self) -> BayId {
        let id = BayId(self.next_bay_id.max(1));
        self.next_bay_id = id.0.saturating_add(1);
        id
    }

    fn new_corner(&mut self) -> Bay {
        let id = self.allocate_id();
        Bay::corner(id, CornerOrientation::Standard, DEFAULT_SHELF_COUNT)
    }

    /// Switch to another shape.
    ///
    /// Sides and sections are kept by index as far as the new shape reaches;
    /// the rest are dropped. Corners are kept only where the new shape has one,
    /// and a default corner is added where it newly needs one.
    pub fn with_shape(&self, shape: ShapeKind) -> Self {
        let mut next = self.clone();
        next.shape = shape;

        let count = shape.side_count();
        next.sections.resize(count, Section::default());
        next.sides.resize(count, Side::default());

        for i in 0..count {
            match (shape.has_corner(i), next.sides[i].corner.is_some()) {
                (true, false) => {
                    let corner = next.new_corner();
                    next.sides[i].corner = Some(corner);
                }
                (false, true) => next.sides[i].corner = None,
                _ => {}
            }
        }

        tracing::debug!("Switched shape {} -> {}", self.shape, shape);
        next
    }

    /// Replace the dimensions of one side.
    pub fn with_section(&self, side: usize, section: Section) -> Result<Self> {
        let mut next = self.clone();
        let slot = next
            .sections
            .get_mut(side)
            .ok_or(QuoteError::SideNotFound { side })?;
        *slot = section;
        Ok(next)
    }

    /// Pick shelf and column materials.
    pub fn with_materials(
        &self,
        shelf: Option<MaterialChoice>,
        column: Option<MaterialChoice>,
    ) -> Self {
        Self {
            shelf,
            column,
            ..self.clone()
        }
    }

    /// Append a regular bay to a side if the side has room for it.
    ///
    /// Returns the new draft and the id given to the bay.
    pub fn add_bay(
        &self,
        side: usize,
        width: f64,
        shelf_count: u32,
        limits: &Limits,
    ) -> Result<(Self, BayId)> {
        let current = self.sides.get(side).ok_or(QuoteError::SideNotFound { side })?;
        let section_width = self.sections.get(side).map(|s| s.width).unwrap_or(0.0);

        if !layout::can_add_bay(current, width, section_width, limits) {
            return Err(QuoteError::NoRoom {
                side,
                width,
                remaining: layout::remaining_length(current, section_width, limits),
            });
        }

        let mut next = self.clone();
        let id = next.allocate_id();
        next.sides[side].bays.push(Bay::new(id, width, shelf_count));
        tracing::debug!("Added {} ({}mm) to side {}", id, width, side);
        Ok((next, id))
    }

    /// Edit a bay or corner in place.
    pub fn update_bay(&self, id: BayId, edit: impl FnOnce(&mut Bay)) -> Result<Self> {
        let mut next = self.clone();
        let bay = next
            .sides
            .iter_mut()
            .flat_map(|s| s.corner.iter_mut().chain(s.bays.iter_mut()))
            .find(|b| b.id == id)
            .ok_or(QuoteError::BayNotFound { id })?;
        let corner = bay.corner;
        edit(bay);
        // A bay cannot be turned into or out of a corner by editing.
        bay.id = id;
        bay.corner = match (corner, bay.corner) {
            (Some(_), Some(turned)) => Some(turned),
            (Some(original), None) => Some(original),
            (None, _) => None,
        };
        Ok(next)
    }

    /// Flip the orientation of the corner on a side.
    pub fn toggle_corner(&self, side: usize) -> Result<Self> {
        let id = self
            .sides
            .get(side)
            .and_then(|s| s.corner.as_ref())
            .map(|c| c.id)
            .ok_or(QuoteError::SideNotFound { side })?;
        self.update_bay(id, |corner| {
            corner.corner = corner.corner.map(CornerOrientation::toggled);
        })
    }

    /// Remove a regular bay. Corners belong to the shape and cannot be removed.
    pub fn remove_bay(&self, id: BayId) -> Result<Self> {
        let mut next = self.clone();
        for side in &mut next.sides {
            if let Some(pos) = side.bays.iter().position(|b| b.id == id) {
                side.bays.remove(pos);
                return Ok(next);
            }
        }
        Err(QuoteError::BayNotFound { id })
    }

    /// Find a bay or corner by id.
    pub fn find_bay(&self, id: BayId) -> Option<&Bay> {
        self.sides.iter().flat_map(|s| s.items()).find(|b| b.id == id)
    }

    /// All bays and corners with their side index, side by side, corner first.
    pub fn bays(&self) -> impl Iterator<Item = (usize, &Bay)> {
        self.sides
            .iter()
            .enumerate()
            .flat_map(|(i, s)| s.items().map(move |b| (i, b)))
    }

    /// Number of bays and corners across all sides.
    pub fn bay_count(&self) -> usize {
        self.sides.iter().map(Side::item_count).sum()
    }

    /// Column length for the whole frame: the tallest measurement of any section.
    pub fn column_length(&self) -> f64 {
        self.sections
            .iter()
            .map(Section::column_length)
            .fold(0.0, f64::max)
    }
}
