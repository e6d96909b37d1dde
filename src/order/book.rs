//! Order - The estimate built from committed drafts.

use super::{LineKind, OrderItem};
use crate::catalog::Catalog;
use crate::config::Limits;
use crate::error::{QuoteError, Result};
use crate::model::{Draft, GroupId, ItemId};
use crate::pricing::{self, OrderTotals};
use crate::validation::{self, ValidationIssue};
use serde::{Deserialize, Serialize};

/// Committed order lines.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Order {
    items: Vec<OrderItem>,
    next_item: u32,
    next_group: u32,
}

impl Order {
    /// Create an empty order.
    pub fn new() -> Self {
        Self::default()
    }

    /// All lines in commit order.
    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    /// Check if the order has no lines.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Find a line by id.
    pub fn item(&self, id: ItemId) -> Option<&OrderItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Lines of one group, column line first.
    pub fn group(&self, group: GroupId) -> impl Iterator<Item = &OrderItem> {
        self.items.iter().filter(move |i| i.group == group)
    }

    /// Column line of a group.
    pub fn columns_of(&self, group: GroupId) -> Option<&OrderItem> {
        self.group(group).find(|i| i.is_columns())
    }

    /// Number of bay lines in a group.
    pub fn bay_count(&self, group: GroupId) -> usize {
        self.group(group).filter(|i| i.is_bay()).count()
    }

    fn next_item_id(&mut self) -> ItemId {
        self.next_item += 1;
        ItemId(self.next_item)
    }

    /// Validate a draft and commit it as a new group.
    ///
    /// Adds one column line for the whole frame and one bay line per bay and
    /// corner. `quantity` is how many identical frames are ordered (at least one).
    pub fn commit(
        &mut self,
        draft: &Draft,
        catalog: &Catalog,
        limits: &Limits,
        quantity: u32,
    ) -> Result<GroupId> {
        validation::validate(draft, catalog, limits)?;

        let shelf = draft
            .shelf
            .as_ref()
            .ok_or(ValidationIssue::ShelfMaterialMissing)?;
        let column = draft
            .column
            .as_ref()
            .ok_or(ValidationIssue::ColumnMaterialMissing)?;
        let quantity = quantity.max(1);
        let bay_count = draft.bay_count() as u32;
        let length = draft.column_length();

        // Price everything before touching the order so a failure leaves it unchanged.
        let column_cost = pricing::price_columns(
            &pricing::column_part(column, length, bay_count, limits, quantity),
            catalog,
        )?;
        let mut bay_lines = Vec::with_capacity(draft.bay_count());
        for (side, bay) in draft.bays() {
            let cost = pricing::price_bay(bay, shelf, catalog, limits, quantity)?;
            bay_lines.push((side, bay.clone(), cost));
        }

        self.next_group += 1;
        let group = GroupId(self.next_group);

        let id = self.next_item_id();
        self.items.push(OrderItem {
            id,
            group,
            shape: draft.shape,
            quantity,
            kind: LineKind::Columns {
                material: column.clone(),
                length,
                bay_count,
            },
            cost: column_cost,
        });

        for (side, bay, cost) in bay_lines {
            let id = self.next_item_id();
            self.items.push(OrderItem {
                id,
                group,
                shape: draft.shape,
                quantity,
                kind: LineKind::Bay {
                    side,
                    bay,
                    material: shelf.clone(),
                },
                cost,
            });
        }

        tracing::info!(
            "Committed {} {} with {} bay(s) x{}",
            group,
            draft.shape,
            bay_count,
            quantity
        );
        Ok(group)
    }

    /// Remove a line.
    ///
    /// Removing a column line removes its whole group. Removing a bay reprices
    /// the group's columns for one bay fewer, and removing the last bay of a
    /// group removes the column line too.
    pub fn remove(&mut self, id: ItemId, catalog: &Catalog) -> Result<()> {
        let item = self.item(id).ok_or(QuoteError::ItemNotFound { id })?;
        let group = item.group;

        if item.is_columns() {
            self.items.retain(|i| i.group != group);
            tracing::info!("Removed {}", group);
            return Ok(());
        }

        let remaining = self.bay_count(group) - 1;
        if remaining == 0 {
            self.items.retain(|i| i.group != group);
            tracing::info!("Removed last bay {} and columns of {}", id, group);
            return Ok(());
        }

        // Reprice before mutating so a catalog failure leaves the order unchanged.
        let Some(columns) = self.columns_of(group) else {
            self.items.retain(|i| i.id != id);
            return Ok(());
        };
        let columns_id = columns.id;
        let mut part = columns.cost.part.clone();
        part.count = (remaining as u32 + 1) * columns.quantity;
        let cost = pricing::price_columns(&part, catalog)?;

        self.items.retain(|i| i.id != id);
        if let Some(columns) = self.items.iter_mut().find(|i| i.id == columns_id) {
            if let LineKind::Columns { bay_count, .. } = &mut columns.kind {
                *bay_count = remaining as u32;
            }
            columns.cost = cost;
        }
        tracing::info!("Removed bay {}, {} now has {} bay(s)", id, group, remaining);
        Ok(())
    }

    /// Totals over every line.
    pub fn totals(&self) -> OrderTotals {
        pricing::price_order(self.items.iter().map(|i| &i.cost))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Bay, BayId, MaterialChoice, Section, ShapeKind, Side};
    use pretty_assertions::assert_eq;

    fn create_basic_draft() -> Draft {
        Draft {
            shape: ShapeKind::Straight,
            sections: vec![Section::new(3000.0, 2300.0, 2350.0)],
            sides: vec![Side {
                corner: None,
                bays: vec![
                    Bay::new(BayId(1), 600.0, 4),
                    Bay::new(BayId(2), 800.0, 4),
                    Bay::new(BayId(3), 500.0, 3),
                ],
            }],
            shelf: Some(MaterialChoice::new("birch-ply", 18)),
            column: Some(MaterialChoice::new("steel-black", 2)),
            ..Default::default()
        }
    }

    fn column_count(order: &Order, group: GroupId) -> u32 {
        order.columns_of(group).unwrap().cost.part.count
    }

    #[test]
    fn test_commit_creates_group() {
        let mut order = Order::new();
        let group = order
            .commit(&create_basic_draft(), &Catalog::builtin(), &Limits::default(), 1)
            .unwrap();
        assert_eq!(order.items().len(), 4);
        assert!(order.items()[0].is_columns());
        assert_eq!(order.bay_count(group), 3);
        assert_eq!(column_count(&order, group), 4);
    }

    #[test]
    fn test_commit_invalid_draft_leaves_order_unchanged() {
        let mut order = Order::new();
        let mut draft = create_basic_draft();
        draft.sides[0].bays[0].width = 900.0;
        let err = order
            .commit(&draft, &Catalog::builtin(), &Limits::default(), 1)
            .unwrap_err();
        assert!(matches!(
            err,
            QuoteError::Invalid(ValidationIssue::BayWidthOutOfRange { .. })
        ));
        assert!(order.is_empty());
    }

    #[test]
    fn test_commit_rejects_draft_without_bays() {
        let mut order = Order::new();
        let mut draft = create_basic_draft();
        draft.sides[0].bays.clear();
        let err = order
            .commit(&draft, &Catalog::builtin(), &Limits::default(), 1)
            .unwrap_err();
        assert!(matches!(err, QuoteError::Invalid(ValidationIssue::NoBays)));
        assert!(order.is_empty());
    }

    #[test]
    fn test_remove_middle_bay_decrements_columns() {
        let catalog = Catalog::builtin();
        let mut order = Order::new();
        let group = order
            .commit(&create_basic_draft(), &catalog, &Limits::default(), 2)
            .unwrap();
        assert_eq!(column_count(&order, group), 8);
        let before = order.columns_of(group).unwrap().cost.subtotal;

        let bay = order.items()[2].id;
        order.remove(bay, &catalog).unwrap();

        assert_eq!(order.bay_count(group), 2);
        assert_eq!(column_count(&order, group), 6);
        let columns = order.columns_of(group).unwrap();
        assert!(matches!(columns.kind, LineKind::Columns { bay_count: 2, .. }));
        assert!(columns.cost.subtotal < before);
    }

    #[test]
    fn test_remove_last_bay_removes_columns() {
        let catalog = Catalog::builtin();
        let mut order = Order::new();
        let group = order
            .commit(&create_basic_draft(), &catalog, &Limits::default(), 1)
            .unwrap();
        let bays: Vec<_> = order.group(group).filter(|i| i.is_bay()).map(|i| i.id).collect();
        for id in bays {
            order.remove(id, &catalog).unwrap();
        }
        assert!(order.is_empty());
        assert!(order.columns_of(group).is_none());
    }

    #[test]
    fn test_remove_columns_removes_group_only() {
        let catalog = Catalog::builtin();
        let limits = Limits::default();
        let mut order = Order::new();
        let first = order
            .commit(&create_basic_draft(), &catalog, &limits, 1)
            .unwrap();
        let second = order
            .commit(&create_basic_draft(), &catalog, &limits, 1)
            .unwrap();

        let columns = order.columns_of(first).unwrap().id;
        order.remove(columns, &catalog).unwrap();
        assert_eq!(order.group(first).count(), 0);
        assert_eq!(order.group(second).count(), 4);
    }

    #[test]
    fn test_remove_unknown_item() {
        let mut order = Order::new();
        let err = order.remove(ItemId(42), &Catalog::builtin()).unwrap_err();
        assert!(matches!(err, QuoteError::ItemNotFound { .. }));
    }

    #[test]
    fn test_committed_cost_matches_recomputation() {
        let catalog = Catalog::builtin();
        let limits = Limits::default();
        let draft = create_basic_draft();
        let mut order = Order::new();
        order.commit(&draft, &catalog, &limits, 3).unwrap();

        let shelf = draft.shelf.as_ref().unwrap();
        for item in order.items() {
            if let LineKind::Bay { bay, .. } = &item.kind {
                let original = draft.find_bay(bay.id).unwrap();
                let expected = pricing::price_bay(original, shelf, &catalog, &limits, 3).unwrap();
                assert_eq!(item.cost, expected);
            }
        }
    }
}
