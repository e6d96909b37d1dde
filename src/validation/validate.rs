//! Validation of a draft before it is priced or committed.

use super::{Field, ValidationIssue};
use crate::catalog::{Catalog, Category, Material};
use crate::config::{float_cmp, Limits, EXTRA_LENGTH_THRESHOLD};
use crate::layout;
use crate::model::{Draft, MaterialChoice};

/// Every issue found in a draft, for mirroring onto input fields.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Whether validation passed.
    pub passed: bool,
    /// Warning messages. Warnings never block a commit.
    pub warnings: Vec<String>,
    /// Broken rules, in precedence order.
    pub errors: Vec<ValidationIssue>,
}

impl ValidationResult {
    /// Create a passing result.
    pub fn ok() -> Self {
        Self {
            passed: true,
            ..Default::default()
        }
    }

    /// Add a warning.
    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Add an error.
    pub fn add_error(&mut self, issue: ValidationIssue) {
        self.errors.push(issue);
        self.passed = false;
    }

    /// The issue with the highest precedence.
    pub fn first_error(&self) -> Option<&ValidationIssue> {
        self.errors.first()
    }

    /// Messages to show next to one field.
    pub fn messages_for(&self, field: Field) -> Vec<String> {
        self.errors
            .iter()
            .filter(|e| e.field() == field)
            .map(ToString::to_string)
            .collect()
    }
}

/// Validate a draft, returning the first broken rule.
///
/// Rules are checked in this order: sections present, heights, widths,
/// extra heights, materials selected and of the right category, bay inputs
/// (at least one bay), bay width range, side lengths, material thickness.
pub fn validate(draft: &Draft, catalog: &Catalog, limits: &Limits) -> Result<(), ValidationIssue> {
    match collect_issues(draft, catalog, limits).errors.into_iter().next() {
        Some(issue) => Err(issue),
        None => Ok(()),
    }
}

/// Run every rule and collect all issues and warnings.
pub fn collect_issues(draft: &Draft, catalog: &Catalog, limits: &Limits) -> ValidationResult {
    let mut result = ValidationResult::ok();

    let expected = draft.shape.side_count();
    if draft.sections.len() != expected || draft.sides.len() != expected {
        result.add_error(ValidationIssue::MissingSections {
            expected,
            found: draft.sections.len().min(draft.sides.len()),
        });
        return result;
    }

    check_heights(draft, limits, &mut result);
    check_widths(draft, limits, &mut result);
    check_extra_heights(draft, limits, &mut result);
    let materials = check_materials_selected(draft, catalog, &mut result);
    check_bays(draft, catalog, &mut result);
    check_bay_widths(draft, limits, &mut result);
    check_side_lengths(draft, limits, &mut result);
    if let Some((shelf, column)) = materials {
        check_thickness(shelf, draft.shelf.as_ref(), false, &mut result);
        check_thickness(column, draft.column.as_ref(), true, &mut result);
        check_custom_sizes(draft, shelf, column, limits, &mut result);
    }

    result
}

fn check_heights(draft: &Draft, limits: &Limits, result: &mut ValidationResult) {
    for (side, section) in draft.sections.iter().enumerate() {
        if float_cmp::approx_zero(section.min_height) || float_cmp::approx_zero(section.max_height) {
            result.add_error(ValidationIssue::HeightMissing { side });
            continue;
        }

        let out_of_range = [section.min_height, section.max_height]
            .into_iter()
            .find(|h| !limits.column_length_in_range(*h));
        if let Some(height) = out_of_range {
            result.add_error(ValidationIssue::HeightOutOfRange {
                side,
                height,
                min: limits.column_min_length,
                max: limits.column_max_length,
            });
            continue;
        }

        if section.min_height > section.max_height + crate::config::EPS {
            result.add_error(ValidationIssue::HeightOrder {
                side,
                min: section.min_height,
                max: section.max_height,
            });
        }
    }
}

fn check_widths(draft: &Draft, limits: &Limits, result: &mut ValidationResult) {
    for (side, section) in draft.sections.iter().enumerate() {
        if float_cmp::approx_zero(section.width) {
            result.add_error(ValidationIssue::WidthMissing { side });
        } else if section.width < limits.section_min_width - crate::config::EPS {
            result.add_error(ValidationIssue::WidthTooSmall {
                side,
                width: section.width,
                min: limits.section_min_width,
            });
        }
    }
}

fn check_extra_heights(draft: &Draft, limits: &Limits, result: &mut ValidationResult) {
    for (side, section) in draft.sections.iter().enumerate() {
        for (index, height) in section.extra_heights.iter().enumerate() {
            if !limits.column_length_in_range(*height) {
                result.add_error(ValidationIssue::ExtraHeightOutOfRange {
                    side,
                    index,
                    height: *height,
                    min: limits.column_min_length,
                    max: limits.column_max_length,
                });
            }
        }
    }
}

fn check_materials_selected<'a>(
    draft: &Draft,
    catalog: &'a Catalog,
    result: &mut ValidationResult,
) -> Option<(&'a Material, &'a Material)> {
    let shelf = lookup(
        catalog,
        draft.shelf.as_ref(),
        ValidationIssue::ShelfMaterialMissing,
        Category::Shelf,
        result,
    );
    let column = lookup(
        catalog,
        draft.column.as_ref(),
        ValidationIssue::ColumnMaterialMissing,
        Category::Column,
        result,
    );
    Some((shelf?, column?))
}

fn lookup<'a>(
    catalog: &'a Catalog,
    choice: Option<&MaterialChoice>,
    missing: ValidationIssue,
    expected: Category,
    result: &mut ValidationResult,
) -> Option<&'a Material> {
    let column = expected == Category::Column;
    let Some(choice) = choice.filter(|c| !c.material_id.trim().is_empty()) else {
        result.add_error(missing);
        return None;
    };
    let Some(material) = catalog.material(&choice.material_id) else {
        result.add_error(ValidationIssue::MaterialNotFound {
            id: choice.material_id.clone(),
            column,
        });
        return None;
    };
    if material.category != expected {
        result.add_error(ValidationIssue::MaterialWrongCategory {
            id: material.id.clone(),
            found: material.category,
            expected,
            column,
        });
        return None;
    }
    Some(material)
}

fn check_bays(draft: &Draft, catalog: &Catalog, result: &mut ValidationResult) {
    if draft.bay_count() == 0 {
        result.add_error(ValidationIssue::NoBays);
    }
    for (side, bay) in draft.bays() {
        if float_cmp::approx_zero(bay.along_side_width()) {
            result.add_error(ValidationIssue::BayWidthMissing { side, bay: bay.id });
        }
        if bay.shelf_count < 1 {
            result.add_error(ValidationIssue::ShelfCountMissing { side, bay: bay.id });
        }
        for id in &bay.add_ons {
            if catalog.add_on(id).is_none() {
                result.add_error(ValidationIssue::AddOnNotFound {
                    side,
                    bay: bay.id,
                    id: id.clone(),
                });
            }
        }
        for choice in &bay.processing {
            if catalog.processing(&choice.id).is_none() {
                result.add_error(ValidationIssue::ProcessingNotFound {
                    side,
                    bay: bay.id,
                    id: choice.id.clone(),
                });
            }
        }
    }
}

fn check_bay_widths(draft: &Draft, limits: &Limits, result: &mut ValidationResult) {
    for (side, bay) in draft.bays() {
        if bay.is_corner() || float_cmp::approx_zero(bay.width) {
            continue;
        }
        if !limits.bay_width_in_range(bay.width) {
            result.add_error(ValidationIssue::BayWidthOutOfRange {
                side,
                bay: bay.id,
                width: bay.width,
                min: limits.bay_min_width,
                max: limits.bay_max_width,
            });
        }
    }
}

fn check_side_lengths(draft: &Draft, limits: &Limits, result: &mut ValidationResult) {
    for side_layout in layout::layout_sides(draft, limits) {
        if !side_layout.fits() {
            result.add_error(ValidationIssue::SideTooLong {
                side: side_layout.index,
                required: side_layout.required_length,
                available: side_layout.available_length,
            });
        }
    }
}

fn check_thickness(
    material: &Material,
    choice: Option<&MaterialChoice>,
    column: bool,
    result: &mut ValidationResult,
) {
    let Some(choice) = choice else {
        return;
    };
    if !material.supports_thickness(choice.thickness) {
        result.add_error(ValidationIssue::ThicknessUnsupported {
            material: material.name.clone(),
            thickness: choice.thickness,
            column,
        });
    }
}

fn check_custom_sizes(
    draft: &Draft,
    shelf: &Material,
    column: &Material,
    limits: &Limits,
    result: &mut ValidationResult,
) {
    for (side, bay) in draft.bays() {
        let (width, length) = bay.shelf_dimensions(limits);
        if shelf.is_oversized(width, length) {
            result.add_warning(format!(
                "Side {}: {} exceeds {} size limits and will be quoted by consultation",
                side + 1,
                bay.label(),
                shelf.name
            ));
        }
    }

    let column_length = draft.column_length();
    if column.is_oversized(limits.column_width, column_length) {
        result.add_warning(format!(
            "Columns of {}mm exceed {}mm for {} and will be quoted by consultation",
            column_length, column.max_length, column.name
        ));
    } else if column_length >= EXTRA_LENGTH_THRESHOLD - crate::config::EPS {
        result.add_warning(format!(
            "Columns of {}mm include the extra length surcharge",
            column_length
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Bay, BayId, CornerOrientation, Section, ShapeKind, Side};

    fn create_basic_draft() -> Draft {
        Draft {
            shape: ShapeKind::Straight,
            sections: vec![Section::new(2000.0, 2300.0, 2350.0)],
            sides: vec![Side {
                corner: None,
                bays: vec![Bay::new(BayId(1), 600.0, 4), Bay::new(BayId(2), 800.0, 4)],
            }],
            shelf: Some(MaterialChoice::new("birch-ply", 18)),
            column: Some(MaterialChoice::new("steel-black", 2)),
            ..Default::default()
        }
    }

    fn first_issue(draft: &Draft) -> Option<ValidationIssue> {
        validate(draft, &Catalog::builtin(), &Limits::default()).err()
    }

    #[test]
    fn test_validate_basic_draft_passes() {
        assert_eq!(first_issue(&create_basic_draft()), None);
    }

    #[test]
    fn test_validate_missing_sections() {
        let mut draft = create_basic_draft();
        draft.shape = ShapeKind::LShape;
        assert!(matches!(
            first_issue(&draft),
            Some(ValidationIssue::MissingSections {
                expected: 2,
                found: 1
            })
        ));
    }

    #[test]
    fn test_validate_height_rules() {
        let mut draft = create_basic_draft();
        draft.sections[0].min_height = 0.0;
        assert!(matches!(
            first_issue(&draft),
            Some(ValidationIssue::HeightMissing { side: 0 })
        ));

        draft.sections[0].min_height = 900.0;
        assert!(matches!(
            first_issue(&draft),
            Some(ValidationIssue::HeightOutOfRange { height, .. }) if height == 900.0
        ));

        draft.sections[0].min_height = 2400.0;
        assert!(matches!(
            first_issue(&draft),
            Some(ValidationIssue::HeightOrder { .. })
        ));
    }

    #[test]
    fn test_validate_width_rules() {
        let mut draft = create_basic_draft();
        draft.sections[0].width = 0.0;
        assert!(matches!(
            first_issue(&draft),
            Some(ValidationIssue::WidthMissing { side: 0 })
        ));

        draft.sections[0].width = 300.0;
        assert!(matches!(
            first_issue(&draft),
            Some(ValidationIssue::WidthTooSmall { .. })
        ));
    }

    #[test]
    fn test_validate_extra_heights() {
        let mut draft = create_basic_draft();
        draft.sections[0].extra_heights = vec![2400.0, 3100.0];
        assert!(matches!(
            first_issue(&draft),
            Some(ValidationIssue::ExtraHeightOutOfRange { index: 1, .. })
        ));
    }

    #[test]
    fn test_validate_materials() {
        let mut draft = create_basic_draft();
        draft.shelf = None;
        assert_eq!(
            first_issue(&draft),
            Some(ValidationIssue::ShelfMaterialMissing)
        );

        let mut draft = create_basic_draft();
        draft.column = Some(MaterialChoice::new("", 2));
        assert_eq!(
            first_issue(&draft),
            Some(ValidationIssue::ColumnMaterialMissing)
        );

        let mut draft = create_basic_draft();
        draft.column = Some(MaterialChoice::new("bamboo", 2));
        assert!(matches!(
            first_issue(&draft),
            Some(ValidationIssue::MaterialNotFound { column: true, .. })
        ));
    }

    #[test]
    fn test_validate_material_category() {
        let mut draft = create_basic_draft();
        draft.shelf = Some(MaterialChoice::new("steel-black", 2));
        draft.column = Some(MaterialChoice::new("birch-ply", 18));
        let result = collect_issues(&draft, &Catalog::builtin(), &Limits::default());
        assert!(!result.passed);
        assert!(matches!(
            result.first_error(),
            Some(ValidationIssue::MaterialWrongCategory {
                found: Category::Column,
                expected: Category::Shelf,
                column: false,
                ..
            })
        ));
        assert_eq!(result.messages_for(Field::ShelfMaterial).len(), 1);
        assert_eq!(
            result.messages_for(Field::ColumnMaterial),
            vec!["Material 'birch-ply' is a shelf material and cannot be used for columns".to_string()]
        );
    }

    #[test]
    fn test_validate_requires_a_bay() {
        let mut draft = create_basic_draft();
        draft.sides[0].bays.clear();
        assert_eq!(first_issue(&draft), Some(ValidationIssue::NoBays));
        assert_eq!(ValidationIssue::NoBays.field(), Field::Side { side: 0 });
    }

    #[test]
    fn test_validate_bay_inputs() {
        let mut draft = create_basic_draft();
        draft.sides[0].bays[1].shelf_count = 0;
        assert!(matches!(
            first_issue(&draft),
            Some(ValidationIssue::ShelfCountMissing { bay: BayId(2), .. })
        ));

        let mut draft = create_basic_draft();
        draft.sides[0].bays[0].width = 0.0;
        assert!(matches!(
            first_issue(&draft),
            Some(ValidationIssue::BayWidthMissing { bay: BayId(1), .. })
        ));

        let mut draft = create_basic_draft();
        draft.sides[0].bays[0].add_ons = vec!["jetpack".into()];
        assert!(matches!(
            first_issue(&draft),
            Some(ValidationIssue::AddOnNotFound { .. })
        ));
    }

    #[test]
    fn test_validate_bay_width_range() {
        let mut draft = create_basic_draft();
        draft.sides[0].bays[1].width = 900.0;
        let issue = first_issue(&draft).unwrap();
        assert!(matches!(issue, ValidationIssue::BayWidthOutOfRange { .. }));
        assert_eq!(
            issue.to_string(),
            "Side 1: bay width 900mm must be between 400mm and 800mm"
        );

        draft.sides[0].bays[1].width = 800.0;
        assert_eq!(first_issue(&draft), None);
    }

    #[test]
    fn test_validate_corner_ignores_bay_range() {
        let mut draft = create_basic_draft();
        draft.shape = ShapeKind::LShape;
        draft.sections.push(Section::new(2000.0, 2300.0, 2350.0));
        draft.sides.push(Side {
            corner: Some(Bay::corner(BayId(3), CornerOrientation::Standard, 3)),
            bays: vec![],
        });
        assert_eq!(first_issue(&draft), None);
    }

    #[test]
    fn test_validate_side_too_long() {
        let mut draft = create_basic_draft();
        // 40 + 670 + 870 = 1580
        draft.sections[0].width = 1500.0;
        assert!(matches!(
            first_issue(&draft),
            Some(ValidationIssue::SideTooLong { required, .. }) if required == 1580.0
        ));
        draft.sections[0].width = 1580.0;
        assert_eq!(first_issue(&draft), None);
    }

    #[test]
    fn test_validate_thickness() {
        let mut draft = create_basic_draft();
        draft.shelf = Some(MaterialChoice::new("birch-ply", 12));
        assert!(matches!(
            first_issue(&draft),
            Some(ValidationIssue::ThicknessUnsupported { thickness: 12, column: false, .. })
        ));
    }

    #[test]
    fn test_precedence_reports_earliest_rule() {
        let mut draft = create_basic_draft();
        draft.sides[0].bays[0].width = 900.0;
        draft.shelf = None;
        draft.sections[0].width = 0.0;
        assert!(matches!(
            first_issue(&draft),
            Some(ValidationIssue::WidthMissing { .. })
        ));
    }

    #[test]
    fn test_collect_issues_reports_everything_by_field() {
        let mut draft = create_basic_draft();
        draft.sides[0].bays[0].width = 900.0;
        draft.sections[0].width = 1800.0;
        draft.shelf = None;
        let result = collect_issues(&draft, &Catalog::builtin(), &Limits::default());
        assert!(!result.passed);
        assert_eq!(result.errors.len(), 3);
        assert_eq!(result.messages_for(Field::ShelfMaterial).len(), 1);
        assert_eq!(result.messages_for(Field::Bay { id: BayId(1) }).len(), 1);
        assert_eq!(result.messages_for(Field::Side { side: 0 }).len(), 1);
    }

    #[test]
    fn test_collect_issues_warns_about_consultation_and_surcharge() {
        let mut draft = create_basic_draft();
        draft.shelf = Some(MaterialChoice::new("tempered-glass", 8));
        let result = collect_issues(&draft, &Catalog::builtin(), &Limits::default());
        assert!(result.passed);
        // 800mm glass shelf is over the 600mm glass limit.
        assert_eq!(result.warnings.len(), 1);

        let mut draft = create_basic_draft();
        draft.sections[0].max_height = 2800.0;
        let result = collect_issues(&draft, &Catalog::builtin(), &Limits::default());
        assert!(result.passed);
        assert!(result.warnings[0].contains("consultation"));

        draft.sections[0].max_height = 2450.0;
        let result = collect_issues(&draft, &Catalog::builtin(), &Limits::default());
        assert!(result.warnings[0].contains("surcharge"));
    }
}
