//! Column policies and the column plan resolver.
//!
//! A `ColumnPolicy` describes how the grid wants its columns sized. Once per
//! layout pass it is resolved against the content width into a concrete
//! `ColumnPlan`, which is all the row packer and the vertical accumulator
//! ever look at.

use serde::{Deserialize, Serialize};

use crate::bounds::Bounds;
use crate::config::check_dimension;
use crate::error::{GridError, Result};
use crate::primitives::Size;

/// Width tolerance, in content units, when counting how many columns fit.
const FIT_EPSILON: f32 = 1e-3;

/// How item columns are sized. Exactly one policy is active per pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "policy")]
pub enum ColumnPolicy {
    /// Items have an explicit size; as many columns as fit are used and the
    /// horizontal spacing absorbs the slack within its constraint.
    FixedSize {
        item_size: Size,
        horizontal_spacing: Bounds,
        vertical_spacing: f32,
    },
    /// A fixed number of columns; item width is derived from the content width.
    FixedCount {
        columns: usize,
        item_height: f32,
        horizontal_spacing: f32,
        vertical_spacing: f32,
    },
    /// Item width floats within `[min_item_width, max_item_width]` so that
    /// columns fill the row edge to edge.
    Flexible {
        min_item_width: f32,
        max_item_width: f32,
        item_height: f32,
        horizontal_spacing: Bounds,
        vertical_spacing: f32,
    },
}

impl Default for ColumnPolicy {
    fn default() -> Self {
        ColumnPolicy::FixedCount {
            columns: 2,
            item_height: 100.0,
            horizontal_spacing: 0.0,
            vertical_spacing: 0.0,
        }
    }
}

/// Concrete per-pass grid geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColumnPlan {
    pub item_width: f32,
    pub item_height: f32,
    pub horizontal_spacing: f32,
    pub vertical_spacing: f32,
    /// Always at least 1.
    pub columns: usize,
}

impl ColumnPlan {
    /// Width of a full row, spacing included.
    pub fn row_width(&self) -> f32 {
        let n = self.columns as f32;
        n * self.item_width + (n - 1.0) * self.horizontal_spacing
    }

    /// X offset of a column relative to the row's leading edge.
    pub fn column_offset(&self, column: usize) -> f32 {
        column as f32 * (self.item_width + self.horizontal_spacing)
    }
}

impl ColumnPolicy {
    pub(crate) fn validate(&self) -> Result<()> {
        match *self {
            ColumnPolicy::FixedSize {
                item_size,
                horizontal_spacing,
                vertical_spacing,
            } => {
                check_dimension("columns.item_size.width", item_size.width)?;
                check_dimension("columns.item_size.height", item_size.height)?;
                check_spacing_bounds(horizontal_spacing)?;
                check_dimension("columns.vertical_spacing", vertical_spacing)
            }
            ColumnPolicy::FixedCount {
                columns,
                item_height,
                horizontal_spacing,
                vertical_spacing,
            } => {
                if columns == 0 {
                    return Err(GridError::ZeroColumns);
                }
                check_dimension("columns.item_height", item_height)?;
                check_dimension("columns.horizontal_spacing", horizontal_spacing)?;
                check_dimension("columns.vertical_spacing", vertical_spacing)
            }
            ColumnPolicy::Flexible {
                min_item_width,
                max_item_width,
                item_height,
                horizontal_spacing,
                vertical_spacing,
            } => {
                check_dimension("columns.min_item_width", min_item_width)?;
                check_dimension("columns.max_item_width", max_item_width)?;
                check_dimension("columns.item_height", item_height)?;
                check_spacing_bounds(horizontal_spacing)?;
                check_dimension("columns.vertical_spacing", vertical_spacing)
            }
        }
    }

    /// Resolve this policy against the usable content width.
    pub fn resolve(&self, content_width: f32) -> Result<ColumnPlan> {
        let plan = match *self {
            ColumnPolicy::FixedCount {
                columns,
                item_height,
                horizontal_spacing,
                vertical_spacing,
            } => {
                if columns == 0 {
                    return Err(GridError::ZeroColumns);
                }
                let n = columns as f32;
                // Floor keeps a full row inside the content width.
                let item_width = ((content_width - horizontal_spacing * (n - 1.0)) / n).floor();
                ColumnPlan {
                    item_width,
                    item_height,
                    horizontal_spacing,
                    vertical_spacing,
                    columns,
                }
            }
            ColumnPolicy::FixedSize {
                item_size,
                horizontal_spacing,
                vertical_spacing,
            } => {
                let min_spacing = horizontal_spacing.lower();
                let columns = fit_count(content_width, item_size.width, min_spacing);
                let spacing = match horizontal_spacing {
                    Bounds::Exact(s) => s,
                    bounds if columns > 1 => {
                        let slack = content_width - columns as f32 * item_size.width;
                        bounds.clamp(slack / (columns - 1) as f32)
                    }
                    _ => min_spacing,
                };
                ColumnPlan {
                    item_width: item_size.width,
                    item_height: item_size.height,
                    horizontal_spacing: spacing,
                    vertical_spacing,
                    columns,
                }
            }
            ColumnPolicy::Flexible {
                min_item_width,
                max_item_width,
                item_height,
                horizontal_spacing,
                vertical_spacing,
            } => resolve_flexible(
                content_width,
                min_item_width,
                max_item_width,
                item_height,
                horizontal_spacing,
                vertical_spacing,
            ),
        };

        if plan.row_width() > content_width + FIT_EPSILON {
            tracing::warn!(
                "grid row width {} overflows content width {} ({} columns of {})",
                plan.row_width(),
                content_width,
                plan.columns,
                plan.item_width
            );
        }
        Ok(plan)
    }
}

fn check_spacing_bounds(bounds: Bounds) -> Result<()> {
    for value in bounds.scalars().into_iter().flatten() {
        check_dimension("columns.horizontal_spacing", value)?;
    }
    Ok(())
}

/// Largest `count >= 1` with `count * item + (count - 1) * spacing <= width`.
fn fit_count(width: f32, item: f32, spacing: f32) -> usize {
    if item <= 0.0 {
        return 1;
    }
    // Tolerance is in width units, independent of item size.
    let count = ((width + spacing + FIT_EPSILON) / (item + spacing)).floor();
    if count < 1.0 { 1 } else { count as usize }
}

fn resolve_flexible(
    content_width: f32,
    min: f32,
    max: f32,
    item_height: f32,
    horizontal_spacing: Bounds,
    vertical_spacing: f32,
) -> ColumnPlan {
    let max = if min > max {
        tracing::warn!(
            "flexible column min width {} exceeds max width {}, using {}",
            min,
            max,
            min
        );
        min
    } else {
        max
    };

    let min_spacing = horizontal_spacing.lower();
    let columns = fit_count(content_width, min, min_spacing);
    let n = columns as f32;
    let mut item_width = (content_width - (n - 1.0) * min_spacing) / n;
    let mut spacing = min_spacing;

    if item_width > max {
        // Columns cannot grow enough to fill the row: leftover becomes spacing.
        item_width = max;
        if columns > 1 {
            spacing = horizontal_spacing.clamp((content_width - n * max) / (n - 1.0));
        }
    } else if item_width + FIT_EPSILON < min {
        // Not even one minimum-width column fits.
        item_width = min;
    }

    ColumnPlan {
        item_width,
        item_height,
        horizontal_spacing: spacing,
        vertical_spacing,
        columns,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_count(columns: usize, spacing: f32) -> ColumnPolicy {
        ColumnPolicy::FixedCount {
            columns,
            item_height: 50.0,
            horizontal_spacing: spacing,
            vertical_spacing: 5.0,
        }
    }

    fn flexible(min: f32, max: f32, spacing: Bounds) -> ColumnPolicy {
        ColumnPolicy::Flexible {
            min_item_width: min,
            max_item_width: max,
            item_height: 100.0,
            horizontal_spacing: spacing,
            vertical_spacing: 10.0,
        }
    }

    fn fixed_size(width: f32, spacing: Bounds) -> ColumnPolicy {
        ColumnPolicy::FixedSize {
            item_size: Size::new(width, 60.0),
            horizontal_spacing: spacing,
            vertical_spacing: 4.0,
        }
    }

    #[test]
    fn test_fixed_count_floors_half_unit() {
        // (320 - 30) / 4 = 72.5
        let plan = fixed_count(4, 10.0).resolve(320.0).unwrap();
        assert_eq!(plan.item_width, 72.0);
        assert_eq!(plan.columns, 4);
        assert_eq!(plan.item_height, 50.0);
        assert_eq!(plan.vertical_spacing, 5.0);
    }

    #[test]
    fn test_fixed_count_floors_above_half_unit() {
        // (321 - 30) / 4 = 72.75
        let plan = fixed_count(4, 10.0).resolve(321.0).unwrap();
        assert_eq!(plan.item_width, 72.0);
    }

    #[test]
    fn test_fixed_count_row_never_overflows() {
        for width in [300.0, 317.0, 320.0, 323.5, 999.0] {
            let plan = fixed_count(4, 10.0).resolve(width).unwrap();
            assert!(plan.row_width() <= width, "overflow at {}", width);
            assert!(width - plan.row_width() < 4.0, "slack too large at {}", width);
        }
    }

    #[test]
    fn test_fixed_count_exact_division_fills_row() {
        // (330 - 30) / 4 = 75
        let plan = fixed_count(4, 10.0).resolve(330.0).unwrap();
        assert_eq!(plan.item_width, 75.0);
        assert_eq!(plan.row_width(), 330.0);
    }

    #[test]
    fn test_fixed_count_zero_columns_is_error() {
        assert!(matches!(fixed_count(0, 10.0).resolve(320.0), Err(GridError::ZeroColumns)));
    }

    #[test]
    fn test_flexible_maximizes_columns() {
        let plan = flexible(80.0, 120.0, Bounds::Exact(10.0)).resolve(350.0).unwrap();
        assert_eq!(plan.columns, 4);
        assert_eq!(plan.item_width, 80.0);
        assert_eq!(plan.horizontal_spacing, 10.0);
        assert!(plan.row_width() <= 350.0 + FIT_EPSILON);
    }

    #[test]
    fn test_flexible_fills_row_edge_to_edge() {
        let plan = flexible(80.0, 120.0, Bounds::AtLeast(10.0)).resolve(1000.0).unwrap();
        // floor(1010 / 90) = 11 columns
        assert_eq!(plan.columns, 11);
        assert!(plan.item_width >= 80.0 && plan.item_width <= 120.0);
        assert!((plan.row_width() - 1000.0).abs() < 0.01);
        // One more column would not fit at the minimum width.
        assert!(12.0 * 80.0 + 11.0 * 10.0 > 1000.0);
    }

    #[test]
    fn test_flexible_slack_goes_to_spacing_when_max_reached() {
        // 2 columns at min (2*100 + 10 = 210 <= 300 < 320), width would be 145 > max 110.
        let plan = flexible(100.0, 110.0, Bounds::AtLeast(10.0)).resolve(300.0).unwrap();
        assert_eq!(plan.columns, 2);
        assert_eq!(plan.item_width, 110.0);
        assert_eq!(plan.horizontal_spacing, 80.0);
        assert_eq!(plan.row_width(), 300.0);
    }

    #[test]
    fn test_flexible_slack_spacing_respects_upper_bound() {
        let spacing = Bounds::Between { min: 10.0, max: 20.0 };
        let plan = flexible(100.0, 110.0, spacing).resolve(300.0).unwrap();
        assert_eq!(plan.item_width, 110.0);
        assert_eq!(plan.horizontal_spacing, 20.0);
        assert!(plan.row_width() < 300.0);
    }

    #[test]
    fn test_flexible_narrow_container_overflows_single_column() {
        let plan = flexible(80.0, 120.0, Bounds::Exact(10.0)).resolve(50.0).unwrap();
        assert_eq!(plan.columns, 1);
        assert_eq!(plan.item_width, 80.0);
    }

    #[test]
    fn test_flexible_min_above_max_degrades() {
        let plan = flexible(150.0, 100.0, Bounds::AtLeast(0.0)).resolve(400.0).unwrap();
        assert_eq!(plan.columns, 2);
        assert_eq!(plan.item_width, 150.0);
        assert_eq!(plan.horizontal_spacing, 100.0);
    }

    #[test]
    fn test_fixed_size_exact_spacing() {
        let plan = fixed_size(100.0, Bounds::Exact(10.0)).resolve(350.0).unwrap();
        // 3 * 100 + 2 * 10 = 320 <= 350; 4 columns would need 430.
        assert_eq!(plan.columns, 3);
        assert_eq!(plan.horizontal_spacing, 10.0);
        assert_eq!(plan.item_width, 100.0);
        assert_eq!(plan.item_height, 60.0);
    }

    #[test]
    fn test_fixed_size_distributes_slack() {
        let plan = fixed_size(100.0, Bounds::AtLeast(10.0)).resolve(350.0).unwrap();
        assert_eq!(plan.columns, 3);
        assert_eq!(plan.horizontal_spacing, 25.0);
        assert_eq!(plan.row_width(), 350.0);
    }

    #[test]
    fn test_fixed_size_spacing_capped_by_at_most() {
        let plan = fixed_size(100.0, Bounds::AtMost(20.0)).resolve(350.0).unwrap();
        assert_eq!(plan.columns, 3);
        assert_eq!(plan.horizontal_spacing, 20.0);
    }

    #[test]
    fn test_fixed_size_single_column_uses_min_spacing() {
        let plan = fixed_size(100.0, Bounds::Between { min: 8.0, max: 16.0 })
            .resolve(150.0)
            .unwrap();
        assert_eq!(plan.columns, 1);
        assert_eq!(plan.horizontal_spacing, 8.0);
    }

    #[test]
    fn test_fixed_size_wider_than_container_clamps_to_one() {
        let plan = fixed_size(500.0, Bounds::Unbounded).resolve(320.0).unwrap();
        assert_eq!(plan.columns, 1);
        assert_eq!(plan.item_width, 500.0);
    }

    #[test]
    fn test_fixed_size_wide_items_just_short_of_next_column() {
        // Five 1000-wide items need 5000; 4999.5 only holds four.
        let plan = fixed_size(1000.0, Bounds::Exact(0.0)).resolve(4999.5).unwrap();
        assert_eq!(plan.columns, 4);
        assert!(plan.row_width() <= 4999.5);
    }

    #[test]
    fn test_flexible_wide_minimum_just_short_of_next_column() {
        // Five columns at the minimum need 5 * 300 + 4 * 10 = 1540.
        let plan = flexible(300.0, 400.0, Bounds::Exact(10.0)).resolve(1539.845).unwrap();
        assert_eq!(plan.columns, 4);
        assert!(plan.item_width >= 300.0 && plan.item_width <= 400.0);
        assert!(plan.row_width() <= 1539.845 + FIT_EPSILON);
    }

    #[test]
    fn test_fit_count_at_exact_boundary() {
        // 4 * 80 + 3 * 10 = 350 exactly.
        assert_eq!(fit_count(350.0, 80.0, 10.0), 4);
        assert_eq!(fit_count(349.9, 80.0, 10.0), 3);
    }

    #[test]
    fn test_column_offset() {
        let plan = fixed_count(4, 10.0).resolve(330.0).unwrap();
        assert_eq!(plan.column_offset(0), 0.0);
        assert_eq!(plan.column_offset(3), 255.0);
    }
}
