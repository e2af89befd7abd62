//! The layout pass.
//!
//! One forward sweep over the content tree: list header, then each section
//! (header, item rows, footer), then the list footer. A single vertical
//! cursor advances as elements are placed; each frame's bottom edge is the
//! cursor value right after that element, before any trailing spacing.
//!
//! ```text
//! padding.top
//! [list header]        + header_to_first_section   (if any section)
//! [section header]     + section_header_bottom     (if section has items)
//! [row] + vertical_spacing ... [last row] + item_to_section_footer
//! [section footer]
//!                      + inter_section_with_footer / _without_footer
//!                        (last_section_to_footer after the last section)
//! [list footer]
//! padding.bottom
//! ```

use serde::{Deserialize, Serialize};

use crate::bounds::content_width;
use crate::column::ColumnPlan;
use crate::config::{GridConfig, check_dimension};
use crate::constraints::LayoutConstraints;
use crate::content::{ContentTree, Item, Section, Slot};
use crate::error::Result;
use crate::primitives::{Rect, Size};
use crate::rows::row_ranges;

/// Result of a layout pass. Element frames are written into the tree.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutOutput {
    /// `(content width, final cursor)`.
    pub content_size: Size,
    /// Column geometry used for the item rows.
    pub plan: ColumnPlan,
}

/// A validated grid configuration ready to lay out content trees.
#[derive(Debug, Clone)]
pub struct GridLayout {
    config: GridConfig,
}

impl GridLayout {
    /// Validate `config` and wrap it for layout.
    pub fn new(config: GridConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Lay out `tree` inside a container `container_width` wide.
    ///
    /// Fails before touching the tree if the width is not a finite,
    /// non-negative number.
    pub fn layout(&self, tree: &mut ContentTree, container_width: f32) -> Result<LayoutOutput> {
        check_dimension("container_width", container_width)?;

        let config = &self.config;
        let width = content_width(container_width, &config.padding, config.width);
        let plan = config.columns.resolve(width)?;

        let mut pass = Pass {
            config,
            plan,
            content_width: width,
            left: config.padding.left,
            y: config.padding.top,
        };
        pass.run(tree);

        let content_size = Size::new(width, pass.y);
        tracing::debug!(
            "grid layout: {} sections, {} items, {} columns of {}x{}, content {}x{}",
            tree.sections.len(),
            tree.item_count(),
            plan.columns,
            plan.item_width,
            plan.item_height,
            content_size.width,
            content_size.height
        );
        Ok(LayoutOutput { content_size, plan })
    }
}

/// Lay out `tree` with `config` in one call.
pub fn layout(
    tree: &mut ContentTree,
    config: &GridConfig,
    container_width: f32,
) -> Result<LayoutOutput> {
    config.validate()?;
    GridLayout {
        config: config.clone(),
    }
    .layout(tree, container_width)
}

/// State of one sweep.
struct Pass<'c> {
    config: &'c GridConfig,
    plan: ColumnPlan,
    content_width: f32,
    left: f32,
    /// The cursor.
    y: f32,
}

impl Pass<'_> {
    fn run(&mut self, tree: &mut ContentTree) {
        let spacing = self.config.spacing;
        let heights = self.config.default_heights;

        if self.place_supplementary(&mut tree.header, heights.list_header)
            && !tree.sections.is_empty()
        {
            self.y += spacing.header_to_first_section;
        }

        let count = tree.sections.len();
        for (index, section) in tree.sections.iter_mut().enumerate() {
            let top = self.y;
            let has_footer = self.place_section(section);
            tracing::trace!("section {}: {}..{}", index, top, self.y);

            self.y += if index + 1 == count {
                spacing.last_section_to_footer
            } else if has_footer {
                spacing.inter_section_with_footer
            } else {
                spacing.inter_section_without_footer
            };
        }

        self.place_supplementary(&mut tree.footer, heights.list_footer);
        self.y += self.config.padding.bottom;
    }

    /// Place one section; returns whether its footer was present.
    fn place_section(&mut self, section: &mut Section) -> bool {
        let spacing = self.config.spacing;
        let heights = self.config.default_heights;

        if self.place_supplementary(&mut section.header, heights.section_header)
            && !section.items.is_empty()
        {
            self.y += spacing.section_header_bottom;
        }
        self.place_rows(&mut section.items);
        self.place_supplementary(&mut section.footer, heights.section_footer)
    }

    fn place_rows(&mut self, items: &mut [Item]) {
        let plan = self.plan;
        let rows = row_ranges(items.len(), plan.columns);
        let last = rows.len();

        for (row, range) in rows.enumerate() {
            for (column, item) in items[range].iter_mut().enumerate() {
                item.set_frame(Rect::new(
                    self.left + plan.column_offset(column),
                    self.y,
                    plan.item_width,
                    plan.item_height,
                ));
            }
            self.y += plan.item_height;
            self.y += if row + 1 == last {
                self.config.spacing.item_to_section_footer
            } else {
                plan.vertical_spacing
            };
        }
    }

    /// Measure and place a header or footer at the cursor.
    ///
    /// Returns false for an empty slot, which occupies no space.
    fn place_supplementary(&mut self, slot: &mut Slot, default_height: f32) -> bool {
        let Some(element) = slot.get_mut() else {
            return false;
        };
        let constraints = LayoutConstraints::with_max_width(self.content_width);
        let size = element
            .measure(constraints)
            .filter(|size| {
                let usable = !size.width.is_nan() && size.height.is_finite();
                if !usable {
                    tracing::warn!(?size, "unusable measured size, using default height");
                }
                usable
            })
            .map(|size| constraints.constrain(size))
            .unwrap_or(Size::new(self.content_width, default_height));

        element.set_frame(Rect::new(self.left, self.y, size.width, size.height));
        self.y += size.height;
        true
    }
}
