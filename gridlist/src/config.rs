//! Grid configuration.
//!
//! A `GridConfig` is immutable for the duration of a layout pass. Every
//! struct here is serde-friendly so hosts can keep grid styles in JSON.

use serde::{Deserialize, Serialize};

use crate::bounds::Bounds;
use crate::column::ColumnPolicy;
use crate::error::{GridError, Result};

/// Padding around the grid content.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Padding {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Padding {
    /// Create padding with explicit values for each side.
    pub fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self { top, right, bottom, left }
    }

    /// Uniform padding on all sides.
    pub fn all(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Symmetric padding (horizontal, vertical).
    pub fn symmetric(horizontal: f32, vertical: f32) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    /// Total horizontal padding.
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }
}

/// Vertical spacing applied at transitions between list-level and
/// section-level elements.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionSpacing {
    /// Below a present list header, when at least one section follows.
    pub header_to_first_section: f32,
    /// Below a present section header, when the section has items.
    pub section_header_bottom: f32,
    /// Below the last row of items in a section.
    pub item_to_section_footer: f32,
    /// Between sections, when the upper section has a footer.
    pub inter_section_with_footer: f32,
    /// Between sections, when the upper section has no footer.
    pub inter_section_without_footer: f32,
    /// After the last section, before the list footer.
    pub last_section_to_footer: f32,
}

/// Heights used when a header or footer reports no measured size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultHeights {
    pub list_header: f32,
    pub list_footer: f32,
    pub section_header: f32,
    pub section_footer: f32,
}

impl Default for DefaultHeights {
    fn default() -> Self {
        Self {
            list_header: 44.0,
            list_footer: 44.0,
            section_header: 32.0,
            section_footer: 32.0,
        }
    }
}

/// Everything the layout pass needs besides the content and container width.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub columns: ColumnPolicy,
    pub padding: Padding,
    pub width: Bounds,
    pub spacing: SectionSpacing,
    pub default_heights: DefaultHeights,
}

impl GridConfig {
    pub fn new(columns: ColumnPolicy) -> Self {
        Self {
            columns,
            ..Self::default()
        }
    }

    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_width(mut self, width: Bounds) -> Self {
        self.width = width;
        self
    }

    pub fn with_spacing(mut self, spacing: SectionSpacing) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_default_heights(mut self, heights: DefaultHeights) -> Self {
        self.default_heights = heights;
        self
    }

    /// Parse and validate a JSON configuration document.
    ///
    /// Missing fields fall back to their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: GridConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject configurations the layout pass cannot honor.
    ///
    /// Every scalar must be finite and non-negative, and fixed-count grids
    /// need at least one column.
    pub fn validate(&self) -> Result<()> {
        let p = &self.padding;
        let s = &self.spacing;
        let h = &self.default_heights;
        let scalars = [
            ("padding.top", p.top),
            ("padding.right", p.right),
            ("padding.bottom", p.bottom),
            ("padding.left", p.left),
            ("spacing.header_to_first_section", s.header_to_first_section),
            ("spacing.section_header_bottom", s.section_header_bottom),
            ("spacing.item_to_section_footer", s.item_to_section_footer),
            ("spacing.inter_section_with_footer", s.inter_section_with_footer),
            ("spacing.inter_section_without_footer", s.inter_section_without_footer),
            ("spacing.last_section_to_footer", s.last_section_to_footer),
            ("default_heights.list_header", h.list_header),
            ("default_heights.list_footer", h.list_footer),
            ("default_heights.section_header", h.section_header),
            ("default_heights.section_footer", h.section_footer),
        ];
        for (field, value) in scalars {
            check_dimension(field, value)?;
        }
        for value in self.width.scalars().into_iter().flatten() {
            check_dimension("width", value)?;
        }
        self.columns.validate()
    }
}

pub(crate) fn check_dimension(field: &'static str, value: f32) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(GridError::InvalidDimension { field, value })
    }
}
