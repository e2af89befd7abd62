//! Gridlist: sectioned grid layout for scrolling list views.
//!
//! Given a content tree (optional list header and footer around ordered
//! sections of items, each section with an optional header and footer), a
//! `GridConfig` and a container width, a layout pass writes a frame into
//! every element and returns the total content size.
//!
//! # Architecture
//!
//! ```text
//! container width -> content width -> column plan -> rows -> vertical sweep
//!   (bounds)           (column)         (rows)        (layout)
//! ```
//!
//! Data flows one way; there is no feedback between stages. Sticky headers
//! and viewport queries run afterwards against the frames in the tree.
//!
//! # Usage
//!
//! ```ignore
//! use gridlist::{ColumnPolicy, ContentTree, GridConfig, GridLayout, Section, Supplementary};
//!
//! let grid = GridLayout::new(GridConfig::new(ColumnPolicy::FixedCount {
//!     columns: 4,
//!     item_height: 120.0,
//!     horizontal_spacing: 8.0,
//!     vertical_spacing: 8.0,
//! }))?;
//!
//! let mut tree = ContentTree::new()
//!     .with_section(Section::new(10).with_header(Supplementary::fixed(32.0)));
//! let output = grid.layout(&mut tree, 390.0)?;
//! ```

pub mod bounds;
pub mod column;
pub mod config;
pub mod constraints;
pub mod content;
pub mod error;
pub mod layout;
pub mod primitives;
pub mod query;
pub mod rows;
pub mod sticky;

pub use bounds::{Bounds, content_width};
pub use column::{ColumnPlan, ColumnPolicy};
pub use config::{DefaultHeights, GridConfig, Padding, SectionSpacing};
pub use constraints::LayoutConstraints;
pub use content::{ContentTree, ElementRef, IndexPath, Item, Measure, Section, Slot, Supplementary};
pub use error::{GridError, Result};
pub use layout::{GridLayout, LayoutOutput, layout};
pub use primitives::{Point, Rect, Size};
pub use rows::{RowRanges, row_count, row_ranges};
pub use sticky::{PinnedHeader, pinned_headers};
