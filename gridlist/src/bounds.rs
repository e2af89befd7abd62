//! Scalar constraints and the content width resolver.
//!
//! `Bounds` constrains a single scalar: the content width of the grid, or
//! the horizontal spacing between columns.

use serde::{Deserialize, Serialize};

use crate::config::Padding;

/// A constraint on one scalar value.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Bounds {
    /// Pass the value through.
    #[default]
    Unbounded,
    /// Override the value entirely.
    Exact(f32),
    /// Raise the value to at least this.
    AtLeast(f32),
    /// Lower the value to at most this.
    AtMost(f32),
    /// Clamp into `[min, max]`.
    Between { min: f32, max: f32 },
}

impl Bounds {
    /// Apply this constraint to `value`.
    ///
    /// A reversed `Between` range resolves to `min`.
    pub fn clamp(self, value: f32) -> f32 {
        match self {
            Bounds::Unbounded => value,
            Bounds::Exact(v) => v,
            Bounds::AtLeast(lo) => value.max(lo),
            Bounds::AtMost(hi) => value.min(hi),
            Bounds::Between { min, max } => value.min(max).max(min),
        }
    }

    /// The smallest value this constraint admits (0 when unconstrained below).
    pub fn lower(self) -> f32 {
        match self {
            Bounds::Unbounded | Bounds::AtMost(_) => 0.0,
            Bounds::Exact(v) | Bounds::AtLeast(v) => v,
            Bounds::Between { min, .. } => min,
        }
    }

    pub(crate) fn scalars(self) -> [Option<f32>; 2] {
        match self {
            Bounds::Unbounded => [None, None],
            Bounds::Exact(v) | Bounds::AtLeast(v) | Bounds::AtMost(v) => [Some(v), None],
            Bounds::Between { min, max } => [Some(min), Some(max)],
        }
    }
}

/// Resolve the usable content width for a container.
///
/// Padding is removed first, then the width constraint applies. The result
/// is never negative.
pub fn content_width(container_width: f32, padding: &Padding, bounds: Bounds) -> f32 {
    let width = bounds.clamp(container_width - padding.horizontal());
    if width < 0.0 {
        tracing::warn!(
            "content width {} is negative (container {}, padding {}), using 0",
            width,
            container_width,
            padding.horizontal()
        );
        return 0.0;
    }
    width
}
