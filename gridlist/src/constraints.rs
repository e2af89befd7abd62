//! Measurement constraints handed to header and footer content.
//!
//! Supplementary elements are measured width-first: the pass offers the
//! content width and an unbounded height, and the element answers with the
//! size it wants. The open bound is the measuring direction. The answer is
//! clamped back into the offered bounds.

use crate::primitives::Size;

/// Min/max bounds passed to a `Measure` implementation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConstraints {
    pub min_width: f32,
    pub max_width: f32,
    pub min_height: f32,
    pub max_height: f32,
}

impl LayoutConstraints {
    /// Constrained width, unbounded height.
    #[inline]
    pub fn with_max_width(max_width: f32) -> Self {
        Self {
            min_width: 0.0,
            max_width,
            min_height: 0.0,
            max_height: f32::INFINITY,
        }
    }

    /// Constrain a size to these bounds.
    ///
    /// Callers reject NaN sizes before constraining.
    #[inline(always)]
    pub fn constrain(&self, size: Size) -> Size {
        Size {
            width: size.width.clamp(self.min_width, self.max_width),
            height: size.height.clamp(self.min_height, self.max_height),
        }
    }
}
