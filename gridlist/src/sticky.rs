//! Sticky section headers.
//!
//! Runs after a layout pass against the live scroll offset. A header whose
//! natural position has scrolled above the pin line is held at the pin line
//! until the bottom of its section pushes it back up; once the section has
//! scrolled past entirely, its header rests against the section bottom.
//! Natural frames in the tree and the content size are never modified.

use crate::content::ContentTree;
use crate::primitives::Rect;

/// An on-screen frame for a section header that differs from its natural frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinnedHeader {
    pub section: usize,
    pub frame: Rect,
}

/// Compute pinned frames for section headers.
///
/// `scroll_offset` is the content y at the top of the viewport and
/// `top_inset` the distance below it where headers stick (e.g. under a
/// toolbar). Only headers that moved are returned, in section order.
pub fn pinned_headers(tree: &ContentTree, scroll_offset: f32, top_inset: f32) -> Vec<PinnedHeader> {
    let pin_line = scroll_offset + top_inset;
    let mut pinned = Vec::new();

    for (section_index, section) in tree.sections.iter().enumerate() {
        let Some(natural) = section.header.frame() else {
            continue;
        };
        if natural.y >= pin_line {
            // Sections are ordered: every later header is lower still.
            break;
        }
        let section_bottom = section.content_bottom().unwrap_or(natural.bottom());
        let y = pin_line.min(section_bottom - natural.height);
        if y > natural.y {
            pinned.push(PinnedHeader {
                section: section_index,
                frame: Rect { y, ..natural },
            });
        }
    }
    pinned
}
