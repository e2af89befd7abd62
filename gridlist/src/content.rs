//! The content tree: list header, sections of items, list footer.
//!
//! The tree is owned by the caller. A layout pass borrows it mutably and
//! writes a frame into every element; nothing is retained afterwards.

use std::fmt;

use crate::constraints::LayoutConstraints;
use crate::primitives::{Rect, Size};

/// Measurement capability for header and footer content.
///
/// The constraints bound the width and leave the height open: the element
/// reports the height it needs at that width. Returning `None` means "no
/// explicit size": the pass then falls back to the content width and the
/// configured default height for that element. Sizes containing NaN or an
/// infinite height are treated the same as `None`.
pub trait Measure {
    fn measure(&self, constraints: LayoutConstraints) -> Option<Size>;
}

impl<F> Measure for F
where
    F: Fn(LayoutConstraints) -> Option<Size>,
{
    fn measure(&self, constraints: LayoutConstraints) -> Option<Size> {
        self(constraints)
    }
}

/// A header or footer with content.
pub struct Supplementary {
    measure: Box<dyn Measure>,
    frame: Rect,
}

impl Supplementary {
    /// Create an element measured by `measure`.
    pub fn new(measure: impl Measure + 'static) -> Self {
        Self {
            measure: Box::new(measure),
            frame: Rect::ZERO,
        }
    }

    /// An element of constant height spanning the content width.
    pub fn fixed(height: f32) -> Self {
        Self::new(move |c: LayoutConstraints| Some(Size::new(c.max_width, height)))
    }

    /// An element that always takes the configured default height.
    pub fn default_sized() -> Self {
        Self::new(|_: LayoutConstraints| -> Option<Size> { None })
    }

    /// Frame written by the last layout pass.
    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub(crate) fn measure(&self, constraints: LayoutConstraints) -> Option<Size> {
        self.measure.measure(constraints)
    }

    pub(crate) fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }
}

impl fmt::Debug for Supplementary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Supplementary")
            .field("frame", &self.frame)
            .finish_non_exhaustive()
    }
}

/// An optional header or footer position.
///
/// `Empty` occupies no space and never triggers the spacing attached to it.
#[derive(Debug, Default)]
pub enum Slot {
    #[default]
    Empty,
    Present(Supplementary),
}

impl Slot {
    pub fn is_present(&self) -> bool {
        matches!(self, Slot::Present(_))
    }

    pub fn get(&self) -> Option<&Supplementary> {
        match self {
            Slot::Present(s) => Some(s),
            Slot::Empty => None,
        }
    }

    pub fn get_mut(&mut self) -> Option<&mut Supplementary> {
        match self {
            Slot::Present(s) => Some(s),
            Slot::Empty => None,
        }
    }

    /// Frame of the element, if present.
    pub fn frame(&self) -> Option<Rect> {
        self.get().map(Supplementary::frame)
    }
}

impl From<Supplementary> for Slot {
    fn from(s: Supplementary) -> Self {
        Slot::Present(s)
    }
}

impl From<Option<Supplementary>> for Slot {
    fn from(s: Option<Supplementary>) -> Self {
        s.map_or(Slot::Empty, Slot::Present)
    }
}

/// A grid cell. Its size always comes from the column plan.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Item {
    frame: Rect,
}

impl Item {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub(crate) fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }
}

/// A section: optional header, items laid out in rows, optional footer.
#[derive(Debug, Default)]
pub struct Section {
    pub header: Slot,
    pub items: Vec<Item>,
    pub footer: Slot,
}

impl Section {
    /// A section with `item_count` items and no header or footer.
    pub fn new(item_count: usize) -> Self {
        Self {
            header: Slot::Empty,
            items: vec![Item::new(); item_count],
            footer: Slot::Empty,
        }
    }

    pub fn with_header(mut self, header: impl Into<Slot>) -> Self {
        self.header = header.into();
        self
    }

    pub fn with_footer(mut self, footer: impl Into<Slot>) -> Self {
        self.footer = footer.into();
        self
    }

    /// Bottom edge of the last element placed for this section.
    ///
    /// The footer if present, else the last row, else the header.
    pub fn content_bottom(&self) -> Option<f32> {
        self.footer
            .frame()
            .or_else(|| self.items.last().map(Item::frame))
            .or_else(|| self.header.frame())
            .map(|f| f.bottom())
    }
}

/// Location of an item within the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IndexPath {
    pub section: usize,
    pub item: usize,
}

impl IndexPath {
    pub const fn new(section: usize, item: usize) -> Self {
        Self { section, item }
    }
}

/// Names any element of the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementRef {
    ListHeader,
    SectionHeader(usize),
    Item(IndexPath),
    SectionFooter(usize),
    ListFooter,
}

/// The full content of a grid list.
#[derive(Debug, Default)]
pub struct ContentTree {
    pub header: Slot,
    pub sections: Vec<Section>,
    pub footer: Slot,
}

impl ContentTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_header(mut self, header: impl Into<Slot>) -> Self {
        self.header = header.into();
        self
    }

    pub fn with_footer(mut self, footer: impl Into<Slot>) -> Self {
        self.footer = footer.into();
        self
    }

    pub fn with_section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    pub fn push_section(&mut self, section: Section) {
        self.sections.push(section);
    }

    /// Total number of items across all sections.
    pub fn item_count(&self) -> usize {
        self.sections.iter().map(|s| s.items.len()).sum()
    }

    /// Frame of an element, if it exists and is present.
    pub fn frame(&self, element: ElementRef) -> Option<Rect> {
        match element {
            ElementRef::ListHeader => self.header.frame(),
            ElementRef::ListFooter => self.footer.frame(),
            ElementRef::SectionHeader(s) => self.sections.get(s)?.header.frame(),
            ElementRef::SectionFooter(s) => self.sections.get(s)?.footer.frame(),
            ElementRef::Item(path) => self
                .sections
                .get(path.section)?
                .items
                .get(path.item)
                .map(Item::frame),
        }
    }

    /// Visit every present element and its frame, in layout order.
    pub fn for_each_frame(&self, mut f: impl FnMut(ElementRef, Rect)) {
        if let Some(frame) = self.header.frame() {
            f(ElementRef::ListHeader, frame);
        }
        for (s, section) in self.sections.iter().enumerate() {
            if let Some(frame) = section.header.frame() {
                f(ElementRef::SectionHeader(s), frame);
            }
            for (i, item) in section.items.iter().enumerate() {
                f(ElementRef::Item(IndexPath::new(s, i)), item.frame());
            }
            if let Some(frame) = section.footer.frame() {
                f(ElementRef::SectionFooter(s), frame);
            }
        }
        if let Some(frame) = self.footer.frame() {
            f(ElementRef::ListFooter, frame);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_presence() {
        assert!(!Slot::Empty.is_present());
        assert!(Slot::from(Supplementary::fixed(10.0)).is_present());
        assert!(!Slot::from(None::<Supplementary>).is_present());
        assert_eq!(Slot::Empty.frame(), None);
    }

    #[test]
    fn test_fixed_measure_spans_width() {
        let s = Supplementary::fixed(24.0);
        let size = s.measure(LayoutConstraints::with_max_width(300.0));
        assert_eq!(size, Some(Size::new(300.0, 24.0)));
    }

    #[test]
    fn test_default_sized_reports_nothing() {
        let s = Supplementary::default_sized();
        assert_eq!(s.measure(LayoutConstraints::with_max_width(300.0)), None);
    }

    #[test]
    fn test_closure_measure() {
        let s = Supplementary::new(|c: LayoutConstraints| {
            Some(Size::new(c.max_width / 2.0, 10.0))
        });
        let size = s.measure(LayoutConstraints::with_max_width(100.0));
        assert_eq!(size, Some(Size::new(50.0, 10.0)));
    }

    #[test]
    fn test_tree_builders() {
        let tree = ContentTree::new()
            .with_header(Supplementary::fixed(10.0))
            .with_section(Section::new(3).with_footer(Supplementary::fixed(5.0)))
            .with_section(Section::new(2));
        assert!(tree.header.is_present());
        assert!(!tree.footer.is_present());
        assert_eq!(tree.sections.len(), 2);
        assert_eq!(tree.item_count(), 5);
        assert_eq!(tree.frame(ElementRef::Item(IndexPath::new(1, 1))), Some(Rect::ZERO));
        assert_eq!(tree.frame(ElementRef::Item(IndexPath::new(1, 2))), None);
        assert_eq!(tree.frame(ElementRef::SectionHeader(0)), None);
    }

    #[test]
    fn test_for_each_frame_order() {
        let tree = ContentTree::new()
            .with_header(Supplementary::fixed(10.0))
            .with_section(Section::new(1).with_header(Supplementary::fixed(5.0)))
            .with_footer(Supplementary::fixed(10.0));
        let mut seen = Vec::new();
        tree.for_each_frame(|element, _| seen.push(element));
        assert_eq!(
            seen,
            vec![
                ElementRef::ListHeader,
                ElementRef::SectionHeader(0),
                ElementRef::Item(IndexPath::new(0, 0)),
                ElementRef::ListFooter,
            ]
        );
    }
}
