//! Viewport queries over a laid-out content tree.
//!
//! Hosts that recycle views ask which elements intersect the visible rect;
//! pointer handling asks which element sits under a point.

use crate::content::{ContentTree, ElementRef, IndexPath};
use crate::primitives::{Point, Rect};

impl ContentTree {
    /// Elements whose frames intersect `viewport`, in layout order.
    ///
    /// Sections entirely outside the viewport are skipped without visiting
    /// their items. Frames must come from a completed layout pass.
    pub fn elements_in(&self, viewport: Rect) -> Vec<ElementRef> {
        let mut visible = Vec::new();

        if let Some(frame) = self.header.frame()
            && frame.intersects(&viewport)
        {
            visible.push(ElementRef::ListHeader);
        }

        for (s, section) in self.sections.iter().enumerate() {
            let top = section
                .header
                .frame()
                .or_else(|| section.items.first().map(|i| i.frame()))
                .or_else(|| section.footer.frame())
                .map(|f| f.y);
            let (Some(top), Some(bottom)) = (top, section.content_bottom()) else {
                continue;
            };
            if top > viewport.bottom() {
                break;
            }
            if bottom < viewport.y {
                continue;
            }

            if let Some(frame) = section.header.frame()
                && frame.intersects(&viewport)
            {
                visible.push(ElementRef::SectionHeader(s));
            }
            for (i, item) in section.items.iter().enumerate() {
                if item.frame().intersects(&viewport) {
                    visible.push(ElementRef::Item(IndexPath::new(s, i)));
                }
            }
            if let Some(frame) = section.footer.frame()
                && frame.intersects(&viewport)
            {
                visible.push(ElementRef::SectionFooter(s));
            }
        }

        if let Some(frame) = self.footer.frame()
            && frame.intersects(&viewport)
        {
            visible.push(ElementRef::ListFooter);
        }
        visible
    }

    /// The element under `point`, if any.
    pub fn element_at(&self, point: Point) -> Option<ElementRef> {
        if self.header.frame().is_some_and(|f| f.contains(point)) {
            return Some(ElementRef::ListHeader);
        }
        if self.footer.frame().is_some_and(|f| f.contains(point)) {
            return Some(ElementRef::ListFooter);
        }

        for (s, section) in self.sections.iter().enumerate() {
            if section.header.frame().is_some_and(|f| f.contains(point)) {
                return Some(ElementRef::SectionHeader(s));
            }
            if section.footer.frame().is_some_and(|f| f.contains(point)) {
                return Some(ElementRef::SectionFooter(s));
            }
            let in_section = section
                .content_bottom()
                .is_some_and(|bottom| point.y < bottom);
            if !in_section {
                continue;
            }
            if let Some(i) = section.items.iter().position(|item| item.frame().contains(point)) {
                return Some(ElementRef::Item(IndexPath::new(s, i)));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::ColumnPolicy;
    use crate::config::GridConfig;
    use crate::content::{Section, Supplementary};
    use crate::layout::layout;

    /// List header 0..40, section 0 (6 items, 3 per row) 40..240, section 1 240..340,
    /// list footer 340..380. Items are 100x100, no spacing.
    fn laid_out() -> ContentTree {
        let mut tree = ContentTree::new()
            .with_header(Supplementary::fixed(40.0))
            .with_section(Section::new(6))
            .with_section(Section::new(2))
            .with_footer(Supplementary::fixed(40.0));
        let config = GridConfig::new(ColumnPolicy::FixedCount {
            columns: 3,
            item_height: 100.0,
            horizontal_spacing: 0.0,
            vertical_spacing: 0.0,
        });
        layout(&mut tree, &config, 300.0).unwrap();
        tree
    }

    #[test]
    fn test_elements_in_top_viewport() {
        let tree = laid_out();
        let visible = tree.elements_in(Rect::new(0.0, 0.0, 300.0, 100.0));
        assert_eq!(
            visible,
            vec![
                ElementRef::ListHeader,
                ElementRef::Item(IndexPath::new(0, 0)),
                ElementRef::Item(IndexPath::new(0, 1)),
                ElementRef::Item(IndexPath::new(0, 2)),
            ]
        );
    }

    #[test]
    fn test_elements_in_skips_sections_above() {
        let tree = laid_out();
        let visible = tree.elements_in(Rect::new(0.0, 250.0, 300.0, 200.0));
        assert_eq!(
            visible,
            vec![
                ElementRef::Item(IndexPath::new(1, 0)),
                ElementRef::Item(IndexPath::new(1, 1)),
                ElementRef::ListFooter,
            ]
        );
    }

    #[test]
    fn test_element_at() {
        let tree = laid_out();
        assert_eq!(tree.element_at(Point::new(5.0, 5.0)), Some(ElementRef::ListHeader));
        assert_eq!(
            tree.element_at(Point::new(150.0, 150.0)),
            Some(ElementRef::Item(IndexPath::new(0, 4)))
        );
        assert_eq!(
            tree.element_at(Point::new(250.0, 260.0)),
            None,
            "third column of a two-item row is empty"
        );
        assert_eq!(tree.element_at(Point::new(10.0, 350.0)), Some(ElementRef::ListFooter));
        assert_eq!(tree.element_at(Point::new(10.0, 1000.0)), None);
    }
}
