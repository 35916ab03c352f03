//! Ordered primitive log backing the drawing surface.
//!
//! The canvas owns every drawn primitive; sequence order is paint order.
//! Draw primitives are append-only and immutable once committed. The two
//! scoped exceptions are text content (edited in place by the focused text
//! item) and the highlight decoration, which is inserted behind its text
//! item, repositioned on every edit, and removed on commit.

use crate::editor::TextItem;
use crate::geometry::{CanvasBounds, CanvasPoint, Color};
use thiserror::Error;

/// Fixed glyph cell assumed for text measurement. The core has no font
/// rasterizer; a monospaced cell keeps bounding boxes and cursor hit
/// testing deterministic for any frontend.
pub const TEXT_GLYPH_WIDTH: u32 = 8;
pub const TEXT_LINE_HEIGHT: u32 = 16;

pub type CanvasResult<T> = std::result::Result<T, CanvasError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CanvasError {
    #[error("no primitive with id {id}")]
    PrimitiveNotFound { id: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OvalPrimitive {
    pub id: u64,
    pub bounds: CanvasBounds,
    pub color: Color,
    pub stroke_width: u32,
    pub filled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RectanglePrimitive {
    pub id: u64,
    pub bounds: CanvasBounds,
    pub color: Color,
    pub stroke_width: u32,
}

/// Decoration drawn behind a focused text item to mark it editable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightPrimitive {
    pub id: u64,
    pub bounds: CanvasBounds,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Primitive {
    Oval(OvalPrimitive),
    Rectangle(RectanglePrimitive),
    Text(TextItem),
    Highlight(HighlightPrimitive),
}

impl Primitive {
    pub const fn id(&self) -> u64 {
        match self {
            Self::Oval(oval) => oval.id,
            Self::Rectangle(rectangle) => rectangle.id,
            Self::Text(text) => text.id,
            Self::Highlight(highlight) => highlight.id,
        }
    }

    fn as_text(&self) -> Option<&TextItem> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    fn as_text_mut(&mut self) -> Option<&mut TextItem> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Canvas {
    width: u32,
    height: u32,
    primitives: Vec<Primitive>,
    next_id: u64,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            primitives: Vec::new(),
            next_id: 1,
        }
    }

    pub const fn width(&self) -> u32 {
        self.width
    }

    pub const fn height(&self) -> u32 {
        self.height
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id = self.next_id.saturating_add(1);
        id
    }

    fn index_of(&self, id: u64) -> Option<usize> {
        self.primitives
            .iter()
            .position(|primitive| primitive.id() == id)
    }

    pub fn push_oval(
        &mut self,
        bounds: CanvasBounds,
        color: Color,
        stroke_width: u32,
        filled: bool,
    ) -> u64 {
        let id = self.allocate_id();
        self.primitives.push(Primitive::Oval(OvalPrimitive {
            id,
            bounds,
            color,
            stroke_width,
            filled,
        }));
        id
    }

    pub fn push_rectangle(&mut self, bounds: CanvasBounds, color: Color, stroke_width: u32) -> u64 {
        let id = self.allocate_id();
        self.primitives
            .push(Primitive::Rectangle(RectanglePrimitive {
                id,
                bounds,
                color,
                stroke_width,
            }));
        id
    }

    /// Appends a new editable text item pre-populated with the placeholder,
    /// anchored at its top-left corner.
    pub fn push_text(&mut self, at: CanvasPoint) -> u64 {
        let id = self.allocate_id();
        self.primitives
            .push(Primitive::Text(TextItem::new(id, at.x, at.y)));
        id
    }

    /// Inserts a highlight decoration just before `anchor_id` in paint
    /// order, so it renders behind the text item it decorates.
    pub fn insert_highlight_behind(
        &mut self,
        anchor_id: u64,
        bounds: CanvasBounds,
    ) -> CanvasResult<u64> {
        let index = self
            .index_of(anchor_id)
            .ok_or(CanvasError::PrimitiveNotFound { id: anchor_id })?;
        let id = self.allocate_id();
        self.primitives
            .insert(index, Primitive::Highlight(HighlightPrimitive { id, bounds }));
        Ok(id)
    }

    pub fn reposition(&mut self, id: u64, bounds: CanvasBounds) -> CanvasResult<()> {
        let index = self
            .index_of(id)
            .ok_or(CanvasError::PrimitiveNotFound { id })?;
        match &mut self.primitives[index] {
            Primitive::Oval(oval) => oval.bounds = bounds,
            Primitive::Rectangle(rectangle) => rectangle.bounds = bounds,
            Primitive::Highlight(highlight) => highlight.bounds = bounds,
            Primitive::Text(text) => {
                text.x = bounds.x;
                text.y = bounds.y;
            }
        }
        Ok(())
    }

    pub fn remove(&mut self, id: u64) -> Option<Primitive> {
        let index = self.index_of(id)?;
        Some(self.primitives.remove(index))
    }

    /// Deletes every primitive. There is no partial delete.
    pub fn clear_all(&mut self) {
        self.primitives.clear();
    }

    pub fn get(&self, id: u64) -> Option<&Primitive> {
        self.primitives
            .iter()
            .find(|primitive| primitive.id() == id)
    }

    pub fn get_text(&self, id: u64) -> Option<&TextItem> {
        self.get(id).and_then(Primitive::as_text)
    }

    pub fn get_text_mut(&mut self, id: u64) -> Option<&mut TextItem> {
        self.primitives
            .iter_mut()
            .find(|primitive| primitive.id() == id)
            .and_then(Primitive::as_text_mut)
    }

    /// Paint-order position of a primitive; later means drawn on top.
    pub fn z_index(&self, id: u64) -> Option<usize> {
        self.index_of(id)
    }

    /// Rendered bounding box of a text item under the fixed glyph metrics.
    pub fn text_bounds(&self, id: u64) -> Option<CanvasBounds> {
        let text = self.get_text(id)?;
        let width = u32::try_from(text.char_len())
            .unwrap_or(u32::MAX)
            .saturating_mul(TEXT_GLYPH_WIDTH);
        Some(CanvasBounds::new(text.x, text.y, width, TEXT_LINE_HEIGHT))
    }

    /// Topmost text item whose rendered bounds contain the point.
    pub fn text_at(&self, point: CanvasPoint) -> Option<u64> {
        self.primitives
            .iter()
            .rev()
            .filter_map(Primitive::as_text)
            .map(|text| text.id)
            .find(|&id| {
                self.text_bounds(id)
                    .is_some_and(|bounds| bounds.contains(point))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas() -> Canvas {
        Canvas::new(1280, 720)
    }

    #[test]
    fn push_appends_in_paint_order_with_increasing_ids() {
        let mut canvas = canvas();
        let oval = canvas.push_oval(CanvasBounds::new(0, 0, 10, 10), Color::new(0, 0, 0), 3, true);
        let rect = canvas.push_rectangle(CanvasBounds::new(5, 5, 10, 10), Color::new(0, 0, 0), 3);
        assert!(rect > oval);
        assert_eq!(canvas.z_index(oval), Some(0));
        assert_eq!(canvas.z_index(rect), Some(1));
    }

    #[test]
    fn insert_highlight_lands_just_behind_its_anchor() {
        let mut canvas = canvas();
        let _under = canvas.push_rectangle(CanvasBounds::new(0, 0, 5, 5), Color::new(0, 0, 0), 1);
        let text = canvas.push_text(CanvasPoint::new(10, 10));
        let highlight = canvas
            .insert_highlight_behind(text, CanvasBounds::new(6, 6, 20, 24))
            .expect("anchor exists");

        let text_index = canvas.z_index(text).expect("text is present");
        let highlight_index = canvas.z_index(highlight).expect("highlight is present");
        assert_eq!(highlight_index + 1, text_index);
    }

    #[test]
    fn insert_highlight_behind_missing_anchor_is_an_error() {
        let mut canvas = canvas();
        let err = canvas
            .insert_highlight_behind(99, CanvasBounds::new(0, 0, 1, 1))
            .expect_err("missing anchor should fail");
        assert_eq!(err, CanvasError::PrimitiveNotFound { id: 99 });
    }

    #[test]
    fn reposition_moves_highlight_and_errors_on_missing_id() {
        let mut canvas = canvas();
        let text = canvas.push_text(CanvasPoint::new(0, 0));
        let highlight = canvas
            .insert_highlight_behind(text, CanvasBounds::new(0, 0, 4, 4))
            .expect("anchor exists");

        canvas
            .reposition(highlight, CanvasBounds::new(-4, -4, 30, 24))
            .expect("highlight exists");
        match canvas.get(highlight) {
            Some(Primitive::Highlight(h)) => {
                assert_eq!(h.bounds, CanvasBounds::new(-4, -4, 30, 24));
            }
            other => panic!("expected highlight, got {other:?}"),
        }

        let err = canvas
            .reposition(404, CanvasBounds::new(0, 0, 1, 1))
            .expect_err("missing id should fail");
        assert_eq!(err, CanvasError::PrimitiveNotFound { id: 404 });
    }

    #[test]
    fn remove_returns_the_primitive_and_drops_it_from_order() {
        let mut canvas = canvas();
        let text = canvas.push_text(CanvasPoint::new(0, 0));
        let highlight = canvas
            .insert_highlight_behind(text, CanvasBounds::new(0, 0, 4, 4))
            .expect("anchor exists");

        let removed = canvas.remove(highlight).expect("highlight exists");
        assert!(matches!(removed, Primitive::Highlight(_)));
        assert_eq!(canvas.len(), 1);
        assert!(canvas.remove(highlight).is_none());
    }

    #[test]
    fn clear_all_empties_the_whole_log() {
        let mut canvas = canvas();
        canvas.push_oval(CanvasBounds::new(0, 0, 6, 6), Color::new(255, 0, 0), 3, true);
        canvas.push_text(CanvasPoint::new(10, 10));
        canvas.clear_all();
        assert!(canvas.is_empty());
    }

    #[test]
    fn text_bounds_follow_fixed_glyph_metrics() {
        let mut canvas = canvas();
        let id = canvas.push_text(CanvasPoint::new(50, 50));
        let chars = u32::try_from(crate::editor::PLACEHOLDER_TEXT.chars().count()).unwrap();

        let bounds = canvas.text_bounds(id).expect("text exists");
        assert_eq!(
            bounds,
            CanvasBounds::new(50, 50, chars * TEXT_GLYPH_WIDTH, TEXT_LINE_HEIGHT)
        );
    }

    #[test]
    fn text_at_returns_topmost_hit_or_none() {
        let mut canvas = canvas();
        let lower = canvas.push_text(CanvasPoint::new(0, 0));
        let upper = canvas.push_text(CanvasPoint::new(0, 0));

        assert_eq!(canvas.text_at(CanvasPoint::new(4, 4)), Some(upper));
        canvas.remove(upper);
        assert_eq!(canvas.text_at(CanvasPoint::new(4, 4)), Some(lower));
        assert_eq!(canvas.text_at(CanvasPoint::new(5000, 5000)), None);
    }
}
