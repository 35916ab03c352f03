//! Drawing session: tool state, the owned canvas log, and inline text focus.

mod operations;
mod text;
mod tools;

pub use text::{SelectionRange, TextItem, PLACEHOLDER_TEXT};
pub use tools::{PaletteColor, ToolKind, ToolState, BRUSH_WIDTHS, DEFAULT_BRUSH_WIDTH};

use crate::canvas::Canvas;
use crate::geometry::{CanvasPoint, Color};

/// Outward margin between a focused text item's bounds and its highlight.
pub const HIGHLIGHT_MARGIN: u32 = 4;

/// All mutable drawing state, threaded explicitly through every event
/// handler. Focus is owned here: at most one text item is editable, and a
/// highlight decoration exists iff some item holds focus.
#[derive(Debug, Clone)]
pub struct PaintSession {
    tools: ToolState,
    canvas: Canvas,
    focused_text: Option<u64>,
    highlight: Option<u64>,
    drag_anchor: Option<CanvasPoint>,
}

impl PaintSession {
    pub fn new(canvas_width: u32, canvas_height: u32) -> Self {
        Self {
            tools: ToolState::new(),
            canvas: Canvas::new(canvas_width, canvas_height),
            focused_text: None,
            highlight: None,
            drag_anchor: None,
        }
    }

    pub fn tools(&self) -> &ToolState {
        &self.tools
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn focused_text_id(&self) -> Option<u64> {
        self.focused_text
    }

    pub fn focused_text(&self) -> Option<&TextItem> {
        self.focused_text.and_then(|id| self.canvas.get_text(id))
    }

    pub fn highlight_id(&self) -> Option<u64> {
        self.highlight
    }

    pub fn set_tool(&mut self, tool: ToolKind) {
        self.tools.set_tool(tool);
    }

    pub fn set_color(&mut self, color: Color) {
        self.tools.set_color(color);
    }

    pub fn set_palette_color(&mut self, palette: PaletteColor) {
        self.tools.set_palette_color(palette);
    }

    pub fn set_brush_width(&mut self, width: u32) {
        self.tools.set_brush_width(width);
    }

    /// Whole-canvas clear, the only deletion the toolbar offers. Focus,
    /// highlight, and any pending drag anchor go with the primitives.
    pub fn clear_canvas(&mut self) {
        self.canvas.clear_all();
        self.focused_text = None;
        self.highlight = None;
        self.drag_anchor = None;
        tracing::debug!("canvas cleared");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_starts_with_brush_and_empty_canvas() {
        let session = PaintSession::new(1280, 720);
        assert_eq!(session.tools().active_tool(), ToolKind::Brush);
        assert_eq!(session.tools().brush_width(), DEFAULT_BRUSH_WIDTH);
        assert_eq!(session.tools().color(), PaletteColor::Black.color());
        assert!(session.canvas().is_empty());
        assert_eq!(session.focused_text_id(), None);
        assert_eq!(session.highlight_id(), None);
        assert_eq!(session.canvas().width(), 1280);
        assert_eq!(session.canvas().height(), 720);
    }

    #[test]
    fn clear_canvas_drops_primitives_focus_and_highlight() {
        let mut session = PaintSession::new(1280, 720);
        session.set_tool(ToolKind::Text);
        session.handle_pointer(crate::input::PointerEvent::Down {
            at: CanvasPoint::new(40, 40),
        });
        session.handle_pointer(crate::input::PointerEvent::DoubleClick {
            at: CanvasPoint::new(44, 44),
            button: crate::input::PointerButton::Secondary,
        });
        assert!(session.focused_text_id().is_some());
        assert!(session.highlight_id().is_some());

        session.clear_canvas();
        assert!(session.canvas().is_empty());
        assert_eq!(session.focused_text_id(), None);
        assert_eq!(session.highlight_id(), None);
    }
}
