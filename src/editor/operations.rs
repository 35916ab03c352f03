use super::*;
use crate::canvas::TEXT_GLYPH_WIDTH;
use crate::geometry::CanvasBounds;
use crate::input::{
    resolve_text_input, CursorMove, PointerButton, PointerEvent, TextInputAction, TextInputEvent,
};

impl PaintSession {
    /// Routes one pointer event. Events are processed strictly in arrival
    /// order; each maps to at most one canvas mutation.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down { at } => self.pointer_down(at),
            PointerEvent::Move { at, primary_held } => self.pointer_move(at, primary_held),
            PointerEvent::Up { at } => self.pointer_up(at),
            PointerEvent::DoubleClick { at, button } => self.double_click(at, button),
        }
    }

    fn pointer_down(&mut self, at: CanvasPoint) {
        // A click on the focused text item repositions its cursor instead
        // of drawing; focus is not released.
        if let Some(text_id) = self.focused_text {
            let hit = self
                .canvas
                .text_bounds(text_id)
                .is_some_and(|bounds| bounds.contains(at));
            if hit {
                if let Some(text) = self.canvas.get_text_mut(text_id) {
                    let index = text.cursor_index_near(at.x - text.x, TEXT_GLYPH_WIDTH);
                    text.set_cursor(index);
                }
                return;
            }
        }

        match self.tools.active_tool() {
            // The brush stamps on motion with the button held, never on
            // the press itself.
            ToolKind::Brush => {}
            ToolKind::Rectangle | ToolKind::Oval => {
                self.drag_anchor = Some(at);
            }
            ToolKind::Text => {
                let id = self.canvas.push_text(at);
                tracing::debug!(id, x = at.x, y = at.y, "placed text item");
            }
        }
    }

    fn pointer_move(&mut self, at: CanvasPoint, primary_held: bool) {
        if !primary_held || self.tools.active_tool() != ToolKind::Brush {
            return;
        }
        // One stamp per motion sample. Fast motion leaves gaps between
        // stamps; that matches the stroke's stamped rendering model.
        let radius = self.tools.brush_width();
        let radius_i = i32::try_from(radius).unwrap_or(i32::MAX);
        let bounds = CanvasBounds::new(
            at.x.saturating_sub(radius_i),
            at.y.saturating_sub(radius_i),
            radius.saturating_mul(2),
            radius.saturating_mul(2),
        );
        self.canvas.push_oval(bounds, self.tools.color(), 1, true);
    }

    fn pointer_up(&mut self, at: CanvasPoint) {
        let Some(anchor) = self.drag_anchor.take() else {
            return;
        };
        let bounds = CanvasBounds::from_corners(anchor, at);
        match self.tools.active_tool() {
            ToolKind::Rectangle => {
                let id = self
                    .canvas
                    .push_rectangle(bounds, self.tools.color(), self.tools.brush_width());
                tracing::debug!(id, ?bounds, "committed rectangle");
            }
            ToolKind::Oval => {
                let id = self.canvas.push_oval(
                    bounds,
                    self.tools.color(),
                    self.tools.brush_width(),
                    false,
                );
                tracing::debug!(id, ?bounds, "committed oval");
            }
            // The anchor is stale if the tool changed mid-drag.
            ToolKind::Brush | ToolKind::Text => {}
        }
    }

    fn double_click(&mut self, at: CanvasPoint, button: PointerButton) {
        if button != PointerButton::Secondary {
            return;
        }
        let Some(text_id) = self.canvas.text_at(at) else {
            return;
        };
        // Focus is exclusive: an outgoing item leaves Focused with no
        // selection behind.
        if let Some(previous_id) = self.focused_text {
            if previous_id != text_id {
                if let Some(previous) = self.canvas.get_text_mut(previous_id) {
                    previous.clear_selection();
                }
            }
        }
        if let Some(text) = self.canvas.get_text_mut(text_id) {
            text.select_all();
        }
        self.focused_text = Some(text_id);
        self.refresh_highlight();
        tracing::debug!(id = text_id, "text item focused");
    }

    /// Applies a keyboard event to the focused text item. Without focus
    /// every event is a no-op (`NoTextTarget`); a clamped cursor move
    /// reports `NoAction`.
    pub fn apply_text_input(&mut self, event: TextInputEvent) -> TextInputAction {
        let action = resolve_text_input(event, self.focused_text.is_some());

        let target_id = match self.focused_text {
            Some(text_id) => text_id,
            None => return action,
        };

        if self.canvas.get_text(target_id).is_none() {
            // Stale focus, e.g. after an external clear.
            self.release_focus();
            return TextInputAction::NoTextTarget;
        }

        match action {
            TextInputAction::InsertCharacter(c) => {
                if let Some(text) = self.canvas.get_text_mut(target_id) {
                    text.insert_char(c);
                }
                self.refresh_highlight();
                TextInputAction::InsertCharacter(c)
            }
            TextInputAction::DeleteBackward => {
                let deleted = self
                    .canvas
                    .get_text_mut(target_id)
                    .is_some_and(TextItem::delete_backward);
                self.refresh_highlight();
                if deleted {
                    TextInputAction::DeleteBackward
                } else {
                    TextInputAction::NoAction
                }
            }
            TextInputAction::MoveCursor(movement) => {
                let moved = self
                    .canvas
                    .get_text_mut(target_id)
                    .is_some_and(|text| match movement {
                        CursorMove::Left => text.cursor_left(),
                        CursorMove::Right => text.cursor_right(),
                        CursorMove::LineStart => {
                            text.cursor_home();
                            true
                        }
                        CursorMove::LineEnd => {
                            text.cursor_end();
                            true
                        }
                    });
                if moved {
                    TextInputAction::MoveCursor(movement)
                } else {
                    TextInputAction::NoAction
                }
            }
            TextInputAction::Commit => {
                self.release_focus();
                tracing::debug!(id = target_id, "text item committed");
                TextInputAction::Commit
            }
            TextInputAction::NoTextTarget | TextInputAction::NoAction => action,
        }
    }

    /// Focused -> Unfocused: drops focus ownership, removes the highlight,
    /// and clears any selection left on the item.
    fn release_focus(&mut self) {
        if let Some(text_id) = self.focused_text.take() {
            if let Some(text) = self.canvas.get_text_mut(text_id) {
                text.clear_selection();
            }
        }
        if let Some(highlight_id) = self.highlight.take() {
            self.canvas.remove(highlight_id);
        }
    }

    /// Sizes the highlight to the focused item's bounds plus the fixed
    /// margin; creates it just behind the item when absent, repositions it
    /// otherwise.
    fn refresh_highlight(&mut self) {
        let Some(text_id) = self.focused_text else {
            return;
        };
        let Some(bounds) = self.canvas.text_bounds(text_id) else {
            self.release_focus();
            return;
        };
        let bounds = bounds.expanded(HIGHLIGHT_MARGIN);

        if let Some(highlight_id) = self.highlight {
            if self.canvas.reposition(highlight_id, bounds).is_ok() {
                return;
            }
            self.highlight = None;
        }
        self.highlight = self.canvas.insert_highlight_behind(text_id, bounds).ok();
    }
}
