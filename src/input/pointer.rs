use crate::geometry::CanvasPoint;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
}

/// Pointer events as delivered by the toolkit's event pump, in arrival
/// order. `Move` carries the primary-button state so a brush stroke only
/// stamps while the button is held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    Down { at: CanvasPoint },
    Move { at: CanvasPoint, primary_held: bool },
    Up { at: CanvasPoint },
    DoubleClick { at: CanvasPoint, button: PointerButton },
}
