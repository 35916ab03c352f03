mod pointer;
mod text_input;

pub use pointer::{PointerButton, PointerEvent};
pub use text_input::{resolve_text_input, CursorMove, TextInputAction, TextInputEvent};
