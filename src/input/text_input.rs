#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextInputEvent {
    Character(char),
    Backspace,
    Enter,
    Left,
    Right,
    Home,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMove {
    Left,
    Right,
    LineStart,
    LineEnd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextInputAction {
    InsertCharacter(char),
    DeleteBackward,
    MoveCursor(CursorMove),
    Commit,
    NoTextTarget,
    NoAction,
}

/// Pure resolution of a keyboard event against the current focus state.
/// Only printable characters (U+0020 and above) insert; control characters
/// outside the explicitly bound keys are ignored.
pub fn resolve_text_input(event: TextInputEvent, focus_active: bool) -> TextInputAction {
    if !focus_active {
        return TextInputAction::NoTextTarget;
    }

    match event {
        TextInputEvent::Character(c) if c >= ' ' => TextInputAction::InsertCharacter(c),
        TextInputEvent::Character(_) => TextInputAction::NoAction,
        TextInputEvent::Backspace => TextInputAction::DeleteBackward,
        TextInputEvent::Enter => TextInputAction::Commit,
        TextInputEvent::Left => TextInputAction::MoveCursor(CursorMove::Left),
        TextInputEvent::Right => TextInputAction::MoveCursor(CursorMove::Right),
        TextInputEvent::Home => TextInputAction::MoveCursor(CursorMove::LineStart),
        TextInputEvent::End => TextInputAction::MoveCursor(CursorMove::LineEnd),
    }
}
