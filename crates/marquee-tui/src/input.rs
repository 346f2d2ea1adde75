use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    FocusNext,
    FocusPrev,
    Increment,
    Decrement,
    PageIncrement,
    PageDecrement,
    ToMin,
    ToMax,
    ToggleOffset,
    /// Left button pressed at (column, row)
    PointerDown(u16, u16),
    /// Left button dragged to (column, row)
    PointerDrag(u16, u16),
    /// Left button released at (column, row)
    PointerUp(u16, u16),
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        // Quit
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Esc, _) => Action::Quit,

        // Slider focus
        (KeyCode::Tab, _) => Action::FocusNext,
        (KeyCode::BackTab, _) => Action::FocusPrev,
        (KeyCode::Down, KeyModifiers::NONE) => Action::FocusNext,
        (KeyCode::Up, KeyModifiers::NONE) => Action::FocusPrev,
        (KeyCode::Char('j'), KeyModifiers::NONE) => Action::FocusNext,
        (KeyCode::Char('k'), KeyModifiers::NONE) => Action::FocusPrev,

        // Adjust focused slider
        (KeyCode::Right, KeyModifiers::NONE) => Action::Increment,
        (KeyCode::Left, KeyModifiers::NONE) => Action::Decrement,
        (KeyCode::Char('l'), KeyModifiers::NONE) => Action::Increment,
        (KeyCode::Char('h'), KeyModifiers::NONE) => Action::Decrement,
        (KeyCode::PageUp, _) => Action::PageIncrement,
        (KeyCode::PageDown, _) => Action::PageDecrement,
        (KeyCode::Home, _) => Action::ToMin,
        (KeyCode::End, _) => Action::ToMax,

        (KeyCode::Char('o'), KeyModifiers::NONE) => Action::ToggleOffset,

        _ => Action::None,
    }
}

/// Handle a mouse event; only the left button takes part in gestures
pub fn handle_mouse_event(mouse: MouseEvent) -> Action {
    let (column, row) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Action::PointerDown(column, row),
        MouseEventKind::Drag(MouseButton::Left) => Action::PointerDrag(column, row),
        MouseEventKind::Up(MouseButton::Left) => Action::PointerUp(column, row),
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventKind;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(handle_key_event(key(KeyCode::Char('q'), KeyModifiers::NONE)), Action::Quit);
        assert_eq!(handle_key_event(key(KeyCode::Char('c'), KeyModifiers::CONTROL)), Action::Quit);
        assert_eq!(handle_key_event(key(KeyCode::Esc, KeyModifiers::NONE)), Action::Quit);
    }

    #[test]
    fn test_slider_keys() {
        assert_eq!(handle_key_event(key(KeyCode::Tab, KeyModifiers::NONE)), Action::FocusNext);
        assert_eq!(handle_key_event(key(KeyCode::BackTab, KeyModifiers::SHIFT)), Action::FocusPrev);
        assert_eq!(handle_key_event(key(KeyCode::Right, KeyModifiers::NONE)), Action::Increment);
        assert_eq!(handle_key_event(key(KeyCode::Char('h'), KeyModifiers::NONE)), Action::Decrement);
        assert_eq!(handle_key_event(key(KeyCode::End, KeyModifiers::NONE)), Action::ToMax);
        assert_eq!(handle_key_event(key(KeyCode::Char('x'), KeyModifiers::NONE)), Action::None);
    }

    #[test]
    fn test_press_kind_is_default() {
        assert_eq!(key(KeyCode::Char('o'), KeyModifiers::NONE).kind, KeyEventKind::Press);
        assert_eq!(handle_key_event(key(KeyCode::Char('o'), KeyModifiers::NONE)), Action::ToggleOffset);
    }

    #[test]
    fn test_mouse_gestures() {
        assert_eq!(
            handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), 4, 2)),
            Action::PointerDown(4, 2)
        );
        assert_eq!(
            handle_mouse_event(mouse(MouseEventKind::Drag(MouseButton::Left), 9, 3)),
            Action::PointerDrag(9, 3)
        );
        assert_eq!(
            handle_mouse_event(mouse(MouseEventKind::Up(MouseButton::Left), 1, 3)),
            Action::PointerUp(1, 3)
        );
        assert_eq!(
            handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Right), 1, 1)),
            Action::None
        );
        assert_eq!(handle_mouse_event(mouse(MouseEventKind::Moved, 1, 1)), Action::None);
    }
}
