use crate::ui::app::App;
use crate::ui::counter::CounterIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press asks the application to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Key is not bound.
    None,
    Quit,
    Dispatch(CounterIntent),
}

pub fn map_key(key: KeyEvent) -> InputAction {
    if key.kind != KeyEventKind::Press {
        return InputAction::None;
    }

    if is_ctrl_char(key, 'c') {
        return InputAction::Quit;
    }
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return InputAction::None;
    }

    let intent = match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return InputAction::Quit,
        KeyCode::Char('+' | '=' | 'k') | KeyCode::Up | KeyCode::Right => CounterIntent::Increment,
        KeyCode::Char('-' | '_' | 'j') | KeyCode::Down | KeyCode::Left => CounterIntent::Decrement,
        KeyCode::Char('r' | 'R' | '0') => CounterIntent::Reset,
        KeyCode::Tab => CounterIntent::FocusNext,
        KeyCode::BackTab => CounterIntent::FocusPrev,
        KeyCode::Enter | KeyCode::Char(' ') => CounterIntent::Activate,
        _ => return InputAction::None,
    };
    InputAction::Dispatch(intent)
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> InputAction {
    let action = map_key(key);
    match action {
        InputAction::Quit => app.request_quit(),
        InputAction::Dispatch(intent) => app.dispatch(intent),
        InputAction::None => {}
    }
    action
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
