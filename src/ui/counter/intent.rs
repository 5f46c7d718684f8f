use crate::ui::counter::state::Control;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterIntent {
    Increment,
    Decrement,
    Reset,
    FocusNext,
    FocusPrev,
    /// Move focus without pressing.
    Focus(Control),
    /// Press the focused control.
    Activate,
    /// Focus a control and press it (mouse click).
    Press(Control),
}

impl Intent for CounterIntent {}

impl From<Control> for CounterIntent {
    fn from(control: Control) -> Self {
        match control {
            Control::Decrement => CounterIntent::Decrement,
            Control::Increment => CounterIntent::Increment,
            Control::Reset => CounterIntent::Reset,
        }
    }
}
