use crate::ui::mvi::UiState;

/// One of the three on-screen buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Control {
    Decrement,
    #[default]
    Increment,
    Reset,
}

impl Control {
    /// Left to right, then the reset button beneath.
    pub const ALL: [Control; 3] = [Control::Decrement, Control::Increment, Control::Reset];

    pub fn label(self) -> &'static str {
        match self {
            Control::Decrement => "\u{2212}",
            Control::Increment => "+",
            Control::Reset => "Reset",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Control::Decrement => Control::Increment,
            Control::Increment => Control::Reset,
            Control::Reset => Control::Decrement,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Control::Decrement => Control::Reset,
            Control::Increment => Control::Decrement,
            Control::Reset => Control::Increment,
        }
    }

    /// The value after pressing this control. Saturates at the `i64` bounds.
    pub fn apply(self, value: i64) -> i64 {
        match self {
            Control::Decrement => value.saturating_sub(1),
            Control::Increment => value.saturating_add(1),
            Control::Reset => 0,
        }
    }
}

/// The counter widget: its value and which button has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CounterState {
    value: i64,
    focus: Control,
}

impl UiState for CounterState {}

impl CounterState {
    /// State showing `value`, focus on the default control.
    pub fn at(value: i64) -> Self {
        Self {
            value,
            ..Self::default()
        }
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn focus(&self) -> Control {
        self.focus
    }

    /// Exactly the decimal representation of the value.
    pub fn display(&self) -> String {
        self.value.to_string()
    }

    pub(super) fn with_value(self, value: i64) -> Self {
        Self { value, ..self }
    }

    pub(super) fn with_focus(self, focus: Control) -> Self {
        Self { focus, ..self }
    }
}
