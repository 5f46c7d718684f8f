use crate::ui::counter::{Control, CounterIntent, CounterReducer, CounterState};
use crate::ui::layout::{body_rect, CounterLayout};
use crate::ui::mvi::Reducer;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    title: String,
    /// Full terminal size, used to locate the buttons for mouse clicks.
    size: Option<(u16, u16)>,
    /// The counter widget (MVI pattern).
    counter: CounterState,
}

impl App {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            should_quit: false,
            title: title.into(),
            size: None,
            counter: CounterState::default(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn counter(&self) -> &CounterState {
        &self.counter
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
    }

    pub fn dispatch(&mut self, intent: CounterIntent) {
        let before = self.counter.value();
        dispatch_mvi!(self, counter, CounterReducer, intent);
        tracing::debug!(
            ?intent,
            before,
            after = self.counter.value(),
            focus = ?self.counter.focus(),
            "Counter intent applied"
        );
    }

    /// Geometry of the counter as last drawn, if the terminal size is known.
    pub fn counter_layout(&self) -> Option<CounterLayout> {
        let (cols, rows) = self.size?;
        let body = body_rect(Rect::new(0, 0, cols, rows));
        Some(CounterLayout::compute(body, &self.counter.display()))
    }

    /// A left click on a button presses it. Returns the pressed control.
    pub fn on_mouse(&mut self, mouse: MouseEvent) -> Option<Control> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return None;
        }
        let control = self
            .counter_layout()?
            .control_at(mouse.column, mouse.row)?;
        self.dispatch(CounterIntent::Press(control));
        Some(control)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn starts_at_zero_and_running() {
        let app = App::new("Counter");
        assert_eq!(app.counter().value(), 0);
        assert!(!app.should_quit());
        assert_eq!(app.title(), "Counter");
    }

    #[test]
    fn dispatch_updates_counter() {
        let mut app = App::new("Counter");
        app.dispatch(CounterIntent::Increment);
        app.dispatch(CounterIntent::Increment);
        app.dispatch(CounterIntent::Decrement);
        assert_eq!(app.counter().value(), 1);
    }

    #[test]
    fn click_without_known_size_is_ignored() {
        let mut app = App::new("Counter");
        assert_eq!(app.on_mouse(click(10, 10)), None);
        assert_eq!(app.counter().value(), 0);
    }

    #[test]
    fn clicking_buttons_presses_them() {
        let mut app = App::new("Counter");
        app.on_resize(80, 24);
        let layout = app.counter_layout().unwrap();

        let inc = layout.increment;
        assert_eq!(app.on_mouse(click(inc.x + 1, inc.y + 1)), Some(Control::Increment));
        assert_eq!(app.on_mouse(click(inc.x + 1, inc.y + 1)), Some(Control::Increment));
        assert_eq!(app.counter().value(), 2);

        let reset = layout.reset;
        assert_eq!(app.on_mouse(click(reset.x + 2, reset.y + 1)), Some(Control::Reset));
        assert_eq!(app.counter().value(), 0);
        assert_eq!(app.counter().focus(), Control::Reset);
    }

    #[test]
    fn clicks_outside_buttons_and_other_buttons_do_nothing() {
        let mut app = App::new("Counter");
        app.on_resize(80, 24);
        let layout = app.counter_layout().unwrap();
        let dec = layout.decrement;

        assert_eq!(app.on_mouse(click(0, 0)), None);
        assert_eq!(app.on_mouse(click(layout.value.x + 1, layout.value.y + 1)), None);

        let mut right_click = click(dec.x + 1, dec.y + 1);
        right_click.kind = MouseEventKind::Down(MouseButton::Right);
        assert_eq!(app.on_mouse(right_click), None);

        let mut release = click(dec.x + 1, dec.y + 1);
        release.kind = MouseEventKind::Up(MouseButton::Left);
        assert_eq!(app.on_mouse(release), None);

        assert_eq!(app.counter().value(), 0);
    }
}
