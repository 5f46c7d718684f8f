use crate::ui::counter::intent::CounterIntent;
use crate::ui::counter::state::{Control, CounterState};
use crate::ui::mvi::Reducer;

pub struct CounterReducer;

impl Reducer for CounterReducer {
    type State = CounterState;
    type Intent = CounterIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CounterIntent::Increment => press(state, Control::Increment),
            CounterIntent::Decrement => press(state, Control::Decrement),
            CounterIntent::Reset => press(state, Control::Reset),
            CounterIntent::FocusNext => {
                let focus = state.focus().next();
                state.with_focus(focus)
            }
            CounterIntent::FocusPrev => {
                let focus = state.focus().prev();
                state.with_focus(focus)
            }
            CounterIntent::Focus(control) => state.with_focus(control),
            CounterIntent::Activate => press(state, state.focus()),
            CounterIntent::Press(control) => press(state.with_focus(control), control),
        }
    }
}

// Value changes leave focus alone.
fn press(state: CounterState, control: Control) -> CounterState {
    let value = control.apply(state.value());
    state.with_value(value)
}
