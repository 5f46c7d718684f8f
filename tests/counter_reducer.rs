use counter_widget::ui::counter::{Control, CounterIntent, CounterReducer, CounterState};
use counter_widget::ui::mvi::Reducer;
use proptest::prelude::*;

fn run(start: CounterState, intents: &[CounterIntent]) -> CounterState {
    CounterReducer::fold(start, intents.iter().copied())
}

fn operation() -> impl Strategy<Value = CounterIntent> {
    prop_oneof![
        Just(CounterIntent::Increment),
        Just(CounterIntent::Decrement),
        Just(CounterIntent::Reset),
    ]
}

fn any_intent() -> impl Strategy<Value = CounterIntent> {
    prop_oneof![
        operation(),
        Just(CounterIntent::FocusNext),
        Just(CounterIntent::FocusPrev),
        Just(CounterIntent::Activate),
        prop::sample::select(Control::ALL.to_vec()).prop_map(CounterIntent::Focus),
        prop::sample::select(Control::ALL.to_vec()).prop_map(CounterIntent::Press),
    ]
}

#[test]
fn initial_value_is_zero() {
    assert_eq!(CounterState::default().display(), "0");
}

#[test]
fn increment_three_times_shows_three() {
    let state = run(CounterState::default(), &[CounterIntent::Increment; 3]);
    assert_eq!(state.display(), "3");
}

#[test]
fn decrement_twice_shows_minus_two() {
    let state = run(CounterState::default(), &[CounterIntent::Decrement; 2]);
    assert_eq!(state.display(), "-2");
}

#[test]
fn reset_from_five_shows_zero() {
    let state = CounterReducer::reduce(CounterState::at(5), CounterIntent::Reset);
    assert_eq!(state.display(), "0");
}

#[test]
fn mixed_sequence_ends_at_one() {
    let state = run(
        CounterState::default(),
        &[
            CounterIntent::Increment,
            CounterIntent::Increment,
            CounterIntent::Decrement,
            CounterIntent::Reset,
            CounterIntent::Increment,
        ],
    );
    assert_eq!(state.display(), "1");
}

#[test]
fn focus_intents_cycle_without_touching_value() {
    let state = CounterState::at(9);
    let state = CounterReducer::reduce(state, CounterIntent::FocusNext);
    assert_eq!(state.focus(), Control::Reset);
    let state = CounterReducer::reduce(state, CounterIntent::FocusNext);
    assert_eq!(state.focus(), Control::Decrement);
    let state = CounterReducer::reduce(state, CounterIntent::FocusPrev);
    assert_eq!(state.focus(), Control::Reset);
    assert_eq!(state.value(), 9);
}

proptest! {
    #[test]
    fn value_is_left_fold_of_operations(ops in prop::collection::vec(operation(), 0..200)) {
        let expected = ops.iter().fold(0i64, |acc, op| match op {
            CounterIntent::Increment => acc + 1,
            CounterIntent::Decrement => acc - 1,
            _ => 0,
        });
        let state = run(CounterState::default(), &ops);
        prop_assert_eq!(state.value(), expected);
        prop_assert_eq!(state.display(), expected.to_string());
    }

    #[test]
    fn reset_is_idempotent(start in -1_000_000i64..1_000_000) {
        let once = CounterReducer::reduce(CounterState::at(start), CounterIntent::Reset);
        prop_assert_eq!(once.value(), 0);
        let twice = CounterReducer::reduce(once, CounterIntent::Reset);
        prop_assert_eq!(twice.value(), 0);
    }

    #[test]
    fn increment_and_decrement_cancel(start in -1_000_000i64..1_000_000) {
        let state = CounterState::at(start);
        let up_down = run(state, &[CounterIntent::Increment, CounterIntent::Decrement]);
        let down_up = run(state, &[CounterIntent::Decrement, CounterIntent::Increment]);
        prop_assert_eq!(up_down.value(), start);
        prop_assert_eq!(down_up.value(), start);
    }

    #[test]
    fn focus_only_intents_never_change_value(
        start in any::<i64>(),
        moves in prop::collection::vec(
            prop_oneof![
                Just(CounterIntent::FocusNext),
                Just(CounterIntent::FocusPrev),
                prop::sample::select(Control::ALL.to_vec()).prop_map(CounterIntent::Focus),
            ],
            0..50,
        ),
    ) {
        let state = run(CounterState::at(start), &moves);
        prop_assert_eq!(state.value(), start);
    }

    #[test]
    fn any_sequence_keeps_display_in_sync(intents in prop::collection::vec(any_intent(), 0..200)) {
        let state = run(CounterState::default(), &intents);
        prop_assert_eq!(state.display(), state.value().to_string());
    }
}
