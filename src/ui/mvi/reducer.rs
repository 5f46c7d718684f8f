use super::intent::Intent;
use super::state::UiState;

/// The only place state transitions happen.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// Must be pure: no I/O, no clocks, same inputs give the same state.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;

    /// Applies intents left to right starting from `state`.
    fn fold<I>(state: Self::State, intents: I) -> Self::State
    where
        I: IntoIterator<Item = Self::Intent>,
    {
        intents.into_iter().fold(state, Self::reduce)
    }
}
