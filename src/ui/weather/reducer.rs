//! Reducer for the weather lookup screen.

use crate::ui::mvi::Reducer;

use super::intent::WeatherIntent;
use super::state::WeatherState;

pub struct WeatherReducer;

impl Reducer for WeatherReducer {
    type State = WeatherState;
    type Intent = WeatherIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            WeatherIntent::Input(ch) => {
                let mut state = state;
                state.city.push(ch);
                state
            }
            WeatherIntent::Backspace => {
                let mut state = state;
                state.city.pop();
                state
            }
            WeatherIntent::FetchStarted { request } => WeatherState {
                fetch: state.fetch.begin(request),
                ..state
            },
            WeatherIntent::FetchFinished { request, outcome } => WeatherState {
                fetch: state.fetch.resolve(request, outcome),
                ..state
            },
            WeatherIntent::Reset => WeatherState::default(),
        }
    }
}
