use crate::api::WeatherReport;
use crate::ui::fetch::FetchState;
use crate::ui::mvi::UiState;

/// State of the weather lookup screen. The fetch is triggered only by an
/// explicit user action, never on mount.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WeatherState {
    pub city: String,
    pub fetch: FetchState<WeatherReport>,
}

impl UiState for WeatherState {}
