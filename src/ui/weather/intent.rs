use crate::api::WeatherReport;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum WeatherIntent {
    /// Character typed into the city field.
    Input(char),
    Backspace,
    /// A lookup was issued for the current city.
    FetchStarted { request: u64 },
    FetchFinished {
        request: u64,
        outcome: Result<WeatherReport, String>,
    },
    Reset,
}

impl Intent for WeatherIntent {}
