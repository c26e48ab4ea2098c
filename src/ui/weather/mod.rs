mod intent;
mod reducer;
mod state;
mod view;

pub use intent::WeatherIntent;
pub use reducer::WeatherReducer;
pub use state::WeatherState;
pub use view::render;
