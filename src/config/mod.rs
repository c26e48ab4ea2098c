//! Endpoint configuration for the remote APIs the UI talks to.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, Endpoints};

/// Environment variable holding the weather API key.
///
/// Read at call time, never validated for presence: a missing key goes out
/// as an empty `appid` and surfaces as an ordinary request failure.
pub const WEATHER_API_KEY_ENV: &str = "STOREFRONT_WEATHER_API_KEY";
