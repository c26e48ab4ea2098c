//! Remote resource client: one HTTP call per view activation or user action.
//!
//! The client carries no cache, no retry policy, and no de-duplication;
//! superseding an in-flight request is handled by the UI layer through
//! request generations.

mod client;
mod error;
mod types;

pub use client::ApiClient;
pub use error::ApiError;
pub use types::{CreatedProduct, NewProduct, Product, WeatherReport};
