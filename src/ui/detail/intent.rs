use crate::api::Product;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum DetailIntent {
    /// A request for `id` was issued. Supersedes any in-flight fetch.
    FetchStarted { id: String, request: u64 },
    FetchFinished {
        request: u64,
        outcome: Result<Product, String>,
    },
    Reset,
}

impl Intent for DetailIntent {}
