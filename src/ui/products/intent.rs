use crate::api::Product;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ProductsIntent {
    /// A listing request was issued.
    FetchStarted { request: u64 },
    /// The request completed; ignored unless `request` is the live one.
    FetchFinished {
        request: u64,
        outcome: Result<Vec<Product>, String>,
    },
    MoveUp,
    MoveDown,
    /// View dismantled; drop everything.
    Reset,
}

impl Intent for ProductsIntent {}
