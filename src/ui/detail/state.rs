use crate::api::Product;
use crate::ui::fetch::FetchState;
use crate::ui::mvi::UiState;

/// State of the product detail screen.
///
/// `product_id` is the last id a request was issued for; the app compares it
/// against the navigated id and re-fetches whenever they differ.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DetailState {
    pub product_id: String,
    pub fetch: FetchState<Product>,
}

impl UiState for DetailState {}
