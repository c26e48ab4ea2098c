use crate::api::Product;
use crate::ui::fetch::FetchState;
use crate::ui::mvi::UiState;

/// State of the products listing screen.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductsState {
    pub fetch: FetchState<Vec<Product>>,
    /// Index of the highlighted row; meaningful only on `Success`.
    pub selected: usize,
}

impl UiState for ProductsState {}

impl ProductsState {
    /// Product currently under the cursor, if any.
    pub fn selected_product(&self) -> Option<&Product> {
        self.fetch.payload().and_then(|p| p.get(self.selected))
    }
}
