//! Reducer for the products listing.

use crate::ui::mvi::Reducer;

use super::intent::ProductsIntent;
use super::state::ProductsState;

/// Pure state transitions for the listing; issuing the actual request is the
/// caller's side effect around the dispatch.
pub struct ProductsReducer;

impl Reducer for ProductsReducer {
    type State = ProductsState;
    type Intent = ProductsIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ProductsIntent::FetchStarted { request } => ProductsState {
                fetch: state.fetch.begin(request),
                selected: 0,
            },
            ProductsIntent::FetchFinished { request, outcome } => ProductsState {
                fetch: state.fetch.resolve(request, outcome),
                selected: state.selected,
            },
            ProductsIntent::MoveUp => ProductsState {
                selected: state.selected.saturating_sub(1),
                ..state
            },
            ProductsIntent::MoveDown => {
                let last = state
                    .fetch
                    .payload()
                    .map(|p| p.len().saturating_sub(1))
                    .unwrap_or(0);
                ProductsState {
                    selected: (state.selected + 1).min(last),
                    ..state
                }
            }
            ProductsIntent::Reset => ProductsState::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Product;
    use crate::ui::fetch::FetchState;

    fn products(n: usize) -> Vec<Product> {
        (0..n)
            .map(|i| Product {
                id: i as i64,
                title: format!("Product {}", i),
                ..Product::default()
            })
            .collect()
    }

    #[test]
    fn fetch_started_enters_loading_and_resets_cursor() {
        let state = ProductsState {
            fetch: FetchState::Success {
                payload: products(3),
            },
            selected: 2,
        };
        let new = ProductsReducer::reduce(state, ProductsIntent::FetchStarted { request: 1 });
        assert!(new.fetch.is_loading());
        assert_eq!(new.selected, 0);
    }

    #[test]
    fn matching_finish_stores_payload() {
        let state = ProductsReducer::reduce(
            ProductsState::default(),
            ProductsIntent::FetchStarted { request: 1 },
        );
        let new = ProductsReducer::reduce(
            state,
            ProductsIntent::FetchFinished {
                request: 1,
                outcome: Ok(products(2)),
            },
        );
        assert_eq!(new.fetch.payload().map(Vec::len), Some(2));
    }

    #[test]
    fn stale_finish_is_ignored() {
        let state = ProductsReducer::reduce(
            ProductsState::default(),
            ProductsIntent::FetchStarted { request: 2 },
        );
        let new = ProductsReducer::reduce(
            state,
            ProductsIntent::FetchFinished {
                request: 1,
                outcome: Ok(products(5)),
            },
        );
        assert!(new.fetch.is_loading());
    }

    #[test]
    fn cursor_stops_at_last_row() {
        let state = ProductsState {
            fetch: FetchState::Success {
                payload: products(2),
            },
            selected: 1,
        };
        let new = ProductsReducer::reduce(state, ProductsIntent::MoveDown);
        assert_eq!(new.selected, 1);
    }

    #[test]
    fn cursor_stops_at_first_row() {
        let state = ProductsState {
            fetch: FetchState::Success {
                payload: products(2),
            },
            selected: 0,
        };
        let new = ProductsReducer::reduce(state, ProductsIntent::MoveUp);
        assert_eq!(new.selected, 0);
    }

    #[test]
    fn selected_product_matches_cursor() {
        let state = ProductsState {
            fetch: FetchState::Success {
                payload: products(3),
            },
            selected: 1,
        };
        assert_eq!(
            state.selected_product().map(|p| p.title.as_str()),
            Some("Product 1")
        );
    }
}
