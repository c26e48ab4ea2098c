//! Reducer for the product detail screen.

use crate::ui::mvi::Reducer;

use super::intent::DetailIntent;
use super::state::DetailState;

pub struct DetailReducer;

impl Reducer for DetailReducer {
    type State = DetailState;
    type Intent = DetailIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DetailIntent::FetchStarted { id, request } => DetailState {
                product_id: id,
                fetch: state.fetch.begin(request),
            },
            DetailIntent::FetchFinished { request, outcome } => DetailState {
                fetch: state.fetch.resolve(request, outcome),
                ..state
            },
            DetailIntent::Reset => DetailState::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Product;

    fn product(id: i64, title: &str) -> Product {
        Product {
            id,
            title: title.to_string(),
            ..Product::default()
        }
    }

    #[test]
    fn fetch_started_records_id_and_clears_payload() {
        let state = DetailReducer::reduce(
            DetailState::default(),
            DetailIntent::FetchStarted {
                id: "1".to_string(),
                request: 1,
            },
        );
        let state = DetailReducer::reduce(
            state,
            DetailIntent::FetchFinished {
                request: 1,
                outcome: Ok(product(1, "Mug")),
            },
        );
        let state = DetailReducer::reduce(
            state,
            DetailIntent::FetchStarted {
                id: "2".to_string(),
                request: 2,
            },
        );
        assert_eq!(state.product_id, "2");
        assert!(state.fetch.is_loading());
        assert!(state.fetch.payload().is_none());
    }

    #[test]
    fn stale_result_for_previous_id_never_lands() {
        // Navigate to product 1, then to product 2 before 1 resolves.
        let state = DetailReducer::reduce(
            DetailState::default(),
            DetailIntent::FetchStarted {
                id: "1".to_string(),
                request: 1,
            },
        );
        let state = DetailReducer::reduce(
            state,
            DetailIntent::FetchStarted {
                id: "2".to_string(),
                request: 2,
            },
        );
        let state = DetailReducer::reduce(
            state,
            DetailIntent::FetchFinished {
                request: 1,
                outcome: Ok(product(1, "Old")),
            },
        );
        assert!(state.fetch.is_loading());

        let state = DetailReducer::reduce(
            state,
            DetailIntent::FetchFinished {
                request: 2,
                outcome: Ok(product(2, "New")),
            },
        );
        assert_eq!(state.fetch.payload().map(|p| p.title.as_str()), Some("New"));
    }

    #[test]
    fn failure_stores_message() {
        let state = DetailReducer::reduce(
            DetailState::default(),
            DetailIntent::FetchStarted {
                id: "9".to_string(),
                request: 1,
            },
        );
        let state = DetailReducer::reduce(
            state,
            DetailIntent::FetchFinished {
                request: 1,
                outcome: Err("Failed to fetch product details".to_string()),
            },
        );
        assert_eq!(state.fetch.error(), Some("Failed to fetch product details"));
    }
}
