//! Per-view fetch lifecycle: `Idle → Loading → Success | Error`.
//!
//! Each view owns one `FetchState` slot per logical request. Requests carry a
//! generation id allocated by the app; a completion whose id does not match
//! the slot's current in-flight id is discarded, so a superseded or abandoned
//! request can never overwrite newer state (last-writer-wins).
//!
//! The machine has no terminal state: from `Success` or `Error` a new
//! trigger (remount, parameter change, explicit user action) re-enters
//! `Loading` via `begin`.

/// Tri-state outcome of a single remote call, tagged with the request
/// generation while in flight.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState<T> {
    /// No request issued yet for this slot.
    #[default]
    Idle,
    /// A request is in flight. `request` identifies it; only the matching
    /// completion may resolve this state.
    Loading { request: u64 },
    /// The request completed and the payload decoded.
    Success { payload: T },
    /// The request failed; `message` is rendered inline at the view.
    Error { message: String },
}

impl<T> FetchState<T> {
    /// Enter `Loading` for a new request, clearing any previous payload or
    /// message. Valid from every state.
    pub fn begin(self, request: u64) -> Self {
        FetchState::Loading { request }
    }

    /// Resolve the in-flight request.
    ///
    /// Only a completion for the currently loading generation transitions the
    /// state; anything else (stale completion, completion while idle or
    /// already resolved) is ignored.
    pub fn resolve(self, request: u64, outcome: Result<T, String>) -> Self {
        match self {
            FetchState::Loading { request: current } if current == request => match outcome {
                Ok(payload) => FetchState::Success { payload },
                Err(message) => FetchState::Error { message },
            },
            other => other,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading { .. })
    }

    pub fn payload(&self) -> Option<&T> {
        match self {
            FetchState::Success { payload } => Some(payload),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Error { message } => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_clears_previous_payload() {
        let state = FetchState::Success { payload: 7 };
        let state = state.begin(2);
        assert_eq!(state, FetchState::Loading { request: 2 });
        assert!(state.payload().is_none());
    }

    #[test]
    fn begin_clears_previous_error() {
        let state: FetchState<i32> = FetchState::Error {
            message: "boom".to_string(),
        };
        let state = state.begin(3);
        assert!(state.is_loading());
        assert!(state.error().is_none());
    }

    #[test]
    fn matching_success_resolves() {
        let state = FetchState::Idle.begin(1).resolve(1, Ok(41));
        assert_eq!(state.payload(), Some(&41));
    }

    #[test]
    fn matching_failure_resolves_to_error() {
        let state: FetchState<i32> = FetchState::Idle.begin(1).resolve(1, Err("down".to_string()));
        assert_eq!(state.error(), Some("down"));
    }

    #[test]
    fn stale_completion_is_discarded() {
        // Request 1 superseded by request 2; request 1's late result must
        // not overwrite the newer loading state.
        let state = FetchState::Idle.begin(1).begin(2).resolve(1, Ok(99));
        assert_eq!(state, FetchState::Loading { request: 2 });
    }

    #[test]
    fn completion_after_resolution_is_discarded() {
        let state = FetchState::Idle.begin(1).resolve(1, Ok(5));
        let state = state.resolve(1, Err("late".to_string()));
        assert_eq!(state.payload(), Some(&5));
    }

    #[test]
    fn completion_while_idle_is_discarded() {
        let state: FetchState<i32> = FetchState::Idle.resolve(1, Ok(5));
        assert_eq!(state, FetchState::Idle);
    }

    #[test]
    fn success_and_error_are_mutually_exclusive() {
        let state = FetchState::Idle.begin(1).resolve(1, Ok(5));
        assert!(state.error().is_none());
        let state = state.begin(2).resolve(2, Err("down".to_string()));
        assert!(state.payload().is_none());
        assert!(!state.is_loading());
    }
}
