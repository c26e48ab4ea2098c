//! Reducer for the create-product form.

use crate::ui::mvi::Reducer;

use super::intent::EditorIntent;
use super::state::{EditorField, EditorState, SubmitState};

/// Pure transitions for the form; issuing the create request and scheduling
/// the post-create navigation happen in the caller around the dispatch.
pub struct EditorReducer;

impl Reducer for EditorReducer {
    type State = EditorState;
    type Intent = EditorIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            EditorIntent::Input(ch) => {
                if state.is_submitting() {
                    return state;
                }
                let mut state = state;
                field_mut(&mut state).push(ch);
                state
            }
            EditorIntent::Backspace => {
                if state.is_submitting() {
                    return state;
                }
                let mut state = state;
                field_mut(&mut state).pop();
                state
            }
            EditorIntent::FocusNext => EditorState {
                focused: state.focused.next(),
                ..state
            },
            EditorIntent::FocusPrev => EditorState {
                focused: state.focused.prev(),
                ..state
            },
            EditorIntent::SubmitRejected { message } => EditorState {
                submit: SubmitState::Error { message },
                ..state
            },
            EditorIntent::SubmitStarted { request } => EditorState {
                submit: SubmitState::Submitting { request },
                ..state
            },
            EditorIntent::SubmitFinished { request, outcome } => match state.submit {
                SubmitState::Submitting { request: current } if current == request => {
                    let submit = match outcome {
                        Ok(created) => SubmitState::Created {
                            id: created.id,
                            navigate: request,
                        },
                        Err(message) => SubmitState::Error { message },
                    };
                    EditorState { submit, ..state }
                }
                _ => state,
            },
            EditorIntent::Reset => EditorState::default(),
        }
    }
}

fn field_mut(state: &mut EditorState) -> &mut String {
    match state.focused {
        EditorField::Title => &mut state.title,
        EditorField::Price => &mut state.price,
        EditorField::Image => &mut state.image,
    }
}
