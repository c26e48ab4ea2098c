use crate::api::CreatedProduct;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum EditorIntent {
    /// Character typed into the focused field.
    Input(char),
    Backspace,
    FocusNext,
    FocusPrev,
    /// Validation failed locally; no request was issued.
    SubmitRejected { message: String },
    /// The create request was issued.
    SubmitStarted { request: u64 },
    /// The create request completed.
    SubmitFinished {
        request: u64,
        outcome: Result<CreatedProduct, String>,
    },
    /// View dismantled; discard the draft and any pending navigation.
    Reset,
}

impl Intent for EditorIntent {}
