use crate::ui::mvi::UiState;

/// Form fields in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorField {
    #[default]
    Title,
    Price,
    Image,
}

impl EditorField {
    pub fn next(self) -> Self {
        match self {
            EditorField::Title => EditorField::Price,
            EditorField::Price => EditorField::Image,
            EditorField::Image => EditorField::Title,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            EditorField::Title => EditorField::Image,
            EditorField::Price => EditorField::Title,
            EditorField::Image => EditorField::Price,
        }
    }
}

/// Outcome slot for the submit action.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    /// Local validation or the create request failed; stay on the form.
    Error { message: String },
    /// Create request in flight; submit is disabled.
    Submitting { request: u64 },
    /// Created; navigation to the listing is scheduled under the same
    /// generation, so a reset editor ignores the late navigation event.
    Created { id: Option<i64>, navigate: u64 },
}

/// State of the create-product form. The draft is view-local and discarded
/// on navigation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EditorState {
    pub title: String,
    pub price: String,
    pub image: String,
    pub focused: EditorField,
    pub submit: SubmitState,
}

impl UiState for EditorState {}

impl EditorState {
    pub fn is_submitting(&self) -> bool {
        matches!(self.submit, SubmitState::Submitting { .. })
    }
}
