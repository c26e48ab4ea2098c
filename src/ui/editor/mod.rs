mod intent;
mod reducer;
mod state;
mod validate;
mod view;

pub use intent::EditorIntent;
pub use reducer::EditorReducer;
pub use state::{EditorField, EditorState, SubmitState};
pub use validate::{validate, ValidationError, PLACEHOLDER_IMAGE};
pub use view::render;
