mod intent;
mod reducer;
mod state;
mod view;

pub use intent::ProductsIntent;
pub use reducer::ProductsReducer;
pub use state::ProductsState;
pub use view::render;
