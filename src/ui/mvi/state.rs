//! Base trait for UI state in MVI architecture.

/// Marker trait for per-screen state objects.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (everything the screen needs to render)
/// - Comparable (PartialEq for detecting changes)
///
/// `Default` is the dismantled state a screen returns to when the user
/// navigates away.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
