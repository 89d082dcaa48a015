/// Marker trait for store state.
///
/// `Default` is the state before anything was requested; reducers take the
/// state by value, so the dispatcher swaps it out with `std::mem::take`.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
