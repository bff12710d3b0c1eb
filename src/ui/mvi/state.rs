/// Marker trait for reducer-owned state. Cloned to produce the next state,
/// compared to detect changes.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
