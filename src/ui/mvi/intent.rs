/// Marker trait for intents: key presses, dialog close requests,
/// provider callbacks.
pub trait Intent: Send + 'static {}
