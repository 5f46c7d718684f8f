/// Marker trait for intent objects.
///
/// An intent is what the user asked for (press "+", move focus), decoupled
/// from the key or mouse event that carried it.
pub trait Intent: Send + 'static {}
