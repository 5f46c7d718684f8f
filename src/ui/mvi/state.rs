/// Marker trait for UI state objects.
///
/// `Default` is the first-render state; `PartialEq` lets the loop and the
/// tests compare snapshots.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
