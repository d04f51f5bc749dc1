/// A lightweight, serializable snapshot of a column's committed interaction state.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`. Gesture
/// sessions and pending notifications are ephemeral and deliberately not captured.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColumnState {
    pub index: usize,
    pub offset: f64,
    pub duration_ms: u64,
    pub moving: bool,
}
