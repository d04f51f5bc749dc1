use core::fmt;

/// Axis a gesture has been classified into.
///
/// Classification is sticky: once a gesture locks to an axis it keeps it until the
/// pointer lifts. While a gesture is `Vertical`, the embedding layer is expected to
/// suppress the platform's default scroll/selection behavior.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Horizontal,
    Vertical,
}

/// Where a column currently is in its interaction cycle.
///
/// `Idle` is both the initial and the rest state. A touch-start enters `Dragging`
/// (also from mid-`Settling`, resuming at the rendered offset); a release enters
/// `Settling`; the transition-end signal returns to `Idle`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    Idle,
    Dragging,
    Settling,
}

/// The provided option entry type: display text plus a disabled flag.
///
/// Disabled options are never a valid resting index. Bare values convert via `From`:
///
/// ```
/// use pickwheel::PickerOption;
///
/// let plain: PickerOption = "Monday".into();
/// assert!(!plain.disabled);
/// ```
///
/// Columns are generic over the entry type, so richer option types can be used with
/// [`crate::ColumnOptions::new_with_text`] instead.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PickerOption {
    pub text: String,
    pub disabled: bool,
}

impl PickerOption {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            disabled: false,
        }
    }

    pub fn disabled(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            disabled: true,
        }
    }
}

impl From<&str> for PickerOption {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for PickerOption {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl fmt::Display for PickerOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
