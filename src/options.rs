use std::sync::Arc;

use crate::column::Column;
use crate::types::PickerOption;

/// A callback fired when a column commits a user-driven selection change.
///
/// The second argument is the new option index. Programmatic `set_index`/`set_value`
/// calls commit silently and never reach this callback.
pub type OnChangeCallback<O> = Arc<dyn Fn(&Column<O>, usize) + Send + Sync>;

/// Extracts the display text for an option.
///
/// Returning `None` marks the entry as having no display-text field; the column then
/// falls back to the option's `Display` rendering. This is the seam for structured
/// option types keyed by an arbitrary field.
pub type OptionTextFn<O> = Arc<dyn Fn(&O) -> Option<String> + Send + Sync>;

/// Reports whether an option is disabled. Disabled options are never a valid resting
/// index.
pub type OptionDisabledFn<O> = Arc<dyn Fn(&O) -> bool + Send + Sync>;

/// Configuration for [`crate::Column`].
///
/// Cheap to clone: closure fields are stored in `Arc`s, so a picker can stamp out one
/// shared config across all of its columns.
pub struct ColumnOptions<O = PickerOption> {
    /// Height of one option row in pixels. Must be positive.
    pub item_height: f64,

    /// Number of rows the rendering layer shows; odd, so the committed selection sits
    /// in the middle row. Only used to derive the base rendering offset.
    pub visible_item_count: usize,

    /// Index committed when the column is created.
    pub default_index: usize,

    /// Settle duration for momentum flings, in milliseconds. Snap and click settles
    /// use [`crate::DEFAULT_DURATION_MS`] instead.
    pub swipe_duration_ms: u64,

    /// Passthrough for the rendering layer: render option text as raw markup instead
    /// of escaping it. The engine itself never interprets it.
    pub allow_markup: bool,

    pub option_text: OptionTextFn<O>,
    pub option_disabled: OptionDisabledFn<O>,

    /// Optional callback fired on committed user-driven selection changes, subject to
    /// the transition-deferral rule.
    pub on_change: Option<OnChangeCallback<O>>,
}

impl ColumnOptions<PickerOption> {
    /// Creates options for the provided [`PickerOption`] entry type.
    pub fn new(item_height: f64) -> Self {
        Self::new_with_text(item_height, |o: &PickerOption| Some(o.text.clone()), |o| {
            o.disabled
        })
    }
}

impl<O> ColumnOptions<O> {
    /// Creates options with custom text/disabled extraction.
    ///
    /// Use this for structured option types: `option_text` plays the role of a value
    /// key, and may return `None` for entries missing the display field.
    pub fn new_with_text(
        item_height: f64,
        option_text: impl Fn(&O) -> Option<String> + Send + Sync + 'static,
        option_disabled: impl Fn(&O) -> bool + Send + Sync + 'static,
    ) -> Self {
        debug_assert!(item_height > 0.0, "item_height must be positive");
        Self {
            item_height,
            visible_item_count: 5,
            default_index: 0,
            swipe_duration_ms: 1000,
            allow_markup: false,
            option_text: Arc::new(option_text),
            option_disabled: Arc::new(option_disabled),
            on_change: None,
        }
    }

    pub fn with_visible_item_count(mut self, visible_item_count: usize) -> Self {
        debug_assert!(
            visible_item_count % 2 == 1,
            "visible_item_count must be odd"
        );
        self.visible_item_count = visible_item_count;
        self
    }

    pub fn with_default_index(mut self, default_index: usize) -> Self {
        self.default_index = default_index;
        self
    }

    pub fn with_swipe_duration_ms(mut self, swipe_duration_ms: u64) -> Self {
        self.swipe_duration_ms = swipe_duration_ms;
        self
    }

    pub fn with_allow_markup(mut self, allow_markup: bool) -> Self {
        self.allow_markup = allow_markup;
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&Column<O>, usize) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }
}

impl<O> Clone for ColumnOptions<O> {
    fn clone(&self) -> Self {
        Self {
            item_height: self.item_height,
            visible_item_count: self.visible_item_count,
            default_index: self.default_index,
            swipe_duration_ms: self.swipe_duration_ms,
            allow_markup: self.allow_markup,
            option_text: Arc::clone(&self.option_text),
            option_disabled: Arc::clone(&self.option_disabled),
            on_change: self.on_change.clone(),
        }
    }
}

impl<O> core::fmt::Debug for ColumnOptions<O> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ColumnOptions")
            .field("item_height", &self.item_height)
            .field("visible_item_count", &self.visible_item_count)
            .field("default_index", &self.default_index)
            .field("swipe_duration_ms", &self.swipe_duration_ms)
            .field("allow_markup", &self.allow_markup)
            .finish_non_exhaustive()
    }
}
