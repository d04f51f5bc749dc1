use core::fmt;

use pickwheel::{Column, ColumnOptions, Direction, PickerOption};

use crate::{Easing, Tween};

/// A framework-neutral controller that wraps a `pickwheel::Column` and realizes the
/// transition capability the engine expects: it feeds pointer events in, animates
/// settles with a tween, and reports transition completion back to the column.
///
/// Adapters drive it by calling:
/// - `on_pointer_down` / `on_pointer_move` / `on_pointer_up` / `on_pointer_cancel`
///   when pointer events occur
/// - `tick(now_ms)` each frame; the returned offset is what the view should render
///
/// A CSS-transition layer never reports completion for a zero-length transition, so
/// the controller settles the column immediately whenever a requested settle has no
/// distance to cover; deferred notifications still flush on time that way.
#[derive(Clone, Debug)]
pub struct Controller<O = PickerOption> {
    column: Column<O>,
    tween: Option<Tween>,
    easing: Easing,
}

impl<O: Clone + PartialEq + fmt::Display> Controller<O> {
    pub fn new(opts: ColumnOptions<O>, options: Vec<O>) -> Self {
        Self::from_column(Column::new(opts, options))
    }

    pub fn from_column(column: Column<O>) -> Self {
        Self {
            column,
            tween: None,
            easing: Easing::EaseOutCubic,
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn column(&self) -> &Column<O> {
        &self.column
    }

    pub fn column_mut(&mut self) -> &mut Column<O> {
        &mut self.column
    }

    pub fn into_column(self) -> Column<O> {
        self.column
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// Offset the view should currently render (excluding the column's base offset).
    pub fn render_offset(&self, now_ms: u64) -> f64 {
        match self.tween {
            Some(tween) => tween.sample(now_ms),
            None => self.column.offset(),
        }
    }

    /// Begins a drag. A settle animation in flight is frozen at its current sample
    /// and handed to the column so the drag resumes from the visual position.
    pub fn on_pointer_down(&mut self, x: f64, y: f64, now_ms: u64) {
        let rendered = self.tween.take().map(|tween| tween.sample(now_ms));
        self.column.touch_start(x, y, now_ms, rendered);
    }

    /// Forwards a pointer move; the returned direction tells the embedder whether to
    /// suppress the platform default for this gesture.
    pub fn on_pointer_move(&mut self, x: f64, y: f64, now_ms: u64) -> Option<Direction> {
        self.column.touch_move(x, y, now_ms)
    }

    pub fn on_pointer_up(&mut self, now_ms: u64) {
        let from = self.render_offset(now_ms);
        self.column.touch_end(now_ms);
        self.begin_transition(from, now_ms);
    }

    pub fn on_pointer_cancel(&mut self, now_ms: u64) {
        let from = self.render_offset(now_ms);
        self.column.touch_cancel(now_ms);
        self.begin_transition(from, now_ms);
    }

    /// Selects a tapped row (ignored by the column while a settle is unresolved).
    pub fn click(&mut self, index: usize, now_ms: u64) {
        let from = self.render_offset(now_ms);
        self.column.click_item(index);
        self.begin_transition(from, now_ms);
    }

    /// Programmatic selection; applies instantly unless the column is mid-settle.
    pub fn set_index(&mut self, index: usize, now_ms: u64) {
        let from = self.render_offset(now_ms);
        self.column.set_index(index);
        self.begin_transition(from, now_ms);
    }

    /// Programmatic selection by display text; applies instantly unless the column is
    /// mid-settle.
    pub fn set_value(&mut self, text: &str, now_ms: u64) {
        let from = self.render_offset(now_ms);
        self.column.set_value(text);
        self.begin_transition(from, now_ms);
    }

    /// Advances the controller.
    ///
    /// While a settle tween is active, returns the offset the view should render;
    /// completion delivers the engine's transition-end signal. Returns `None` when
    /// nothing is animating.
    pub fn tick(&mut self, now_ms: u64) -> Option<f64> {
        let tween = self.tween?;
        let offset = tween.sample(now_ms);

        if tween.is_done(now_ms) {
            self.tween = None;
            self.column.transition_end();
        }
        Some(offset)
    }

    fn begin_transition(&mut self, from: f64, now_ms: u64) {
        let duration_ms = self.column.duration_ms();
        let to = self.column.offset();

        if duration_ms == 0 || (to - from).abs() < f64::EPSILON {
            // Nothing to animate: deliver the completion signal right away.
            self.tween = None;
            self.column.transition_end();
            return;
        }
        self.tween = Some(Tween::new(from, to, now_ms, duration_ms, self.easing));
    }
}
