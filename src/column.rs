use core::fmt;
use std::sync::Arc;

use crate::momentum::{FlingSample, VelocitySampler};
use crate::touch::TouchTracker;
use crate::{ColumnOptions, ColumnState, Direction, Phase, PickerOption};

/// Settle duration in milliseconds for snaps and click-to-select.
pub const DEFAULT_DURATION_MS: u64 = 200;

/// Ephemeral per-gesture state, created at touch-start and consumed at release.
#[derive(Clone, Copy, Debug)]
struct DragSession {
    tracker: TouchTracker,
    start_offset: f64,
    sampler: VelocitySampler,
}

/// A deferred "selection changed" notification.
///
/// At most one is pending per column; a newer deferred change overwrites it, so only
/// the latest requested index is ever delivered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct PendingChange {
    index: usize,
    user_action: bool,
}

/// A single scrollable list of options with momentum-scroll and snap-to-index
/// interaction.
///
/// The column is headless: it owns the offset, settle duration and committed index,
/// while a rendering layer applies `offset() + base_offset()` as a translation,
/// animates it over `duration_ms()`, and reports completion via
/// [`Column::transition_end`]. While a drag or an unsettled momentum transition is in
/// progress, index-change notifications are parked in a single pending slot and
/// flushed by the transition-end signal, so the embedder never sees a burst of
/// intermediate indices.
#[derive(Clone, Debug)]
pub struct Column<O = PickerOption> {
    opts: ColumnOptions<O>,
    options: Vec<O>,
    current_index: usize,
    offset: f64,
    duration_ms: u64,
    moving: bool,
    session: Option<DragSession>,
    pending: Option<PendingChange>,
}

impl<O: Clone + PartialEq + fmt::Display> Column<O> {
    /// Creates a column and commits the adjusted default index (no notification).
    pub fn new(opts: ColumnOptions<O>, options: Vec<O>) -> Self {
        let default_index = opts.default_index;
        pdebug!(
            count = options.len(),
            default_index,
            "Column::new"
        );
        let mut column = Self {
            opts,
            options,
            current_index: default_index,
            offset: 0.0,
            duration_ms: 0,
            moving: false,
            session: None,
            pending: None,
        };
        column.apply_index(default_index, false);
        column
    }

    pub fn config(&self) -> &ColumnOptions<O> {
        &self.opts
    }

    pub fn options(&self) -> &[O] {
        &self.options
    }

    pub fn count(&self) -> usize {
        self.options.len()
    }

    /// Translation the rendering layer adds to `offset()` so the committed row sits in
    /// the middle of the visible window.
    pub fn base_offset(&self) -> f64 {
        self.opts.item_height * (self.opts.visible_item_count.saturating_sub(1)) as f64 / 2.0
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Duration of the transition the rendering layer should run toward `offset()`.
    /// `0` means apply instantly.
    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    pub fn is_moving(&self) -> bool {
        self.moving
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn allow_markup(&self) -> bool {
        self.opts.allow_markup
    }

    /// Current point in the idle → dragging → settling cycle.
    pub fn phase(&self) -> Phase {
        if self.session.is_some() {
            Phase::Dragging
        } else if self.moving || self.duration_ms > 0 {
            Phase::Settling
        } else {
            Phase::Idle
        }
    }

    /// Whether a change notification is parked until the next transition-end signal.
    pub fn has_pending_change(&self) -> bool {
        self.pending.is_some()
    }

    pub fn option(&self, index: usize) -> Option<&O> {
        self.options.get(index)
    }

    /// Display text for an option, falling back to the raw value's `Display` when the
    /// extractor has no text field for it.
    pub fn option_text(&self, index: usize) -> Option<String> {
        self.options.get(index).map(|o| self.text_of(o))
    }

    pub fn option_disabled(&self, index: usize) -> bool {
        self.is_disabled(index)
    }

    /// The option at the committed index.
    pub fn value(&self) -> Option<&O> {
        self.options.get(self.current_index)
    }

    /// Begins a gesture.
    ///
    /// When a settle transition is still in flight, pass the currently rendered offset
    /// (excluding the base offset) so the drag resumes from the visual position
    /// instead of the already-committed target; it is clamped to at most `0`. Starting
    /// a drag freezes the transition (duration drops to `0`) and discards any pending
    /// notification.
    pub fn touch_start(&mut self, x: f64, y: f64, now_ms: u64, rendered_offset: Option<f64>) {
        let mut tracker = TouchTracker::new();
        tracker.begin(x, y);

        if self.moving {
            if let Some(rendered) = rendered_offset {
                self.offset = rendered.min(0.0);
            }
        }

        self.duration_ms = 0;
        self.pending = None;
        self.session = Some(DragSession {
            tracker,
            start_offset: self.offset,
            sampler: VelocitySampler::begin(now_ms, self.offset),
        });
        ptrace!(offset = self.offset, "touch_start");
    }

    /// Applies a pointer move, returning the gesture's direction so the caller can
    /// suppress the platform default while it is vertical.
    pub fn touch_move(&mut self, x: f64, y: f64, now_ms: u64) -> Option<Direction> {
        let Some(mut session) = self.session else {
            return None;
        };

        self.moving = true;
        let direction = session.tracker.update(x, y);

        let span = self.count() as f64 * self.opts.item_height;
        self.offset = (session.start_offset + session.tracker.delta_y())
            .clamp(-span, self.opts.item_height);

        session.sampler.update(now_ms, self.offset);
        self.session = Some(session);
        direction
    }

    /// Ends the gesture: a qualifying fling projects an inertial target, anything else
    /// snaps to the nearest index.
    pub fn touch_end(&mut self, now_ms: u64) {
        let Some(session) = self.session.take() else {
            return;
        };

        let sample = session.sampler.finish(now_ms, self.offset);
        if sample.is_fling() {
            self.momentum(sample);
            return;
        }

        let index = self.index_for_offset(self.offset);
        self.moving = false;
        self.duration_ms = DEFAULT_DURATION_MS;
        self.apply_index(index, true);
    }

    /// A cancelled gesture resolves exactly like a released one.
    pub fn touch_cancel(&mut self, now_ms: u64) {
        self.touch_end(now_ms);
    }

    fn momentum(&mut self, sample: FlingSample) {
        let target = sample.project(self.offset);
        let index = self.index_for_offset(target);
        ptrace!(
            distance = sample.distance,
            elapsed_ms = sample.elapsed_ms,
            index,
            "momentum"
        );
        self.duration_ms = self.opts.swipe_duration_ms;
        // `moving` stays true: the change notification waits for the settle.
        self.apply_index(index, true);
    }

    /// Signals that the settle transition finished. This is the single place deferred
    /// notifications are flushed.
    pub fn transition_end(&mut self) {
        self.moving = false;
        self.duration_ms = 0;

        if let Some(pending) = self.pending.take() {
            self.commit(pending.index, pending.user_action);
        }
    }

    /// Selects a tapped row. Ignored while a drag or unsettled transition is in
    /// progress; no deferral is needed since nothing is in flight.
    pub fn click_item(&mut self, index: usize) {
        if self.moving {
            return;
        }
        self.duration_ms = DEFAULT_DURATION_MS;
        self.apply_index(index, true);
    }

    /// Programmatically selects an index, adjusted to the nearest enabled option.
    /// Commits silently (no change notification).
    pub fn set_index(&mut self, index: usize) {
        self.apply_index(index, false);
    }

    /// Selects the first option whose display text equals `text`. No-op when absent.
    pub fn set_value(&mut self, text: &str) {
        let found = (0..self.options.len()).find(|&i| self.text_of(&self.options[i]) == text);
        if let Some(index) = found {
            self.apply_index(index, false);
        }
    }

    /// Replaces the option list wholesale. A list equal to the current one is a no-op;
    /// a differing list resets the selection to index 0.
    pub fn set_options(&mut self, options: Vec<O>) {
        if self.options == options {
            return;
        }
        pdebug!(count = options.len(), "set_options");
        self.options = options;
        self.apply_index(0, false);
    }

    pub fn set_on_change(
        &mut self,
        on_change: Option<impl Fn(&Column<O>, usize) + Send + Sync + 'static>,
    ) {
        self.opts.on_change = on_change.map(|f| Arc::new(f) as _);
    }

    /// The pixel → index quantization law shared by drag-release snapping and
    /// momentum-target resolution.
    pub fn index_for_offset(&self, offset: f64) -> usize {
        let count = self.count();
        if count == 0 {
            return 0;
        }
        let raw = (-offset / self.opts.item_height).round();
        (raw.max(0.0) as usize).min(count - 1)
    }

    /// Nearest enabled option: clamp into range, scan forward, then backward.
    ///
    /// `None` when the column is empty or every option is disabled; callers fall back
    /// to index 0 in that case.
    pub fn adjust_index(&self, index: usize) -> Option<usize> {
        let count = self.count();
        let index = index.min(count);

        for i in index..count {
            if !self.is_disabled(i) {
                return Some(i);
            }
        }
        for i in (0..index).rev() {
            if !self.is_disabled(i) {
                return Some(i);
            }
        }
        None
    }

    /// Captures the committed interaction state (gesture sessions and pending
    /// notifications are ephemeral and excluded).
    pub fn state(&self) -> ColumnState {
        ColumnState {
            index: self.current_index,
            offset: self.offset,
            duration_ms: self.duration_ms,
            moving: self.moving,
        }
    }

    /// Restores state captured by [`Column::state`].
    pub fn restore_state(&mut self, state: ColumnState) {
        self.current_index = state.index.min(self.count().saturating_sub(1));
        self.offset = state.offset;
        self.duration_ms = state.duration_ms;
        self.moving = state.moving;
    }

    fn apply_index(&mut self, index: usize, user_action: bool) {
        let index = match self.adjust_index(index) {
            Some(index) => index,
            None => {
                if !self.options.is_empty() {
                    pwarn!(
                        count = self.options.len(),
                        "every option is disabled; falling back to index 0"
                    );
                }
                0
            }
        };
        self.offset = -(index as f64) * self.opts.item_height;

        // A change requested mid-flight is parked until the transition settles, so the
        // embedder sees only the final index instead of every intermediate one.
        if self.moving {
            self.pending = Some(PendingChange { index, user_action });
        } else {
            self.commit(index, user_action);
        }
    }

    fn commit(&mut self, index: usize, user_action: bool) {
        if index == self.current_index {
            return;
        }
        self.current_index = index;

        if user_action {
            let on_change = self.opts.on_change.clone();
            if let Some(on_change) = on_change {
                on_change(&*self, index);
            }
        }
    }

    fn text_of(&self, option: &O) -> String {
        (self.opts.option_text)(option).unwrap_or_else(|| option.to_string())
    }

    fn is_disabled(&self, index: usize) -> bool {
        self.options
            .get(index)
            .map(|o| (self.opts.option_disabled)(o))
            .unwrap_or(false)
    }
}
