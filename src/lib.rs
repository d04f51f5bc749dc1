//! A headless momentum-scroll picker engine.
//!
//! For adapter-level utilities (pointer-event plumbing, tween-driven settles), see the
//! `pickwheel-adapter` crate.
//!
//! This crate focuses on the interaction core of a mobile "wheel" picker column: touch
//! tracking, time-windowed velocity sampling, fixed-deceleration momentum projection,
//! offset → index snapping, and change notifications that are withheld until the
//! settle transition finishes.
//!
//! It is UI-agnostic. A rendering layer is expected to provide:
//! - raw pointer positions and event timestamps
//! - a "transition finished" signal once an animated settle completes
//! - the currently rendered offset when a drag starts mid-transition
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod column;
mod momentum;
mod options;
mod picker;
mod state;
mod touch;
mod types;


pub use column::{Column, DEFAULT_DURATION_MS};
pub use momentum::{
    DECELERATION, FlingSample, MOMENTUM_LIMIT_DISTANCE, MOMENTUM_LIMIT_TIME_MS, VelocitySampler,
};
pub use options::{ColumnOptions, OnChangeCallback, OptionDisabledFn, OptionTextFn};
pub use picker::{ColumnSpec, Picker, PickerChangeCallback};
pub use state::ColumnState;
pub use touch::TouchTracker;
pub use types::{Direction, Phase, PickerOption};
