//! Adapter utilities for the `pickwheel` crate.
//!
//! The `pickwheel` crate is UI-agnostic and focuses on the interaction math and
//! state. This crate provides small, framework-neutral helpers commonly needed by
//! adapters:
//!
//! - pointer-event plumbing into a picker column
//! - tween-driven settle transitions standing in for CSS transitions
//!
//! This crate is intentionally framework-agnostic (no DOM/TUI bindings).
#![forbid(unsafe_code)]

mod controller;
mod tween;


pub use controller::Controller;
pub use tween::{Easing, Tween};
