//! Circular dual-handle range slider.
//!
//! The ring is split into an active arc between two draggable handles and a
//! background arc, with a closed gap (the *cut-off*) where the two ends meet.
//! This crate holds everything except drawing and pointer capture:
//!
//! - [`geometry`]: pointer to angle to percentage, thumb positions,
//!   stroke-dash parameters and labels.
//! - [`RingSliderController`]: the committed [`Range`] and smoothing flag,
//!   with one mutation entry point,
//!   [`propose_update`](RingSliderController::propose_update).
//! - [`RingSliderView`]: the per-frame view a presentation layer draws.
//! - [`GestureSource`]: the capability a gesture system provides so a
//!   [`RingSlider`] can be mounted on it.
//!
//! Logging goes through `tracing`; install a subscriber in the application
//! to see committed and rejected drag samples.
#![deny(missing_docs, clippy::unwrap_used)]

mod error;
mod gesture;
mod range;
mod slider;
mod state;

pub use error::ConfigError;
pub use gesture::{DragCallback, GestureSource, PointerGestures, SubscriptionId};
pub use range::{Handle, Range};
pub use slider::{
    DragOutcome, MIN_SEPARATION, MountedRingSlider, Rejection, RingSlider, RingSliderArgs,
    RingSliderController, RingSliderView, RingStrokes, STAGGER_STEP, check_range, geometry,
    geometry::{ArcDash, RingGeometry},
};
pub use state::State;

pub use glam;
