use std::fmt;

use glam::DVec2;
use tracing::{debug, trace};

use super::geometry::{RingGeometry, round_half_up};
use crate::{ConfigError, Handle, Range};

/// Smallest rounded real-percentage distance between the two handles.
pub const MIN_SEPARATION: f64 = 5.0;

/// With smoothing off, samples closer than this (in raw percent) to the
/// stored slot are ignored.
pub const STAGGER_STEP: f64 = 5.0;

/// Why a drag sample left the range untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    /// The pointer had a NaN or infinite coordinate.
    NonFinitePointer,
    /// Smoothing is off and the pointer moved less than [`STAGGER_STEP`].
    BelowSmoothingThreshold,
    /// The handles would end up closer than [`MIN_SEPARATION`].
    HandlesTooClose,
    /// A handle would enter the cut-off gap.
    InsideCutOff,
}

impl Rejection {
    /// Short human-readable reason.
    pub fn as_str(self) -> &'static str {
        match self {
            Rejection::NonFinitePointer => "pointer is not finite",
            Rejection::BelowSmoothingThreshold => "movement below the staggered step",
            Rejection::HandlesTooClose => "handles closer than the minimum separation",
            Rejection::InsideCutOff => "handle inside the cut-off gap",
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of feeding one drag sample to the controller.
///
/// A rejection is not an error: the sample is dropped and the next one is
/// evaluated against the last committed range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragOutcome {
    /// The sample was accepted; holds the new range.
    Committed(Range),
    /// The sample was dropped and the range is unchanged.
    Rejected(Rejection),
}

impl DragOutcome {
    /// Whether the sample changed the range.
    pub fn is_committed(&self) -> bool {
        matches!(self, DragOutcome::Committed(_))
    }

    /// Why the sample was dropped, if it was.
    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            DragOutcome::Committed(_) => None,
            DragOutcome::Rejected(rejection) => Some(*rejection),
        }
    }
}

/// Checks the separation and cut-off invariants of a candidate range.
pub fn check_range(geometry: &RingGeometry, range: Range) -> Result<(), Rejection> {
    let (start_real, end_real) = range.real();
    if round_half_up(end_real - start_real) < MIN_SEPARATION {
        return Err(Rejection::HandlesTooClose);
    }
    if start_real < geometry.min_real() || end_real > geometry.max_real() {
        return Err(Rejection::InsideCutOff);
    }
    Ok(())
}

/// Controller for the `ring_slider` component.
///
/// Owns the committed [`Range`] and the smoothing flag. The range only
/// changes through [`Self::propose_update`] and [`Self::reset`].
#[derive(Debug, Clone, PartialEq)]
pub struct RingSliderController {
    geometry: RingGeometry,
    range: Range,
    initial_range: Range,
    smooth: bool,
}

impl Default for RingSliderController {
    fn default() -> Self {
        Self {
            geometry: RingGeometry::default(),
            range: Range::default(),
            initial_range: Range::default(),
            smooth: true,
        }
    }
}

impl RingSliderController {
    /// Creates a controller starting at `initial_range`.
    ///
    /// Fails when `initial_range` does not satisfy the invariants that every
    /// committed range keeps.
    pub fn new(
        geometry: RingGeometry,
        initial_range: Range,
        smooth: bool,
    ) -> Result<Self, ConfigError> {
        if !initial_range.start.is_finite() || !initial_range.end.is_finite() {
            return Err(ConfigError::InvalidInitialRange {
                range: initial_range,
                reason: "slot is not finite",
            });
        }
        check_range(&geometry, initial_range).map_err(|rejection| {
            ConfigError::InvalidInitialRange {
                range: initial_range,
                reason: rejection.as_str(),
            }
        })?;

        Ok(Self {
            geometry,
            range: initial_range,
            initial_range,
            smooth,
        })
    }

    /// Ring measurements the controller checks samples against.
    pub fn geometry(&self) -> &RingGeometry {
        &self.geometry
    }

    /// Last committed range.
    pub fn range(&self) -> Range {
        self.range
    }

    /// Real percentages of the committed range.
    pub fn real_range(&self) -> (f64, f64) {
        self.range.real()
    }

    /// Range restored by [`Self::reset`].
    pub fn initial_range(&self) -> Range {
        self.initial_range
    }

    /// Whether small pointer moves are tracked continuously.
    pub fn is_smooth(&self) -> bool {
        self.smooth
    }

    /// Turns smoothing on or off.
    pub fn set_smooth(&mut self, smooth: bool) {
        self.smooth = smooth;
    }

    /// Flips the smoothing flag and returns the new value.
    pub fn toggle_smooth(&mut self) -> bool {
        self.smooth = !self.smooth;
        self.smooth
    }

    /// Restores the range the controller was created with.
    pub fn reset(&mut self) {
        self.range = self.initial_range;
    }

    /// Feeds one drag sample for `handle` and commits it when the resulting
    /// range is valid.
    ///
    /// The start handle floors the pointer percentage and the end handle
    /// ceils it, so the range grows slightly rather than letting the
    /// handles jitter into each other.
    pub fn propose_update(&mut self, handle: Handle, pointer: DVec2) -> DragOutcome {
        match self.evaluate(handle, pointer) {
            Ok(candidate) => {
                trace!("{handle} handle committed range {candidate:?}");
                self.range = candidate;
                DragOutcome::Committed(candidate)
            }
            Err(rejection) => {
                debug!("{handle} handle sample at {pointer} dropped: {rejection}");
                DragOutcome::Rejected(rejection)
            }
        }
    }

    fn evaluate(&self, handle: Handle, pointer: DVec2) -> Result<Range, Rejection> {
        if !pointer.is_finite() {
            return Err(Rejection::NonFinitePointer);
        }

        let raw = self.geometry.pointer_percentage(pointer);
        let quantized = match handle {
            Handle::Start => raw.floor(),
            Handle::End => raw.ceil(),
        };

        if !self.smooth && (raw - self.range.get(handle)).abs() < STAGGER_STEP {
            return Err(Rejection::BelowSmoothingThreshold);
        }

        let candidate = self.range.with(handle, quantized);
        check_range(&self.geometry, candidate)?;
        Ok(candidate)
    }
}
