//! Ring geometry: pointer to angle to percentage, and back out to thumb
//! positions, stroke-dash parameters and labels.
//!
//! Percentages come in three flavours:
//!
//! - *raw*: the pointer angle as a share of the full turn, `[0, 100)`.
//! - *stored*: what a [`Range`](crate::Range) slot holds. Drags store the
//!   quantized raw percentage.
//! - *real*: [`real_percentage`] of a stored value. Separation, cut-off and
//!   labels are all computed in real percentages.

use std::f64::consts::TAU;

use glam::DVec2;

use crate::ConfigError;

/// Default width of the closed gap, in percent of the full circle.
pub const DEFAULT_CUT_OFF: f64 = 10.0;

/// Rounds to the nearest integer with ties going toward positive infinity.
///
/// `f64::round` sends `-2.5` to `-3.0`; labels and separation checks need
/// `-2.0` there.
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Angle of `pointer` around `center`, normalized into `[0, 2π)`.
///
/// Angles grow clockwise on screen since y points down.
pub fn angle_from_pointer(pointer: DVec2, center: DVec2) -> f64 {
    let delta = pointer - center;
    (delta.y.atan2(delta.x) + TAU) % TAU
}

/// Share of the full turn covered by `angle`, in percent.
pub fn percentage_from_angle(angle: f64) -> f64 {
    angle / TAU * 100.0
}

/// Moves the zero of the percentage scale back by a quarter turn.
pub fn tilt(percentage: f64) -> f64 {
    if percentage - 25.0 > 0.0 {
        percentage - 25.0
    } else {
        percentage - 125.0
    }
}

/// Maps a tilted percentage back onto `(0, 100]`.
pub fn untilt(tilted: f64) -> f64 {
    if tilted > 0.0 {
        tilted
    } else {
        let percentage = 100.0 - tilted * -1.0;
        100.0 - percentage * -1.0
    }
}

/// Real percentage of a stored slot value: `untilt(tilt(stored))`.
///
/// For stored values in `[0, 100]` this is a quarter-turn rotation that
/// lands in `(0, 100]`: `stored - 25` above 25, `stored + 75` otherwise.
pub fn real_percentage(stored: f64) -> f64 {
    untilt(tilt(stored))
}

/// SVG stroke-dash parameters of one circle.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArcDash {
    /// `stroke-dasharray`: dash length then gap length.
    pub dash_array: [f64; 2],
    /// `stroke-dashoffset`.
    pub dash_offset: f64,
}

/// Immutable measurements of the ring, fixed when the slider is built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingGeometry {
    radius: f64,
    stroke: f64,
    inner_radius: f64,
    circumference: f64,
    cut_off: f64,
}

impl RingGeometry {
    /// Builds the ring for an outer `radius`, a `stroke` thickness and a
    /// `cut_off` gap given in percent of the full circle.
    ///
    /// The ring sits in a `2 * radius` square whose top-left corner is the
    /// pointer origin. Its stroke is centered on the inner radius
    /// `radius - 2 * stroke`.
    pub fn new(radius: f64, stroke: f64, cut_off: f64) -> Result<Self, ConfigError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(ConfigError::InvalidRadius(radius));
        }
        if !stroke.is_finite() || stroke < 0.0 {
            return Err(ConfigError::InvalidStroke(stroke));
        }
        let inner_radius = radius - stroke * 2.0;
        if inner_radius <= 0.0 {
            return Err(ConfigError::NoInnerRadius { radius, stroke });
        }
        if !(0.0..100.0).contains(&cut_off) {
            return Err(ConfigError::InvalidCutOff(cut_off));
        }

        Ok(Self {
            radius,
            stroke,
            inner_radius,
            circumference: inner_radius * TAU,
            cut_off,
        })
    }

    /// Outer radius.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Stroke thickness.
    pub fn stroke(&self) -> f64 {
        self.stroke
    }

    /// Radius of the stroke centerline, `radius - 2 * stroke`.
    pub fn inner_radius(&self) -> f64 {
        self.inner_radius
    }

    /// Circumference of the stroke centerline.
    pub fn circumference(&self) -> f64 {
        self.circumference
    }

    /// Width of the closed gap, in percent of the full circle.
    pub fn cut_off(&self) -> f64 {
        self.cut_off
    }

    /// Center of the ring in pointer coordinates.
    pub fn center(&self) -> DVec2 {
        DVec2::splat(self.radius)
    }

    /// Lowest real percentage the start handle may take.
    pub fn min_real(&self) -> f64 {
        self.cut_off / 2.0
    }

    /// Highest real percentage the end handle may take.
    pub fn max_real(&self) -> f64 {
        100.0 - self.cut_off / 2.0
    }

    /// Raw percentage for a pointer position.
    pub fn pointer_percentage(&self, pointer: DVec2) -> f64 {
        percentage_from_angle(angle_from_pointer(pointer, self.center()))
    }

    /// Point on the stroke centerline at raw percentage `raw`.
    ///
    /// Feeding the result back through [`Self::pointer_percentage`] yields
    /// `raw` again, up to float error.
    pub fn pointer_for_percentage(&self, raw: f64) -> DVec2 {
        let angle = raw / 100.0 * TAU;
        self.center() + DVec2::new(angle.cos(), angle.sin()) * self.inner_radius
    }

    /// Thumb center for a stored slot value.
    ///
    /// Uses the stored value as the angle share directly, which puts the
    /// thumb under the pointer that produced it.
    pub fn thumb_position(&self, stored: f64) -> DVec2 {
        let angle = (TAU / 100.0) * stored;
        DVec2::new(
            self.radius + self.inner_radius * angle.cos(),
            self.radius + self.inner_radius * angle.sin(),
        )
    }

    /// Dash parameters of the active arc between two real percentages.
    pub fn active_arc(&self, start_real: f64, end_real: f64) -> ArcDash {
        let circumference = self.circumference;
        let dash_offset = circumference - (start_real / 100.0) * circumference;
        let difference = round_half_up(end_real - start_real);
        let dash_length = (circumference / 100.0) * difference;

        ArcDash {
            dash_array: [circumference, dash_length],
            dash_offset,
        }
    }

    /// Dash parameters of the circle that paints over the cut-off gap.
    pub fn clip_arc(&self) -> ArcDash {
        let circumference = self.circumference;
        ArcDash {
            dash_array: [
                circumference,
                (circumference / 100.0) * (100.0 - self.cut_off),
            ],
            dash_offset: (circumference / 100.0) * (100.0 - self.cut_off / 2.0),
        }
    }

    /// Lower and upper label for a pair of real percentages, in the units of
    /// `max_value`.
    ///
    /// Each label is shifted by half the gap so the usable part of the ring
    /// spans the whole `0..=max_value` scale.
    pub fn labels(&self, start_real: f64, end_real: f64, max_value: f64) -> (f64, f64) {
        let scale = max_value / 100.0;
        let half_gap = self.cut_off / 2.0;
        (
            round_half_up(scale * (start_real - half_gap)),
            round_half_up(scale * (end_real + half_gap)),
        )
    }
}

impl Default for RingGeometry {
    fn default() -> Self {
        let radius = 200.0;
        let inner_radius = 120.0;
        Self {
            radius,
            stroke: 40.0,
            inner_radius,
            circumference: inner_radius * TAU,
            cut_off: DEFAULT_CUT_OFF,
        }
    }
}
