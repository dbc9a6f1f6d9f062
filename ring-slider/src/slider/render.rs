use glam::DVec2;

use super::{geometry::ArcDash, interaction::RingSliderController};

/// Extra width of the active arc so the background colour does not bleed
/// along its edges.
const ACTIVE_STROKE_OVERLAP: f64 = 3.0;
/// Extra width of the circle that paints over the cut-off gap.
const CLIP_STROKE_OVERLAP: f64 = 20.0;

/// Stroke widths of the three circles that make up the ring.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RingStrokes {
    /// Background ring, the plain stroke thickness.
    pub track: f64,
    /// Active arc between the handles.
    pub active: f64,
    /// Circle painting over the cut-off gap.
    pub clip: f64,
}

/// Everything a presentation layer needs to draw one frame of the slider.
///
/// Coordinates share the pointer space: origin at the top-left corner of a
/// `size` by `size` box.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RingSliderView {
    /// Side of the square the slider occupies.
    pub size: f64,
    /// Ring center.
    pub center: DVec2,
    /// Radius of the stroke centerline.
    pub track_radius: f64,
    /// Stroke widths of the three circles.
    pub strokes: RingStrokes,
    /// Diameter of a thumb.
    pub thumb_diameter: f64,
    /// Center of the start thumb.
    pub thumb0: DVec2,
    /// Center of the end thumb.
    pub thumb1: DVec2,
    /// Dash parameters of the active arc.
    pub active_arc: ArcDash,
    /// Dash parameters of the gap-covering circle.
    pub clip_arc: ArcDash,
    /// Lower label, in `max_value` units.
    pub label_min: f64,
    /// Upper label, in `max_value` units.
    pub label_max: f64,
    /// Whether smoothing is on, for the toggle's checked state.
    pub smooth: bool,
}

impl RingSliderView {
    /// Thumb center for a slot index in slot order.
    pub fn thumbs(&self) -> [DVec2; 2] {
        [self.thumb0, self.thumb1]
    }
}

/// Derives the view of the committed state.
///
/// Pure: the same controller state and `max_value` always give the same
/// view.
pub(crate) fn derive_view(controller: &RingSliderController, max_value: f64) -> RingSliderView {
    let geometry = controller.geometry();
    let range = controller.range();
    let (start_real, end_real) = range.real();
    let (label_min, label_max) = geometry.labels(start_real, end_real, max_value);

    RingSliderView {
        size: geometry.radius() * 2.0,
        center: geometry.center(),
        track_radius: geometry.inner_radius(),
        strokes: RingStrokes {
            track: geometry.stroke(),
            active: geometry.stroke() + ACTIVE_STROKE_OVERLAP,
            clip: geometry.stroke() + CLIP_STROKE_OVERLAP,
        },
        thumb_diameter: geometry.stroke(),
        thumb0: geometry.thumb_position(range.start),
        thumb1: geometry.thumb_position(range.end),
        active_arc: geometry.active_arc(start_real, end_real),
        clip_arc: geometry.clip_arc(),
        label_min,
        label_max,
        smooth: controller.is_smooth(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Handle, Range, slider::geometry::RingGeometry};

    #[test]
    fn default_view() {
        let controller = RingSliderController::default();
        let view = derive_view(&controller, 800.0);
        assert_eq!(view.size, 400.0);
        assert_eq!(view.center, DVec2::new(200.0, 200.0));
        assert_eq!(view.track_radius, 120.0);
        assert_eq!(
            view.strokes,
            RingStrokes {
                track: 40.0,
                active: 43.0,
                clip: 60.0,
            }
        );
        assert_eq!((view.label_min, view.label_max), (80.0, 640.0));
        assert!(view.smooth);
        // Stored 100 is a full turn, back on the right-hand side.
        assert!((view.thumb1 - DVec2::new(320.0, 200.0)).length() < 1e-9);
    }

    #[test]
    fn labels_follow_real_percentages() {
        let controller =
            RingSliderController::new(RingGeometry::default(), Range::new(60.0, 10.0), true)
                .unwrap();
        let view = derive_view(&controller, 800.0);
        assert_eq!((view.label_min, view.label_max), (240.0, 720.0));
    }

    #[test]
    fn derivation_is_pure() {
        let mut controller = RingSliderController::default();
        let pointer = controller.geometry().pointer_for_percentage(52.5);
        controller.propose_update(Handle::Start, pointer);
        let first = derive_view(&controller, 1200.0);
        let second = derive_view(&controller, 1200.0);
        assert_eq!(first, second);
        assert_eq!(first.thumbs(), [first.thumb0, first.thumb1]);
    }

    #[test]
    fn view_tracks_smooth_flag_and_commits() {
        let mut controller = RingSliderController::default();
        let before = derive_view(&controller, 800.0);
        controller.toggle_smooth();
        let pointer = controller.geometry().pointer_for_percentage(60.5);
        controller.propose_update(Handle::Start, pointer);
        let after = derive_view(&controller, 800.0);
        assert!(!after.smooth);
        assert_ne!(before.thumb0, after.thumb0);
        assert_eq!(before.thumb1, after.thumb1);
        assert_eq!(before.clip_arc, after.clip_arc);
        // Start now reads as 35.
        assert_eq!(after.label_min, 240.0);
    }
}
