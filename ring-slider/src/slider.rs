//! A circular range slider with two handles and a closed gap.
//!
//! ## Usage
//!
//! Build a [`RingSlider`] from [`RingSliderArgs`], [`mount`](RingSlider::mount)
//! it on a [`GestureSource`] and draw [`RingSlider::view`] after every drag
//! sample.
//!
//! ```
//! use ring_slider::{Handle, PointerGestures, RingSlider, RingSliderArgs};
//!
//! let slider = RingSlider::new(&RingSliderArgs::default().max_value(800.0)).unwrap();
//! let gestures = PointerGestures::new();
//! let mounted = slider.mount(&gestures);
//!
//! let aim = slider.geometry().pointer_for_percentage(60.5);
//! gestures.drag(Handle::Start, aim);
//! assert_eq!(slider.view().label_min, 240.0);
//!
//! mounted.unmount();
//! assert_eq!(gestures.subscriber_count(Handle::Start), 0);
//! ```
use derive_setters::Setters;
use glam::DVec2;
use tracing::{debug, info};

use crate::{ConfigError, DragCallback, GestureSource, Handle, Range, State, SubscriptionId};

use geometry::{DEFAULT_CUT_OFF, RingGeometry};
use render::derive_view;

pub use interaction::{
    DragOutcome, MIN_SEPARATION, Rejection, RingSliderController, STAGGER_STEP, check_range,
};
pub use render::{RingSliderView, RingStrokes};

pub mod geometry;
mod interaction;
mod render;

/// Arguments for the `ring_slider` component.
#[derive(Debug, Clone, Setters)]
pub struct RingSliderArgs {
    /// Outer radius. The component occupies a `2 * radius` square.
    pub radius: f64,
    /// Stroke thickness of the ring.
    pub stroke: f64,
    /// Width of the closed gap, in percent of the full circle.
    pub cut_off: f64,
    /// Value shown when the end handle sits at the end of the usable arc.
    ///
    /// Labels scale real percentages by `max_value / 100`.
    pub max_value: f64,
    /// Stored range the slider starts with and returns to on reset.
    #[setters(into)]
    pub initial_range: Range,
    /// Whether small pointer moves are tracked continuously.
    pub smooth: bool,
    /// Optional external controller.
    ///
    /// When this is `None`, `RingSlider` creates and owns a controller from
    /// the geometry fields above. When set, the controller's own geometry,
    /// range and smoothing flag are used.
    #[setters(skip)]
    pub controller: Option<State<RingSliderController>>,
}

impl RingSliderArgs {
    /// Sets an external ring slider controller.
    pub fn controller(mut self, controller: State<RingSliderController>) -> Self {
        self.controller = Some(controller);
        self
    }
}

impl Default for RingSliderArgs {
    fn default() -> Self {
        Self {
            radius: 200.0,
            stroke: 40.0,
            cut_off: DEFAULT_CUT_OFF,
            max_value: 100.0,
            initial_range: Range::default(),
            smooth: true,
            controller: None,
        }
    }
}

/// A ring slider instance: configuration plus the shared controller.
#[derive(Debug, Clone)]
pub struct RingSlider {
    max_value: f64,
    controller: State<RingSliderController>,
}

impl RingSlider {
    /// Validates `args` and builds the slider.
    pub fn new(args: &RingSliderArgs) -> Result<Self, ConfigError> {
        if !args.max_value.is_finite() || args.max_value <= 0.0 {
            return Err(ConfigError::InvalidMaxValue(args.max_value));
        }

        let controller = match &args.controller {
            Some(controller) => controller.clone(),
            None => {
                let geometry = RingGeometry::new(args.radius, args.stroke, args.cut_off)?;
                State::new(RingSliderController::new(
                    geometry,
                    args.initial_range,
                    args.smooth,
                )?)
            }
        };

        Ok(Self {
            max_value: args.max_value,
            controller,
        })
    }

    /// Ring measurements, read from the controller.
    pub fn geometry(&self) -> RingGeometry {
        self.controller.with(|c| *c.geometry())
    }

    /// Value shown at the end of the usable arc.
    pub fn max_value(&self) -> f64 {
        self.max_value
    }

    /// Shared, read-only handle to the controller.
    pub fn controller(&self) -> State<RingSliderController> {
        self.controller.clone()
    }

    /// Stored range.
    pub fn range(&self) -> Range {
        self.controller.with(|c| c.range())
    }

    /// Whether small pointer moves are tracked continuously.
    pub fn is_smooth(&self) -> bool {
        self.controller.with(|c| c.is_smooth())
    }

    /// Feeds one drag sample, see [`RingSliderController::propose_update`].
    pub fn propose_update(&self, handle: Handle, pointer: DVec2) -> DragOutcome {
        self.controller.with_mut(|c| c.propose_update(handle, pointer))
    }

    /// Flips smoothing, as a presentation-layer toggle would. Returns the new
    /// value.
    pub fn toggle_smooth(&self) -> bool {
        self.controller.with_mut(|c| c.toggle_smooth())
    }

    /// Turns smoothing on or off.
    pub fn set_smooth(&self, smooth: bool) {
        self.controller.with_mut(|c| c.set_smooth(smooth));
    }

    /// Restores the initial range.
    pub fn reset(&self) {
        let range = self.controller.with_mut(|c| {
            c.reset();
            c.range()
        });
        info!("Ring slider reset to {range:?}");
    }

    /// Derives the current view.
    pub fn view(&self) -> RingSliderView {
        self.controller.with(|c| derive_view(c, self.max_value))
    }

    /// Subscribes both handles on `source`.
    ///
    /// Every drag sample goes through [`Self::propose_update`]. The
    /// subscriptions stay live until the returned guard is dropped.
    pub fn mount<'a, G>(&self, source: &'a G) -> MountedRingSlider<'a, G>
    where
        G: GestureSource + ?Sized,
    {
        let subscriptions = Handle::ALL.map(|handle| {
            let controller = self.controller.clone();
            let callback: DragCallback = Box::new(move |pointer| {
                controller.with_mut(|c| c.propose_update(handle, pointer));
            });
            source.on_drag_continue(handle, callback)
        });
        debug!("Ring slider mounted: subscriptions {subscriptions:?}");

        MountedRingSlider {
            source,
            subscriptions,
        }
    }
}

/// Live gesture subscriptions of a mounted [`RingSlider`].
///
/// Dropping the guard releases both subscriptions.
#[must_use = "dropping the guard unmounts the slider immediately"]
pub struct MountedRingSlider<'a, G: GestureSource + ?Sized> {
    source: &'a G,
    subscriptions: [SubscriptionId; 2],
}

impl<G: GestureSource + ?Sized> MountedRingSlider<'_, G> {
    /// Subscription of one handle.
    pub fn subscription(&self, handle: Handle) -> SubscriptionId {
        self.subscriptions[handle.index()]
    }

    /// Releases both subscriptions.
    pub fn unmount(self) {}
}

impl<G: GestureSource + ?Sized> Drop for MountedRingSlider<'_, G> {
    fn drop(&mut self) {
        for id in self.subscriptions {
            self.source.release(id);
        }
        debug!("Ring slider unmounted: released {:?}", self.subscriptions);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PointerGestures;

    fn slider(max_value: f64) -> RingSlider {
        RingSlider::new(&RingSliderArgs::default().max_value(max_value)).unwrap()
    }

    #[test]
    fn rejects_bad_max_value() {
        for max_value in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = RingSlider::new(&RingSliderArgs::default().max_value(max_value));
            assert!(matches!(err, Err(ConfigError::InvalidMaxValue(_))));
        }
    }

    #[test]
    fn propagates_geometry_and_range_errors() {
        let err = RingSlider::new(&RingSliderArgs::default().stroke(120.0)).unwrap_err();
        assert!(matches!(err, ConfigError::NoInnerRadius { .. }));

        let err = RingSlider::new(&RingSliderArgs::default().initial_range([28.0, 100.0]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidInitialRange { .. }));
    }

    #[test]
    fn custom_geometry() {
        let args = RingSliderArgs::default()
            .radius(100.0)
            .stroke(10.0)
            .cut_off(20.0)
            .initial_range([40.0, 90.0]);
        let slider = RingSlider::new(&args).unwrap();
        assert_eq!(slider.geometry().inner_radius(), 80.0);
        assert_eq!(slider.geometry().min_real(), 10.0);
        assert_eq!(slider.range(), Range::new(40.0, 90.0));
        assert_eq!(slider.view().size, 200.0);
    }

    #[test]
    fn mounted_slider_follows_drags() {
        let slider = slider(800.0);
        let gestures = PointerGestures::new();
        let _mounted = slider.mount(&gestures);

        let geometry = slider.geometry();
        gestures.drag(Handle::Start, geometry.pointer_for_percentage(60.5));
        gestures.drag(Handle::End, geometry.pointer_for_percentage(9.5));
        assert_eq!(slider.range(), Range::new(60.0, 10.0));

        let view = slider.view();
        assert_eq!((view.label_min, view.label_max), (240.0, 720.0));
    }

    #[test]
    fn handles_are_independent_streams() {
        let slider = slider(100.0);
        let gestures = PointerGestures::new();
        let _mounted = slider.mount(&gestures);

        let aim = slider.geometry().pointer_for_percentage(55.5);
        gestures.drag(Handle::End, aim);
        assert_eq!(slider.range(), Range::new(40.0, 56.0));
    }

    #[test]
    fn unmount_releases_subscriptions() {
        let slider = slider(100.0);
        let gestures = PointerGestures::new();
        let mounted = slider.mount(&gestures);
        assert_eq!(gestures.subscriber_count(Handle::Start), 1);
        assert_eq!(gestures.subscriber_count(Handle::End), 1);
        assert_ne!(
            mounted.subscription(Handle::Start),
            mounted.subscription(Handle::End)
        );

        mounted.unmount();
        assert_eq!(gestures.subscriber_count(Handle::Start), 0);
        assert_eq!(gestures.subscriber_count(Handle::End), 0);

        let aim = slider.geometry().pointer_for_percentage(60.5);
        assert_eq!(gestures.drag(Handle::Start, aim), 0);
        assert_eq!(slider.range(), Range::default());
    }

    #[test]
    fn dropping_guard_unmounts() {
        let slider = slider(100.0);
        let gestures = PointerGestures::new();
        {
            let _mounted = slider.mount(&gestures);
            assert_eq!(gestures.subscriber_count(Handle::End), 1);
        }
        assert_eq!(gestures.subscriber_count(Handle::End), 0);
    }

    #[test]
    fn external_controller_is_shared() {
        let controller = State::new(RingSliderController::default());
        let slider =
            RingSlider::new(&RingSliderArgs::default().controller(controller.clone())).unwrap();
        slider.toggle_smooth();
        assert!(!controller.with(|c| c.is_smooth()));
        assert!(slider.controller().ptr_eq(&controller));
    }

    #[test]
    fn geometry_comes_from_external_controller() {
        let geometry = RingGeometry::new(100.0, 10.0, 10.0).unwrap();
        let controller = State::new(
            RingSliderController::new(geometry, Range::default(), true).unwrap(),
        );
        let slider =
            RingSlider::new(&RingSliderArgs::default().controller(controller)).unwrap();

        assert_eq!(slider.geometry(), geometry);
        let view = slider.view();
        assert_eq!(slider.geometry().radius() * 2.0, view.size);
        assert_eq!(slider.geometry().center(), view.center);

        let gestures = PointerGestures::new();
        let _mounted = slider.mount(&gestures);
        gestures.drag(Handle::Start, slider.geometry().pointer_for_percentage(60.5));
        assert_eq!(slider.range(), Range::new(60.0, 100.0));
    }

    #[test]
    fn toggle_and_reset_through_the_component() {
        let slider = slider(800.0);
        let aim = slider.geometry().pointer_for_percentage(50.5);
        assert!(slider.propose_update(Handle::Start, aim).is_committed());
        assert!(!slider.toggle_smooth());
        assert!(!slider.view().smooth);
        slider.set_smooth(true);
        assert!(slider.is_smooth());
        slider.reset();
        assert_eq!(slider.range(), Range::default());
    }
}
