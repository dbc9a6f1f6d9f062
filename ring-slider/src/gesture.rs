//! Gesture sources feeding drag samples to the slider.
//!
//! The slider only needs one capability from a gesture system: "call me with
//! the pointer position while handle T is being dragged, until I release the
//! subscription". [`GestureSource`] is that capability. Any runtime with pan
//! or drag recognition can implement it; [`PointerGestures`] is an in-memory
//! implementation used by tests and headless drivers.

use std::sync::atomic::{AtomicU64, Ordering};

use glam::DVec2;
use parking_lot::Mutex;
use tracing::trace;

use crate::Handle;

/// Callback receiving absolute pointer positions, relative to the ring's
/// bounding box origin.
pub type DragCallback = Box<dyn FnMut(DVec2) + Send>;

/// Identifies one live subscription on a [`GestureSource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Delivers drag-continuation samples for the two handle targets.
pub trait GestureSource {
    /// Starts delivering drag samples for `target` to `callback`.
    fn on_drag_continue(&self, target: Handle, callback: DragCallback) -> SubscriptionId;

    /// Stops delivering samples to a subscription. Releasing an id twice is a
    /// no-op.
    fn release(&self, id: SubscriptionId);
}

struct Subscriber {
    id: SubscriptionId,
    target: Handle,
    callback: DragCallback,
}

/// In-memory gesture source driven by explicit [`Self::drag`] calls.
///
/// Samples are delivered serially on the calling thread. Callbacks must not
/// subscribe or release on the same source from inside a drag callback.
#[derive(Default)]
pub struct PointerGestures {
    next_id: AtomicU64,
    subscribers: Mutex<Vec<Subscriber>>,
}

impl PointerGestures {
    /// Creates a source with no subscriptions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Delivers one drag sample for `target` and returns how many callbacks
    /// received it.
    pub fn drag(&self, target: Handle, pointer: DVec2) -> usize {
        let mut subscribers = self.subscribers.lock();
        let mut delivered = 0;
        for subscriber in subscribers.iter_mut().filter(|s| s.target == target) {
            (subscriber.callback)(pointer);
            delivered += 1;
        }
        trace!("Delivered {target} drag sample {pointer} to {delivered} subscriber(s)");
        delivered
    }

    /// Delivers a sequence of samples for `target` in order.
    pub fn drag_path(&self, target: Handle, path: impl IntoIterator<Item = DVec2>) -> usize {
        path.into_iter()
            .map(|pointer| self.drag(target, pointer))
            .sum()
    }

    /// Number of live subscriptions for `target`.
    pub fn subscriber_count(&self, target: Handle) -> usize {
        self.subscribers
            .lock()
            .iter()
            .filter(|s| s.target == target)
            .count()
    }
}

impl GestureSource for PointerGestures {
    fn on_drag_continue(&self, target: Handle, callback: DragCallback) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.subscribers.lock().push(Subscriber {
            id,
            target,
            callback,
        });
        id
    }

    fn release(&self, id: SubscriptionId) {
        self.subscribers.lock().retain(|s| s.id != id);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    fn recorder() -> (Arc<Mutex<Vec<DVec2>>>, DragCallback) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        (seen, Box::new(move |p| sink.lock().push(p)))
    }

    #[test]
    fn delivers_only_to_matching_target() {
        let gestures = PointerGestures::new();
        let (start_seen, start_cb) = recorder();
        let (end_seen, end_cb) = recorder();
        gestures.on_drag_continue(Handle::Start, start_cb);
        gestures.on_drag_continue(Handle::End, end_cb);

        assert_eq!(gestures.drag(Handle::Start, DVec2::new(1.0, 2.0)), 1);
        assert_eq!(*start_seen.lock(), vec![DVec2::new(1.0, 2.0)]);
        assert!(end_seen.lock().is_empty());
    }

    #[test]
    fn release_stops_delivery() {
        let gestures = PointerGestures::new();
        let (seen, cb) = recorder();
        let id = gestures.on_drag_continue(Handle::End, cb);
        assert_eq!(gestures.subscriber_count(Handle::End), 1);

        gestures.release(id);
        gestures.release(id);
        assert_eq!(gestures.subscriber_count(Handle::End), 0);
        assert_eq!(gestures.drag(Handle::End, DVec2::ZERO), 0);
        assert!(seen.lock().is_empty());
    }

    #[test]
    fn drag_path_keeps_order() {
        let gestures = PointerGestures::new();
        let (seen, cb) = recorder();
        gestures.on_drag_continue(Handle::Start, cb);
        let path = [DVec2::X, DVec2::Y, DVec2::ONE];
        assert_eq!(gestures.drag_path(Handle::Start, path), 3);
        assert_eq!(*seen.lock(), path.to_vec());
    }
}
