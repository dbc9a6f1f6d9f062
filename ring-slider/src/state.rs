//! Shared state handles.
//!
//! A [`State<T>`] owns one value behind a lock and can be cloned into every
//! place that needs to read or update it, such as gesture callbacks and the
//! code that renders the slider. All clones point at the same value.

use std::{fmt, sync::Arc};

use parking_lot::RwLock;

/// Handle to a value shared between a component and its input callbacks.
///
/// `State<T>` is `Clone + Send + Sync` (for `T: Send + Sync`). Outside this
/// crate a handle is read-only through `with` and `get`; updates go through
/// the component that owns it.
///
/// # Examples
///
/// ```
/// use ring_slider::State;
///
/// let count = State::new(3usize);
/// let handle = count.clone();
/// assert_eq!(handle.with(|c| c * 2), 6);
/// assert!(handle.ptr_eq(&count));
/// ```
///
/// ```compile_fail
/// use ring_slider::State;
///
/// let count = State::new(0usize);
/// count.with_mut(|c| *c += 1);
/// ```
pub struct State<T> {
    inner: Arc<RwLock<T>>,
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> State<T> {
    /// Wraps `value` in a new shared handle.
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(RwLock::new(value)),
        }
    }

    /// Execute a closure with a shared reference to the stored value.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        let guard = self.inner.read();
        f(&guard)
    }

    /// Execute a closure with a mutable reference to the stored value.
    ///
    /// The write lock is held for the whole closure, so a read-compute-commit
    /// sequence inside `f` is never interleaved with another update.
    pub(crate) fn with_mut<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let mut guard = self.inner.write();
        f(&mut guard)
    }

    /// Get a cloned value. Requires `T: Clone`.
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.with(Clone::clone)
    }

    /// Returns `true` when both handles point at the same value.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T: Default> Default for State<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for State<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.with(|value| f.debug_tuple("State").field(value).finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_one_value() {
        let a = State::new(1);
        let b = a.clone();
        b.with_mut(|v| *v = 5);
        assert_eq!(a.get(), 5);
        assert!(a.ptr_eq(&b));
    }

    #[test]
    fn with_mut_returns_closure_result() {
        let state = State::new(vec![1, 2]);
        let len = state.with_mut(|v| {
            v.push(3);
            v.len()
        });
        assert_eq!(len, 3);
        assert_eq!(state.with(|v| v[2]), 3);
    }

    #[test]
    fn separate_states_are_not_equal() {
        let a = State::new(0);
        let b = State::new(0);
        assert!(!a.ptr_eq(&b));
    }
}
