//! The two handle slots of a ring slider.

use std::fmt;

use crate::slider::geometry::real_percentage;

/// One of the two draggable handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Handle {
    /// Counter-clockwise (lower) handle, slot 0.
    Start,
    /// Clockwise (upper) handle, slot 1.
    End,
}

impl Handle {
    /// Both handles in slot order.
    pub const ALL: [Handle; 2] = [Handle::Start, Handle::End];

    /// Slot index of the handle.
    pub fn index(self) -> usize {
        match self {
            Handle::Start => 0,
            Handle::End => 1,
        }
    }

    /// Handle for a slot index, if the index is 0 or 1.
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Handle::Start),
            1 => Some(Handle::End),
            _ => None,
        }
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Handle::Start => f.write_str("start"),
            Handle::End => f.write_str("end"),
        }
    }
}

/// Stored positions of both handles.
///
/// The slots are independent: `start < end` is not required. Only their
/// real percentages (see [`real_percentage`]) are kept apart and out of the
/// cut-off gap.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    /// Stored percentage of the start handle.
    pub start: f64,
    /// Stored percentage of the end handle.
    pub end: f64,
}

impl Range {
    /// Creates a range from the two stored percentages.
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Stored value of one slot.
    pub fn get(&self, handle: Handle) -> f64 {
        match handle {
            Handle::Start => self.start,
            Handle::End => self.end,
        }
    }

    /// Copy of this range with one slot replaced.
    pub fn with(self, handle: Handle, value: f64) -> Self {
        match handle {
            Handle::Start => Self {
                start: value,
                ..self
            },
            Handle::End => Self { end: value, ..self },
        }
    }

    /// Real percentages of `(start, end)`.
    pub fn real(&self) -> (f64, f64) {
        (real_percentage(self.start), real_percentage(self.end))
    }

    /// Stored values as `[start, end]`.
    pub fn to_array(self) -> [f64; 2] {
        [self.start, self.end]
    }
}

impl Default for Range {
    /// `[40, 100]`, which reads as real percentages 15 to 75.
    fn default() -> Self {
        Self::new(40.0, 100.0)
    }
}

impl From<[f64; 2]> for Range {
    fn from([start, end]: [f64; 2]) -> Self {
        Self::new(start, end)
    }
}

impl From<(f64, f64)> for Range {
    fn from((start, end): (f64, f64)) -> Self {
        Self::new(start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_indices() {
        assert_eq!(Handle::Start.index(), 0);
        assert_eq!(Handle::End.index(), 1);
        assert_eq!(Handle::from_index(1), Some(Handle::End));
        assert_eq!(Handle::from_index(2), None);
        assert_eq!(Handle::End.to_string(), "end");
    }

    #[test]
    fn with_replaces_only_one_slot() {
        let range = Range::default();
        assert_eq!(range.with(Handle::Start, 42.0), Range::new(42.0, 100.0));
        assert_eq!(range.with(Handle::End, 90.0), Range::new(40.0, 90.0));
        assert_eq!(range.get(Handle::End), 100.0);
    }

    #[test]
    fn default_reads_as_fifteen_to_seventy_five() {
        assert_eq!(Range::default().real(), (15.0, 75.0));
        assert_eq!(Range::from([60.0, 10.0]).real(), (35.0, 85.0));
    }
}
