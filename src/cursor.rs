//! Defines random-access cursors: positions within a [`crate::Sequence`], expressed as slots.

use core::{
    cmp::Ordering,
    fmt::Debug,
};

/// A random-access position within a sequence.
///
/// A cursor designates a _slot_ of the sequence that produced it. The slot may lie one step
/// outside `0..size` (the past-the-end position of either direction), in which case the cursor
/// designates no element. A cursor is only meaningful relative to the sequence it came from.
///
/// **The following operations are required to be implemented**:
///
/// - move by `n` steps in the direction of travel (negative `n` moves back) --- [`Self::advanced`]
/// - signed number of steps between two cursors --- [`Self::distance`]
/// - the designated slot --- [`Self::slot`]
pub trait Cursor: Copy + Clone + Debug + Default + Eq {
    /// Returns this cursor moved `n` steps in its direction of travel.
    fn advanced(self, n: isize) -> Self;

    /// Returns the number of steps from `self` to `to` (negative if `to` comes before `self`),
    /// such that `self.advanced(self.distance(to)) == to`. Saturates at the `isize` bounds.
    fn distance(self, to: Self) -> isize;

    /// Returns the slot of the sequence this cursor designates.
    fn slot(self) -> isize;
}

/// A cursor travelling from slot `0` towards higher slots.
///
/// Example:
/// ```
/// use smartiter::{Cursor, RawCursor};
/// let c = RawCursor::new(1);
/// assert_eq!(c.advanced(2).slot(), 3);
/// assert_eq!(c.distance(RawCursor::new(4)), 3);
/// ```
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct RawCursor(isize);

impl RawCursor {
    /// Creates a cursor on slot `slot`.
    pub const fn new(slot: isize) -> Self { Self(slot) }
}

impl Cursor for RawCursor {
    fn advanced(self, n: isize) -> Self { Self(self.0.saturating_add(n)) }

    fn distance(self, to: Self) -> isize { to.0.saturating_sub(self.0) }

    fn slot(self) -> isize { self.0 }
}

/// A cursor travelling from the last slot towards slot `0` (and then `-1`, its end).
///
/// Ordering follows the direction of travel: a cursor that is further along compares greater,
/// even though its slot is lower.
///
/// Example:
/// ```
/// use smartiter::{Cursor, RawReverseCursor};
/// let c = RawReverseCursor::new(3);
/// assert_eq!(c.advanced(2).slot(), 1);
/// assert_eq!(c.distance(RawReverseCursor::new(-1)), 4);
/// assert!(c < c.advanced(1));
/// ```
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct RawReverseCursor(isize);

impl RawReverseCursor {
    /// Creates a cursor on slot `slot`.
    pub const fn new(slot: isize) -> Self { Self(slot) }
}

impl Cursor for RawReverseCursor {
    fn advanced(self, n: isize) -> Self { Self(self.0.saturating_sub(n)) }

    fn distance(self, to: Self) -> isize { self.0.saturating_sub(to.0) }

    fn slot(self) -> isize { self.0 }
}

impl Ord for RawReverseCursor {
    fn cmp(&self, other: &Self) -> Ordering { other.0.cmp(&self.0) }
}

impl PartialOrd for RawReverseCursor {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
}
