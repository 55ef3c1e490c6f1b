use num_traits::ToPrimitive;

use crate::{
    cursor::{Cursor, RawCursor, RawReverseCursor},
    sequence::Sequence,
};

/// Selects the pair of cursors bounding a container: where traversal begins, and the
/// past-the-end position where it ends.
pub trait BeginEnd {
    /// The cursor type produced by this policy.
    type Cursor: Cursor;

    /// Returns the cursor traversal starts from.
    fn begin<S: Sequence + ?Sized>(seq: &S) -> Self::Cursor;

    /// Returns the past-the-end cursor.
    fn end<S: Sequence + ?Sized>(seq: &S) -> Self::Cursor;
}

/// Marks a [`BeginEnd`] policy whose iterators may hand out mutable element references.
/// The `Const*` policies deliberately do not implement this.
pub trait MutableAccess: BeginEnd {}

/// Cursors count in `isize`, so a sequence longer than `isize::MAX` is traversed as if it had
/// `isize::MAX` elements: the ones past that are out of reach.
fn len_of<S: Sequence + ?Sized>(seq: &S) -> isize {
    seq.size().to_isize().unwrap_or(isize::MAX)
}

/// Front to back, writable: `begin` is slot `0`, `end` is slot `size`.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Forward;

/// Front to back, read-only.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct ConstForward;

/// Back to front, writable: `begin` is slot `size - 1`, `end` is slot `-1`.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Reverse;

/// Back to front, read-only.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct ConstReverse;

impl BeginEnd for Forward {
    type Cursor = RawCursor;

    fn begin<S: Sequence + ?Sized>(_seq: &S) -> RawCursor { RawCursor::new(0) }

    fn end<S: Sequence + ?Sized>(seq: &S) -> RawCursor { RawCursor::new(len_of(seq)) }
}

impl BeginEnd for ConstForward {
    type Cursor = RawCursor;

    fn begin<S: Sequence + ?Sized>(seq: &S) -> RawCursor { Forward::begin(seq) }

    fn end<S: Sequence + ?Sized>(seq: &S) -> RawCursor { Forward::end(seq) }
}

impl BeginEnd for Reverse {
    type Cursor = RawReverseCursor;

    fn begin<S: Sequence + ?Sized>(seq: &S) -> RawReverseCursor {
        RawReverseCursor::new(len_of(seq) - 1)
    }

    fn end<S: Sequence + ?Sized>(_seq: &S) -> RawReverseCursor { RawReverseCursor::new(-1) }
}

impl BeginEnd for ConstReverse {
    type Cursor = RawReverseCursor;

    fn begin<S: Sequence + ?Sized>(seq: &S) -> RawReverseCursor { Reverse::begin(seq) }

    fn end<S: Sequence + ?Sized>(seq: &S) -> RawReverseCursor { Reverse::end(seq) }
}

impl MutableAccess for Forward {}

impl MutableAccess for Reverse {}
