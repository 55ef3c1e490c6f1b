//! Defines the container contract consumed by [`crate::SmartIter`].

mod plain;
#[cfg(feature = "alloc")]
mod owned;

/// A finite sequence of elements addressable by slot `0..size()`.
///
/// This is all [`crate::SmartIter`] needs from a container: the begin/end cursors are derived
/// from [`Self::size`] by the accessor policy, and dereferencing a cursor is a slot lookup.
/// The storage does not need to be contiguous (see the impl for `VecDeque`).
/// Iterators reach at most `isize::MAX` elements of a longer sequence.
///
/// **The following operations are required to be implemented**:
///
/// - number of elements --- [`Self::size`]
/// - read element at slot --- [`Self::element`]
///
/// Example:
/// ```
/// use smartiter::Sequence;
/// let a = [10, 20, 30, 40];
/// assert_eq!(a.size(), 4);
/// assert_eq!(a.element(2), Some(&30));
/// assert_eq!(a.element(4), None);
/// ```
pub trait Sequence {
    /// The element type of this sequence.
    type Item;

    /// Returns the number of elements in this sequence.
    fn size(&self) -> usize;

    /// Returns the element at slot `i`, or `None` if `i >= self.size()`.
    fn element(&self, i: usize) -> Option<&Self::Item>;

    /// Returns whether this sequence has no elements.
    fn is_empty(&self) -> bool { self.size() == 0 }
}

/// A [`Sequence`] whose elements can be written in place.
pub trait SequenceMut: Sequence {
    /// Returns the element at slot `i` mutably, or `None` if `i >= self.size()`.
    fn element_mut(&mut self, i: usize) -> Option<&mut Self::Item>;
}
