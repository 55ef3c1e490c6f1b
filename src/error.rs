//! Defines the error returned by the fallible operations of [`crate::SmartIter`].

/// Why an iterator operation could not be carried out.
///
/// Every variant is a broken precondition on the caller's side; none of them is transient.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum IterError {
    /// The iterator is not bound to any container.
    #[error("iterator is not bound to a container")]
    Unbound,

    /// The cursor designates no element of the container (e.g. it sits on `end`).
    #[error("slot {slot} is out of range for a container of size {size}")]
    OutOfRange { slot: isize, size: usize },

    /// Circular movement was requested over a container with no elements.
    #[error("cannot move circularly over an empty container")]
    EmptyContainer,

    /// The two iterators do not reference the same container.
    #[error("iterators reference different containers")]
    MismatchedContainer,
}
