//! Defines non-owning container references held by [`crate::SmartIter`].
//!
//! A handle never owns its container: the borrow it wraps guarantees the container outlives
//! every iterator holding it. Handles are compared by the _identity_ (address) of the container
//! they reference, never by value.

use core::ptr;

use crate::sequence::{Sequence, SequenceMut};

/// A non-owning reference to a [`Sequence`].
///
/// Implemented for `&C` (shared: any number of iterators may hold the same container) and for
/// `&mut C` (exclusive: the only handle that can write elements).
pub trait ContainerRef {
    /// The referenced container.
    type Target: Sequence + ?Sized;

    /// Returns the referenced container.
    fn target(&self) -> &Self::Target;
}

/// A [`ContainerRef`] through which the container can be written.
pub trait ContainerMut: ContainerRef {
    /// Returns the referenced container mutably.
    fn target_mut(&mut self) -> &mut Self::Target;
}

impl<'a, C: Sequence + ?Sized> ContainerRef for &'a C {
    type Target = C;

    fn target(&self) -> &C { self }
}

impl<'a, C: Sequence + ?Sized> ContainerRef for &'a mut C {
    type Target = C;

    fn target(&self) -> &C { &**self }
}

impl<'a, C: SequenceMut + ?Sized> ContainerMut for &'a mut C {
    fn target_mut(&mut self) -> &mut C { &mut **self }
}

/// Returns whether two (possibly absent) handles reference the very same container.
/// Two absent handles count as the same.
pub fn same_container<H: ContainerRef>(a: Option<&H>, b: Option<&H>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => ptr::eq(a.target(), b.target()),
        (None, None) => true,
        _ => false,
    }
}
