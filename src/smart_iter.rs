use core::{
    fmt::{Debug, Formatter},
    iter::FusedIterator,
    marker::PhantomData as P,
};

use num_traits::ToPrimitive;

use crate::{
    cursor::Cursor,
    error::IterError,
    handle::{same_container, ContainerMut, ContainerRef},
    policy::{AdvanceDistance, BeginEnd, MutableAccess},
    sequence::{Sequence, SequenceMut},
};

type Item<H> = <<H as ContainerRef>::Target as Sequence>::Item;

/// A random-access iterator over a container, customized by two policies:
///
/// - `H`: the [`ContainerRef`] handle to the container --- `&C` (shared; the iterator is
///   [`Copy`]) or `&mut C` (exclusive; elements can be written).
/// - `A`: the [`AdvanceDistance`] policy --- [`crate::Linear`] clamps at the container bounds,
///   [`crate::Circular`] wraps around them.
/// - `B`: the [`BeginEnd`] policy --- which cursors bound the traversal, e.g. [`crate::Forward`]
///   or [`crate::Reverse`].
///
/// The iterator is a cursor plus an optional reference to its container; without a container it
/// is _unbound_ and every element access fails with [`IterError::Unbound`].
/// Begin/end are always derived from the container currently referenced, never cached.
///
/// ## Summary of supported operations
///
/// - Bind to a container at its begin ([`Self::new`]), rebind ([`Self::rebind`]), unbind.
///
/// - Dereference ([`Self::get`], [`Self::get_mut`]) and indexed access relative to begin
///   ([`Self::at`], [`Self::at_mut`]).
///
/// - Move by `n` steps ([`Self::advance`], [`Self::retreat`]), by one step
///   ([`Self::increment`], [`Self::decrement`] and their `post_` variants), or into a new
///   iterator ([`Self::plus`], [`Self::minus`]).
///
/// - Distance between two iterators over the same container ([`Self::distance_to`]).
///
/// - Compare by cursor _and_ container identity (`==`).
///
/// ## Iterator support
///
/// [`Self::lap`] walks at most one lap from the current position as a [`core::iter::Iterator`].
///
/// Example:
/// ```
/// use smartiter::{CircularConstIter, LinearConstIter};
/// let v = vec![10, 20, 30, 40];
///
/// let mut it = LinearConstIter::new(&v);
/// it.advance(1).unwrap();
/// assert_eq!(it.get(), Ok(&20));
/// it.advance(5).unwrap();
/// assert_eq!(it, it.end());
///
/// let mut it = CircularConstIter::new(&v);
/// it.advance(1).unwrap();
/// it.advance(5).unwrap();
/// assert_eq!(it.get(), Ok(&30));
/// assert_eq!(it.lap().copied().collect::<Vec<_>>(), vec![30, 40, 10, 20]);
/// ```
pub struct SmartIter<H, A, B: BeginEnd> {
    cursor: B::Cursor,
    container: Option<H>,
    _policy: P<(A, B)>,
}

impl<H: ContainerRef, A: AdvanceDistance, B: BeginEnd>
SmartIter<H, A, B> {
    /// Creates an iterator bound to nothing.
    pub fn unbound() -> Self { Self::from_parts(B::Cursor::default(), None) }

    /// Creates an iterator bound to `container`, positioned at its begin.
    pub fn new(container: H) -> Self {
        let cursor = B::begin(container.target());
        Self::from_parts(cursor, Some(container))
    }

    /// Creates an iterator bound to `container` if there is one, positioned at its begin.
    pub fn from_option(container: Option<H>) -> Self {
        container.map_or_else(Self::unbound, Self::new)
    }

    /// Creates an iterator from a cursor and a container, as is.
    pub fn from_parts(cursor: B::Cursor, container: Option<H>) -> Self {
        Self { cursor, container, _policy: P }
    }

    /// Returns the cursor and the container handle.
    pub fn into_parts(self) -> (B::Cursor, Option<H>) { (self.cursor, self.container) }

    /// Binds this iterator to `container` and moves it to the container's begin.
    /// Rebinding to the container already referenced keeps the current position.
    pub fn rebind(&mut self, container: H) {
        if same_container(self.container.as_ref(), Some(&container)) {
            return;
        }
        tracing::trace!(size = container.target().size(), "retargeting iterator");
        self.cursor = B::begin(container.target());
        self.container = Some(container);
    }

    /// Unbinds this iterator, returning the handle it held (if any).
    pub fn unbind(&mut self) -> Option<H> {
        self.cursor = B::Cursor::default();
        self.container.take()
    }

    /// Returns whether this iterator references a container.
    pub fn is_bound(&self) -> bool { self.container.is_some() }

    /// Returns the referenced container.
    pub fn container(&self) -> Option<&H::Target> { self.container.as_ref().map(|h| h.target()) }

    /// Returns the current cursor.
    pub fn cursor(&self) -> B::Cursor { self.cursor }

    /// Returns the begin cursor of the referenced container (default cursor when unbound).
    pub fn begin_cursor(&self) -> B::Cursor { self.container().map(B::begin).unwrap_or_default() }

    /// Returns the end cursor of the referenced container (default cursor when unbound).
    pub fn end_cursor(&self) -> B::Cursor { self.container().map(B::end).unwrap_or_default() }

    /// Returns the number of steps from begin to the current position; `0` if unbound.
    pub fn distance_from_begin(&self) -> isize {
        self.container().map_or(0, |c| B::begin(c).distance(self.cursor))
    }

    /// Returns the number of steps from the current position to end; `0` if unbound.
    pub fn distance_to_end(&self) -> isize {
        self.container().map_or(0, |c| self.cursor.distance(B::end(c)))
    }

    /// Returns the size of the referenced container; `0` if unbound.
    pub fn size(&self) -> usize { self.container().map_or(0, |c| c.size()) }
    /// Same as [`Self::size`].
    pub fn len(&self) -> usize { self.size() }
    /// Same as [`Self::size`].
    pub fn length(&self) -> usize { self.size() }
    /// Same as [`Self::size`]: the container decides how many elements there are.
    pub fn max_size(&self) -> usize { self.size() }
    /// Returns whether the referenced container is empty (or there is none).
    pub fn is_empty(&self) -> bool { self.size() == 0 }

    ////////////////////////////////////////////////////////////////////
    // movement

    /// Moves this iterator `n` steps (backwards if negative) according to its advance policy.
    /// No-op if unbound.
    pub fn advance(&mut self, n: isize) -> Result<(), IterError> {
        let Some(h) = &self.container else { return Ok(()) };
        let c = h.target();
        let (begin, end) = (B::begin(c), B::end(c));
        let from_begin = begin.distance(self.cursor);
        let to_end = self.cursor.distance(end);
        A::advance(&mut self.cursor, n, begin, end, from_begin, to_end)
    }

    /// Moves this iterator `n` steps backwards (forwards if negative); the opposite of
    /// [`Self::advance`].
    pub fn retreat(&mut self, n: isize) -> Result<(), IterError> {
        match n.checked_neg() {
            Some(n) => self.advance(n),
            // -isize::MIN does not fit
            None => {
                self.advance(isize::MAX)?;
                self.advance(1)
            }
        }
    }

    /// Moves one step forward (a.k.a. prefix increment).
    pub fn increment(&mut self) -> Result<&mut Self, IterError> {
        self.advance(1)?;
        Ok(self)
    }

    /// Moves one step backward (a.k.a. prefix decrement).
    pub fn decrement(&mut self) -> Result<&mut Self, IterError> {
        self.advance(-1)?;
        Ok(self)
    }

    /// Returns the distance from this iterator to `other`, measured by the advance policy
    /// (for [`crate::Circular`] this is the forward-only distance around the ring).
    ///
    /// Fails with [`IterError::MismatchedContainer`] unless both iterators reference the same
    /// container; two unbound iterators are `0` apart.
    pub fn distance_to(&self, other: &Self) -> Result<isize, IterError> {
        if !same_container(self.container.as_ref(), other.container.as_ref()) {
            return Err(IterError::MismatchedContainer);
        }
        Ok(A::distance(
            self.cursor,
            other.cursor,
            self.distance_from_begin(),
            other.distance_from_begin(),
            self.distance_to_end(),
            other.distance_to_end(),
        ))
    }
}

/// Read access through a shared handle: elements borrow the container, not the iterator.
impl<'a, C: Sequence + ?Sized, A: AdvanceDistance, B: BeginEnd>
SmartIter<&'a C, A, B> {
    /// Returns the element at the current position.
    ///
    /// Fails with [`IterError::Unbound`] if unbound, and with [`IterError::OutOfRange`] if the
    /// cursor designates no element (e.g. it is on end).
    pub fn get(&self) -> Result<&'a C::Item, IterError> {
        lookup(self.container.ok_or(IterError::Unbound)?, self.cursor)
    }

    /// Returns the `i`-th element from begin, moving there with this iterator's own policy
    /// (i.e. `*(self.begin() + i)`): a linear iterator fails with [`IterError::OutOfRange`] past
    /// the last element, while a circular one wraps around.
    pub fn at(&self, i: usize) -> Result<&'a C::Item, IterError> {
        let c = self.container.ok_or(IterError::Unbound)?;
        lookup(c, cursor_at::<_, A, B>(c, i)?)
    }

    /// Walks from the current position, stepping with this iterator's own policy, yielding at
    /// most [`Self::size`] elements.
    ///
    /// A linear walk stops at end. A circular walk yields exactly one full lap; started on end,
    /// it restarts from begin.
    pub fn lap(&self) -> Lap<'a, C, A, B> { Lap::new(self.container, self.cursor) }
}

/// Read access through an exclusive handle: elements borrow the iterator.
impl<'a, C: Sequence + ?Sized, A: AdvanceDistance, B: BeginEnd>
SmartIter<&'a mut C, A, B> {
    /// Returns the element at the current position. Fails like the shared-handle `get`.
    pub fn get(&self) -> Result<&C::Item, IterError> {
        lookup(self.container().ok_or(IterError::Unbound)?, self.cursor)
    }

    /// Returns the `i`-th element from begin. Fails like the shared-handle `at`.
    pub fn at(&self, i: usize) -> Result<&C::Item, IterError> {
        let c = self.container().ok_or(IterError::Unbound)?;
        lookup(c, cursor_at::<_, A, B>(c, i)?)
    }

    /// Walks one lap from the current position, like the shared-handle `lap`.
    pub fn lap(&self) -> Lap<'_, C, A, B> { Lap::new(self.container(), self.cursor) }
}

/// Operations that duplicate the iterator; only available for shared handles.
impl<H: ContainerRef + Clone, A: AdvanceDistance, B: BeginEnd>
SmartIter<H, A, B> {
    /// Returns an iterator on the begin of the referenced container.
    pub fn begin(&self) -> Self { Self::from_parts(self.begin_cursor(), self.container.clone()) }

    /// Returns an iterator on the end of the referenced container.
    pub fn end(&self) -> Self { Self::from_parts(self.end_cursor(), self.container.clone()) }

    /// Returns a new iterator = this iterator moved `n` steps.
    pub fn plus(&self, n: isize) -> Result<Self, IterError> {
        let mut it = self.clone();
        it.advance(n)?;
        Ok(it)
    }

    /// Returns a new iterator = this iterator moved `n` steps backwards.
    pub fn minus(&self, n: isize) -> Result<Self, IterError> {
        let mut it = self.clone();
        it.retreat(n)?;
        Ok(it)
    }

    /// Moves one step forward, returning the iterator as it was before the move
    /// (a.k.a. postfix increment).
    pub fn post_increment(&mut self) -> Result<Self, IterError> {
        let old = self.clone();
        self.advance(1)?;
        Ok(old)
    }

    /// Moves one step backward, returning the iterator as it was before the move
    /// (a.k.a. postfix decrement).
    pub fn post_decrement(&mut self) -> Result<Self, IterError> {
        let old = self.clone();
        self.advance(-1)?;
        Ok(old)
    }
}

/// Write access; only available for exclusive handles with a writable begin/end policy.
impl<H, A, B> SmartIter<H, A, B>
    where
        H: ContainerMut,
        H::Target: SequenceMut,
        A: AdvanceDistance,
        B: MutableAccess {
    /// Returns the element at the current position mutably. Fails like `get`.
    pub fn get_mut(&mut self) -> Result<&mut Item<H>, IterError> {
        let cursor = self.cursor;
        let c = self.container.as_mut().ok_or(IterError::Unbound)?.target_mut();
        lookup_mut(c, cursor)
    }

    /// Returns the `i`-th element from begin mutably. Fails like `at`.
    pub fn at_mut(&mut self, i: usize) -> Result<&mut Item<H>, IterError> {
        let c = self.container.as_mut().ok_or(IterError::Unbound)?.target_mut();
        let cursor = cursor_at::<_, A, B>(&*c, i)?;
        lookup_mut(c, cursor)
    }
}

/// Moves from begin by `i` steps under `A`.
fn cursor_at<S, A, B>(seq: &S, i: usize) -> Result<B::Cursor, IterError>
    where
        S: Sequence + ?Sized,
        A: AdvanceDistance,
        B: BeginEnd {
    let (begin, end) = (B::begin(seq), B::end(seq));
    let mut cursor = begin;
    let steps = i.to_isize().unwrap_or(isize::MAX);
    A::advance(&mut cursor, steps, begin, end, 0, begin.distance(end))?;
    Ok(cursor)
}

fn lookup<S: Sequence + ?Sized, K: Cursor>(seq: &S, cursor: K) -> Result<&S::Item, IterError> {
    let slot = cursor.slot();
    slot.to_usize()
        .and_then(|i| seq.element(i))
        .ok_or_else(|| IterError::OutOfRange { slot, size: seq.size() })
}

fn lookup_mut<S: SequenceMut + ?Sized, K: Cursor>(
    seq: &mut S, cursor: K,
) -> Result<&mut S::Item, IterError> {
    let (slot, size) = (cursor.slot(), seq.size());
    let elem = match slot.to_usize() {
        Some(i) => seq.element_mut(i),
        None => None,
    };
    elem.ok_or(IterError::OutOfRange { slot, size })
}

impl<H, A, B: BeginEnd>
Default for SmartIter<H, A, B> {
    fn default() -> Self {
        Self { cursor: B::Cursor::default(), container: None, _policy: P }
    }
}

impl<H: Clone, A, B: BeginEnd>
Clone for SmartIter<H, A, B> {
    fn clone(&self) -> Self {
        Self { cursor: self.cursor, container: self.container.clone(), _policy: P }
    }
}

impl<H: Copy, A, B: BeginEnd>
Copy for SmartIter<H, A, B> {}

// Equal = same position in the very same container; equal values in two containers don't count.
impl<H: ContainerRef, A, B: BeginEnd>
PartialEq for SmartIter<H, A, B> {
    fn eq(&self, other: &Self) -> bool {
        self.cursor == other.cursor
            && same_container(self.container.as_ref(), other.container.as_ref())
    }
}

impl<H: ContainerRef, A, B: BeginEnd>
Eq for SmartIter<H, A, B> {}

impl<H: ContainerRef, A, B: BeginEnd>
Debug for SmartIter<H, A, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        let container = self.container.as_ref()
            .map(|h| h.target() as *const H::Target as *const ());
        f.debug_struct("SmartIter")
            .field("cursor", &self.cursor)
            .field("container", &container)
            .finish()
    }
}

/// Walks one lap of a container from a [`SmartIter`]'s position; see [`SmartIter::lap`].
pub struct Lap<'c, S: ?Sized, A, B: BeginEnd> {
    seq: Option<&'c S>,
    cursor: B::Cursor,
    remaining: usize,
    _policy: P<(A, B)>,
}

impl<'c, S: Sequence + ?Sized, A: AdvanceDistance, B: BeginEnd>
Lap<'c, S, A, B> {
    fn new(seq: Option<&'c S>, mut cursor: B::Cursor) -> Self {
        let remaining = seq.map_or(0, |s| s.size());
        if let Some(s) = seq {
            let (begin, end) = (B::begin(s), B::end(s));
            if cursor == end {
                // one lap from end: circular lands on begin, linear stays put
                let len = begin.distance(end);
                let mut lapped = cursor;
                if A::advance(&mut lapped, len, begin, end, len, 0).is_ok() {
                    cursor = lapped;
                }
            }
        }
        Self { seq, cursor, remaining, _policy: P }
    }
}

impl<'c, S: Sequence + ?Sized, A: AdvanceDistance, B: BeginEnd>
Iterator for Lap<'c, S, A, B> {
    type Item = &'c S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let seq = self.seq?;
        if self.remaining == 0 {
            return None;
        }
        let Ok(elem) = lookup(seq, self.cursor) else {
            self.remaining = 0;
            return None;
        };
        self.remaining -= 1;
        let (begin, end) = (B::begin(seq), B::end(seq));
        let from_begin = begin.distance(self.cursor);
        let to_end = self.cursor.distance(end);
        if A::advance(&mut self.cursor, 1, begin, end, from_begin, to_end).is_err() {
            self.remaining = 0;
        }
        Some(elem)
    }

    fn size_hint(&self) -> (usize, Option<usize>) { (0, Some(self.remaining)) }
}

impl<'c, S: Sequence + ?Sized, A: AdvanceDistance, B: BeginEnd>
FusedIterator for Lap<'c, S, A, B> {}
