//! Implements [`crate::Sequence`] for the heap-allocated collections of `alloc`.

use alloc::{
    collections::VecDeque,
    vec::Vec,
};

use crate::sequence::{Sequence, SequenceMut};

impl<T> Sequence for Vec<T> {
    type Item = T;

    fn size(&self) -> usize { self.len() }

    fn element(&self, i: usize) -> Option<&T> { self.get(i) }
}

impl<T> SequenceMut for Vec<T> {
    fn element_mut(&mut self, i: usize) -> Option<&mut T> { self.get_mut(i) }
}

// Slots are logical indices from the front, regardless of where the ring buffer wraps.
impl<T> Sequence for VecDeque<T> {
    type Item = T;

    fn size(&self) -> usize { self.len() }

    fn element(&self, i: usize) -> Option<&T> { self.get(i) }
}

impl<T> SequenceMut for VecDeque<T> {
    fn element_mut(&mut self, i: usize) -> Option<&mut T> { self.get_mut(i) }
}
