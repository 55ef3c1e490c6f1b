//! Implements [`crate::Sequence`] for slices and plain arrays.

use crate::sequence::{Sequence, SequenceMut};

impl<T> Sequence for [T] {
    type Item = T;

    fn size(&self) -> usize { self.len() }

    fn element(&self, i: usize) -> Option<&T> { self.get(i) }
}

impl<T> SequenceMut for [T] {
    fn element_mut(&mut self, i: usize) -> Option<&mut T> { self.get_mut(i) }
}

impl<T, const LENGTH: usize> Sequence for [T; LENGTH] {
    type Item = T;

    fn size(&self) -> usize { LENGTH }

    fn element(&self, i: usize) -> Option<&T> { self.get(i) }
}

impl<T, const LENGTH: usize> SequenceMut for [T; LENGTH] {
    fn element_mut(&mut self, i: usize) -> Option<&mut T> { self.get_mut(i) }
}
