//! Named [`SmartIter`] flavors: {linear, circular} x {forward, reverse} x {writable, read-only}.
//!
//! The writable flavors hold the container exclusively (`&mut C`); the read-only (`Const`)
//! flavors share it (`&C`) and are [`Copy`], so any number of them may walk one container.
//!
//! Example:
//! ```
//! use smartiter::{CircularReverseIter, LinearConstReverseIter};
//! let mut a = [10, 20, 30, 40];
//!
//! let it = LinearConstReverseIter::new(&a);
//! assert_eq!(it.get(), Ok(&40));
//! assert_eq!(it.plus(2).unwrap().get(), Ok(&20));
//!
//! let mut it = CircularReverseIter::new(&mut a);
//! it.advance(-1).unwrap();
//! *it.get_mut().unwrap() = 11;
//! assert_eq!(a, [11, 20, 30, 40]);
//! ```

use crate::{
    policy::{Circular, ConstForward, ConstReverse, Forward, Linear, Reverse},
    smart_iter::SmartIter,
};

/// Front to back, clamped at the bounds, writable.
pub type LinearIter<'a, C> = SmartIter<&'a mut C, Linear, Forward>;
/// Front to back, clamped at the bounds, read-only.
pub type LinearConstIter<'a, C> = SmartIter<&'a C, Linear, ConstForward>;
/// Back to front, clamped at the bounds, writable.
pub type LinearReverseIter<'a, C> = SmartIter<&'a mut C, Linear, Reverse>;
/// Back to front, clamped at the bounds, read-only.
pub type LinearConstReverseIter<'a, C> = SmartIter<&'a C, Linear, ConstReverse>;

/// Front to back, wrapping around, writable.
pub type CircularIter<'a, C> = SmartIter<&'a mut C, Circular, Forward>;
/// Front to back, wrapping around, read-only.
pub type CircularConstIter<'a, C> = SmartIter<&'a C, Circular, ConstForward>;
/// Back to front, wrapping around, writable.
pub type CircularReverseIter<'a, C> = SmartIter<&'a mut C, Circular, Reverse>;
/// Back to front, wrapping around, read-only.
pub type CircularConstReverseIter<'a, C> = SmartIter<&'a C, Circular, ConstReverse>;
