#![doc = include_str!("../README.md")]
#![no_std]
#![forbid(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

mod aliases;
mod cursor;
mod error;
mod handle;
mod policy;
mod sequence;
mod smart_iter;

pub use self::{
    aliases::*,
    cursor::{Cursor, RawCursor, RawReverseCursor},
    error::IterError,
    handle::{same_container, ContainerMut, ContainerRef},
    policy::*,
    sequence::{Sequence, SequenceMut},
    smart_iter::{Lap, SmartIter},
};
