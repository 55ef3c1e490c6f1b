//! Defines the two policy families a [`crate::SmartIter`] is parameterized with:
//!
//! - an _advance/distance_ policy ([`AdvanceDistance`]) deciding how a cursor moves by `n` steps
//!   and how far apart two cursors are: [`Linear`] or [`Circular`];
//! - a _begin/end_ policy ([`BeginEnd`]) deciding which pair of cursors bounds the container:
//!   [`Forward`], [`ConstForward`], [`Reverse`] or [`ConstReverse`].
//!
//! Policies are zero-sized and stateless. New traversal behaviors (e.g. skipping every other
//! element) are added by implementing these two traits; nothing else is needed.

mod access;
mod advance;

pub use self::{
    access::*,
    advance::*,
};
