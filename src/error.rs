//! Construction-time errors.
//!
//! Positional operations never fail loudly: an out-of-range index simply yields `None`.
//! Only the fallible constructors report through [`RingBufferError`].

use thiserror::Error;

/// Errors returned by the fallible [`RingBuffer`](crate::RingBuffer) constructors.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RingBufferError {
    /// A bound of zero would evict every element as soon as it is inserted.
    #[error("max capacity must be at least 1")]
    ZeroMaxCapacity,

    /// No power of two representable in `usize` can hold the requested element count.
    #[error("capacity overflow: no power-of-two buffer can hold {requested} elements")]
    CapacityOverflow { requested: usize },
}
