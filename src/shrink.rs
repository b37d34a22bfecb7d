//! Storage reclamation policy.

use crate::ring_buffer::MIN_CAPACITY;

/// Decides when a [`RingBuffer`](crate::RingBuffer) hands memory back after removals.
///
/// Shrinking is pure memory hygiene: it never changes the logical contents. The buffer
/// only ever halves its storage, and only when every live element already sits in the
/// lower quarter, so repeated push/pop around a boundary cannot thrash between sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShrinkPolicy {
    /// Storage only grows. Use [`RingBuffer::shrink_to_fit`](crate::RingBuffer::shrink_to_fit)
    /// to reclaim explicitly.
    Never,
    /// Halve after `shift`, `pop` or a range removal when the capacity is above
    /// `min_capacity`, the live run does not wrap, and `tail <= capacity / 4`.
    Sparse { min_capacity: usize },
}

impl ShrinkPolicy {
    /// Capacity at or below which [`ShrinkPolicy::default`] never shrinks.
    pub const DEFAULT_MIN_CAPACITY: usize = 1 << 14;

    /// Returns `true` if storage of `capacity` slots holding the run `[head, tail)`
    /// should be halved.
    #[inline]
    pub(crate) fn should_halve(self, capacity: usize, head: usize, tail: usize) -> bool {
        match self {
            ShrinkPolicy::Never => false,
            ShrinkPolicy::Sparse { min_capacity } => {
                capacity > min_capacity.max(MIN_CAPACITY) && head <= tail && tail <= capacity >> 2
            }
        }
    }
}

impl Default for ShrinkPolicy {
    fn default() -> Self {
        ShrinkPolicy::Sparse {
            min_capacity: Self::DEFAULT_MIN_CAPACITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shrink_never() {
        assert!(!ShrinkPolicy::Never.should_halve(1 << 20, 0, 1));
    }

    #[test]
    fn test_shrink_sparse_thresholds() {
        let policy = ShrinkPolicy::Sparse { min_capacity: 64 };
        // At or below the floor.
        assert!(!policy.should_halve(64, 0, 1));
        // Above the floor, run fits in the lower quarter.
        assert!(policy.should_halve(128, 0, 32));
        assert!(policy.should_halve(128, 10, 20));
        // Run reaches past the lower quarter.
        assert!(!policy.should_halve(128, 0, 33));
        // Wrapped run.
        assert!(!policy.should_halve(128, 100, 3));
    }

    #[test]
    fn test_shrink_sparse_never_below_minimum() {
        let policy = ShrinkPolicy::Sparse { min_capacity: 0 };
        assert!(!policy.should_halve(MIN_CAPACITY, 0, 1));
        assert!(policy.should_halve(MIN_CAPACITY * 2, 0, 1));
    }

    #[test]
    fn test_shrink_default() {
        assert_eq!(
            ShrinkPolicy::default(),
            ShrinkPolicy::Sparse {
                min_capacity: ShrinkPolicy::DEFAULT_MIN_CAPACITY
            }
        );
    }
}
