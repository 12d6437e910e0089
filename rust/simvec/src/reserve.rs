//! The capacity request accepted by [`SimpleVector::with_reserve`].
//!
//! [`SimpleVector::with_reserve`]: crate::SimpleVector::with_reserve

/// A request for an empty vector with room for a given number of elements.
///
/// This only exists to tell "`n` elements" apart from "space for `n`
/// elements" at a construction site: `SimpleVector::with_len(n)` holds `n`
/// default values, while `SimpleVector::with_reserve(reserve(n))` holds none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReserveCapacity {
    capacity: usize,
}

impl ReserveCapacity {
    pub fn new(capacity: usize) -> ReserveCapacity {
        ReserveCapacity { capacity }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Shorthand for [`ReserveCapacity::new`].
#[inline]
pub fn reserve(capacity: usize) -> ReserveCapacity {
    ReserveCapacity::new(capacity)
}
