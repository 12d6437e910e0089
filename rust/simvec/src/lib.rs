//! A growable contiguous array built on a single owning buffer.
//!
//! [`SimpleVector`] keeps its logical size separate from the slot count of
//! its buffer, grows by doubling, and offers both unchecked (`v[i]`) and
//! bounds-checked ([`SimpleVector::at`]) element access.
//!
//! ```
//! use simvec::{SimpleVector, reserve, simple_vector};
//!
//! let mut v = simple_vector![7; 3];
//! assert_eq!(v.len(), 3);
//! assert_eq!(v.capacity(), 3);
//!
//! v.push_back(8);
//! assert_eq!(v.capacity(), 6);
//!
//! let empty: SimpleVector<u32> = reserve(16).into();
//! assert!(empty.is_empty());
//! assert_eq!(empty.capacity(), 16);
//! ```

pub mod cmp;
pub mod iter;
pub mod reserve;
pub mod simple_vector;

#[cfg(feature = "serde")]
mod serde_impl;

pub use reserve::{ReserveCapacity, reserve};
pub use simple_vector::SimpleVector;
pub use simvec_common::{Error, ErrorKind, Result};

/// Creates a [`SimpleVector`] from a list of elements or from a
/// `value; count` pair, in the manner of `vec!`.
///
/// ```
/// use simvec::simple_vector;
///
/// let v = simple_vector![1, 2, 3];
/// assert_eq!(v, [1, 2, 3]);
///
/// let w = simple_vector!["a"; 2];
/// assert_eq!(w, ["a", "a"]);
/// ```
#[macro_export]
macro_rules! simple_vector {
    () => {
        $crate::SimpleVector::new()
    };
    ($elem:expr; $n:expr) => {
        $crate::SimpleVector::from_elem($n, $elem)
    };
    ($($x:expr),+ $(,)?) => {
        $crate::SimpleVector::from([$($x),+])
    };
}
