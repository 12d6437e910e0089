//! Fixed-size owning storage for the simvec containers.
//!
//! [`OwningBuffer`] owns exactly one heap region of a fixed number of slots.
//! It does not track how many of those slots are logically in use; that is
//! left to the container built on top of it. Every slot always holds a valid
//! value of `T`, so a slot may be read or overwritten at any time without
//! any notion of "uninitialized" memory leaking into the public API.

pub mod owning_buffer;

pub use owning_buffer::OwningBuffer;
