use simvec_common::{Error, Result};

/// A heap region of a fixed number of initialized slots, owned exclusively by
/// this instance.
///
/// The slot count is fixed at construction. Growing means allocating a new
/// buffer and exchanging it with [`OwningBuffer::swap`]; no element is copied
/// by the exchange itself.
///
/// A buffer with zero slots never touches the allocator.
pub struct OwningBuffer<T> {
    /// The owned region. Its length is the slot count.
    region: Box<[T]>,
}

impl<T> OwningBuffer<T> {
    /// Creates a buffer with no slots and no allocation.
    pub fn empty() -> OwningBuffer<T> {
        OwningBuffer {
            region: Box::default(),
        }
    }

    /// Allocates `slots` slots, each holding `T::default()`.
    ///
    /// # Errors
    ///
    /// Returns an `AllocationFailed` error if the memory cannot be obtained,
    /// including when the byte size of the region overflows `isize::MAX`.
    pub fn new(slots: usize) -> Result<OwningBuffer<T>>
    where
        T: Default,
    {
        Self::from_fn(slots, |_| T::default())
    }

    /// Allocates `slots` slots, each holding a clone of `value`.
    ///
    /// # Errors
    ///
    /// Returns an `AllocationFailed` error if the memory cannot be obtained.
    pub fn filled(slots: usize, value: &T) -> Result<OwningBuffer<T>>
    where
        T: Clone,
    {
        Self::from_fn(slots, |_| value.clone())
    }

    /// Allocates `slots` slots, initializing the slot at index `i` with `f(i)`.
    ///
    /// # Errors
    ///
    /// Returns an `AllocationFailed` error if the memory cannot be obtained.
    pub fn from_fn<F>(slots: usize, f: F) -> Result<OwningBuffer<T>>
    where
        F: FnMut(usize) -> T,
    {
        if slots == 0 {
            return Ok(Self::empty());
        }
        let mut region = Vec::new();
        region.try_reserve_exact(slots).map_err(|e| {
            log::debug!(
                "OwningBuffer: failed to allocate {slots} slots of {} bytes: {e}",
                std::mem::size_of::<T>()
            );
            Error::allocation_failed(slots, e)
        })?;
        region.extend((0..slots).map(f));
        Ok(OwningBuffer {
            region: region.into_boxed_slice(),
        })
    }

    /// Adopts the storage of `vec`. The slot count becomes `vec.len()`.
    pub fn from_vec(vec: Vec<T>) -> OwningBuffer<T> {
        OwningBuffer {
            region: vec.into_boxed_slice(),
        }
    }

    /// Returns the number of slots.
    #[inline]
    pub fn slots(&self) -> usize {
        self.region.len()
    }

    /// Returns `true` if the buffer has no slots.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.region.is_empty()
    }

    /// Returns a reference to the slot at `index`.
    ///
    /// The caller must ensure `index < slots()`. This is checked in debug
    /// builds only; a release build still panics rather than reading past the
    /// region.
    #[inline]
    pub fn get(&self, index: usize) -> &T {
        debug_assert!(index < self.slots(), "slot {index} >= {}", self.slots());
        &self.region[index]
    }

    /// Returns a mutable reference to the slot at `index`.
    ///
    /// Same contract as [`OwningBuffer::get`].
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.slots(), "slot {index} >= {}", self.slots());
        &mut self.region[index]
    }

    /// Returns all slots as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.region
    }

    /// Returns all slots as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.region
    }

    /// Exchanges the regions (and thus the slot counts) of two buffers.
    #[inline]
    pub fn swap(&mut self, other: &mut OwningBuffer<T>) {
        std::mem::swap(&mut self.region, &mut other.region);
    }

    /// Returns the size of the owned region in bytes.
    pub fn heap_size(&self) -> usize {
        std::mem::size_of_val::<[T]>(&self.region)
    }

    /// Consumes the buffer, returning its slots as a `Vec`.
    pub fn into_vec(self) -> Vec<T> {
        self.region.into_vec()
    }
}

impl<T> Default for OwningBuffer<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for OwningBuffer<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OwningBuffer")
            .field("slots", &self.slots())
            .field("values", &self.as_slice())
            .finish()
    }
}
