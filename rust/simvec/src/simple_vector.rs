use simvec_buffer::OwningBuffer;
use simvec_common::{Error, Result, verify_index};

use crate::reserve::ReserveCapacity;

/// A growable array that owns a single fixed-size buffer and tracks its
/// logical size separately from the buffer's slot count.
///
/// Slots `[0, len())` hold the live elements in index order. Slots
/// `[len(), capacity())` hold valid values of `T` that are never exposed
/// through indexing or iteration; removing an element only shrinks the
/// logical size and leaves the old value in its slot until it is
/// overwritten or the buffer is dropped.
///
/// When an append or insert needs more room, the capacity grows to
/// `max(required, 2 * capacity())`, giving amortized constant-time appends.
/// Fresh slots are filled with `T::default()`, which is why most growing
/// operations require `T: Default`.
///
/// Every operation that may allocate comes in two forms: a `try_*` method
/// returning [`Result`], and a plain method that panics if the allocation
/// fails, as `Vec` does.
///
/// # Examples
///
/// ```
/// use simvec::SimpleVector;
///
/// let mut v = SimpleVector::new();
/// v.push_back(1);
/// v.push_back(2);
/// v.push_back(3);
/// assert_eq!(v, [1, 2, 3]);
///
/// let pos = v.insert(1, 9);
/// assert_eq!(pos, 1);
/// assert_eq!(v, [1, 9, 2, 3]);
///
/// v.erase(0);
/// assert_eq!(v, [9, 2, 3]);
/// assert!(v.at(3).is_err());
///
/// v.pop_back();
/// assert_eq!(v, [9, 2]);
/// ```
pub struct SimpleVector<T> {
    /// Backing storage; its slot count is the capacity.
    buffer: OwningBuffer<T>,
    /// Number of live elements, `size <= buffer.slots()`.
    size: usize,
}

impl<T> SimpleVector<T> {
    /// Creates an empty vector. Does not allocate.
    pub fn new() -> SimpleVector<T> {
        SimpleVector {
            buffer: OwningBuffer::empty(),
            size: 0,
        }
    }

    /// Creates a vector that adopts the storage of `vec`, with
    /// `len() == capacity() == vec.len()`.
    pub fn from_vec(vec: Vec<T>) -> SimpleVector<T> {
        let size = vec.len();
        SimpleVector {
            buffer: OwningBuffer::from_vec(vec),
            size,
        }
    }

    /// Returns the number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns the number of slots in the backing buffer.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buffer.slots()
    }

    /// Returns `true` if there are no live elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the live elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.buffer.as_slice()[..self.size]
    }

    /// Returns the live elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.buffer.as_mut_slice()[..self.size]
    }

    /// Returns an iterator over the live elements.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Returns an iterator that allows modifying each live element.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns an `OutOfRange` error if `index >= len()`.
    pub fn at(&self, index: usize) -> Result<&T> {
        if index >= self.size {
            return Err(Error::out_of_range(index, self.size));
        }
        Ok(self.buffer.get(index))
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns an `OutOfRange` error if `index >= len()`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        if index >= self.size {
            return Err(Error::out_of_range(index, self.size));
        }
        Ok(self.buffer.get_mut(index))
    }

    /// Sets the size to zero. Capacity and slot contents are left as they are.
    #[inline]
    pub fn clear(&mut self) {
        self.size = 0;
    }

    /// Shortens the vector to `len` elements. Has no effect if `len >= len()`.
    pub fn truncate(&mut self, len: usize) {
        if len < self.size {
            self.size = len;
        }
    }

    /// Removes the last element by shrinking the size by one.
    ///
    /// The removed value stays in its slot. Use [`SimpleVector::pop`] to
    /// take it out.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty.
    pub fn pop_back(&mut self) {
        assert!(!self.is_empty(), "pop_back on an empty SimpleVector");
        self.size -= 1;
    }

    /// Removes the element at `position`, shifting everything after it one
    /// slot to the left.
    ///
    /// Returns the index that now holds the element that followed the erased
    /// one; this equals the new `len()` if the last element was erased.
    ///
    /// # Panics
    ///
    /// Panics if `position >= len()`.
    pub fn erase(&mut self, position: usize) -> usize {
        assert!(
            position < self.size,
            "erase position {position} is out of bounds (size {})",
            self.size
        );
        self.erase_unchecked(position)
    }

    /// Like [`SimpleVector::erase`], but reports a bad position as an error.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidArgument` error if `position >= len()`.
    pub fn try_erase(&mut self, position: usize) -> Result<usize> {
        verify_index!(position, self.size);
        Ok(self.erase_unchecked(position))
    }

    /// Exchanges buffers, sizes and capacities with `other` in constant time.
    ///
    /// This shadows the slice method of the same name; to exchange two
    /// elements, go through the slice: `v.as_mut_slice().swap(i, j)`.
    #[inline]
    pub fn swap(&mut self, other: &mut SimpleVector<T>) {
        self.buffer.swap(&mut other.buffer);
        std::mem::swap(&mut self.size, &mut other.size);
    }

    /// Returns the size of the backing buffer in bytes.
    pub fn heap_size(&self) -> usize {
        self.buffer.heap_size()
    }

    /// Consumes the vector, returning the live elements as a `Vec`.
    pub fn into_vec(self) -> Vec<T> {
        let mut vec = self.buffer.into_vec();
        vec.truncate(self.size);
        vec
    }

    fn erase_unchecked(&mut self, position: usize) -> usize {
        self.buffer.as_mut_slice()[position..self.size].rotate_left(1);
        self.size -= 1;
        position
    }

    /// Capacity to grow to when `required` slots are needed and the buffer
    /// is too small.
    fn grown_capacity(&self, required: usize) -> usize {
        required.max(self.capacity().saturating_mul(2))
    }
}

impl<T: Default> SimpleVector<T> {
    /// Creates a vector of `count` default values, with
    /// `len() == capacity() == count`.
    ///
    /// # Panics
    ///
    /// Panics if the allocation fails.
    pub fn with_len(count: usize) -> SimpleVector<T> {
        Self::try_with_len(count).unwrap_or_else(|e| fail(e))
    }

    /// Fallible form of [`SimpleVector::with_len`].
    pub fn try_with_len(count: usize) -> Result<SimpleVector<T>> {
        Ok(SimpleVector {
            buffer: OwningBuffer::new(count)?,
            size: count,
        })
    }

    /// Creates an empty vector with room for `request.capacity()` elements.
    ///
    /// ```
    /// use simvec::{SimpleVector, reserve};
    ///
    /// let v = SimpleVector::<i32>::with_reserve(reserve(10));
    /// assert_eq!(v.len(), 0);
    /// assert_eq!(v.capacity(), 10);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the allocation fails.
    pub fn with_reserve(request: ReserveCapacity) -> SimpleVector<T> {
        Self::try_with_reserve(request).unwrap_or_else(|e| fail(e))
    }

    /// Fallible form of [`SimpleVector::with_reserve`].
    pub fn try_with_reserve(request: ReserveCapacity) -> Result<SimpleVector<T>> {
        let mut v = SimpleVector::new();
        v.try_reserve(request.capacity())?;
        Ok(v)
    }

    /// Builds a new vector by taking over the storage and elements of
    /// `other`.
    ///
    /// `other` receives a fresh buffer of its previous capacity, filled with
    /// default values, and ends with `len() == 0`.
    ///
    /// # Panics
    ///
    /// Panics if allocating the replacement buffer fails.
    pub fn take_from(other: &mut SimpleVector<T>) -> SimpleVector<T> {
        Self::try_take_from(other).unwrap_or_else(|e| fail(e))
    }

    /// Fallible form of [`SimpleVector::take_from`]. On failure `other` is
    /// left untouched.
    pub fn try_take_from(other: &mut SimpleVector<T>) -> Result<SimpleVector<T>> {
        let mut taken = SimpleVector {
            buffer: OwningBuffer::new(other.capacity())?,
            size: 0,
        };
        taken.swap(other);
        Ok(taken)
    }

    /// Ensures the capacity is at least `new_capacity`.
    ///
    /// Does nothing if `new_capacity <= capacity()`. Otherwise the buffer is
    /// replaced by one of exactly `new_capacity` slots and the live elements
    /// are moved over.
    ///
    /// # Panics
    ///
    /// Panics if the allocation fails.
    pub fn reserve(&mut self, new_capacity: usize) {
        self.try_reserve(new_capacity).unwrap_or_else(|e| fail(e))
    }

    /// Fallible form of [`SimpleVector::reserve`]. On failure the vector is
    /// unchanged.
    pub fn try_reserve(&mut self, new_capacity: usize) -> Result<()> {
        if new_capacity <= self.capacity() {
            return Ok(());
        }
        self.reallocate(new_capacity, "reserve")
    }

    /// Changes the size to `new_size`.
    ///
    /// Shrinking only lowers the size. Growing exposes `new_size - len()`
    /// default values, reallocating to `max(new_size, 2 * capacity())` if
    /// the buffer is too small.
    ///
    /// ```
    /// use simvec::SimpleVector;
    ///
    /// let mut v = SimpleVector::from_elem(3, 7);
    /// v.resize(5);
    /// assert_eq!(v, [7, 7, 7, 0, 0]);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the allocation fails.
    pub fn resize(&mut self, new_size: usize) {
        self.try_resize(new_size).unwrap_or_else(|e| fail(e))
    }

    /// Fallible form of [`SimpleVector::resize`]. On failure the vector is
    /// unchanged.
    pub fn try_resize(&mut self, new_size: usize) -> Result<()> {
        if new_size <= self.size {
            self.size = new_size;
        } else if new_size <= self.capacity() {
            self.buffer.as_mut_slice()[self.size..new_size].fill_with(T::default);
            self.size = new_size;
        } else {
            // A fresh buffer is default-filled, so [size, new_size) needs no extra work.
            self.reallocate(self.grown_capacity(new_size), "resize")?;
            self.size = new_size;
        }
        Ok(())
    }

    /// Appends `value` to the end.
    ///
    /// # Panics
    ///
    /// Panics if the allocation fails.
    pub fn push_back(&mut self, value: T) {
        self.try_push_back(value).unwrap_or_else(|e| fail(e))
    }

    /// Fallible form of [`SimpleVector::push_back`]. On failure the vector
    /// is unchanged and `value` is dropped.
    pub fn try_push_back(&mut self, value: T) -> Result<()> {
        let required = self
            .size
            .checked_add(1)
            .ok_or_else(|| Error::capacity_overflow("size + 1"))?;
        if required > self.capacity() {
            self.reallocate(self.grown_capacity(required), "push_back")?;
        }
        *self.buffer.get_mut(self.size) = value;
        self.size = required;
        Ok(())
    }

    /// Inserts `value` at `position`, shifting the elements at and after it
    /// one slot to the right. Returns the index of the inserted element.
    ///
    /// An empty vector with no capacity allocates exactly one slot; a full
    /// vector grows to `max(len() + 1, 2 * capacity())`.
    ///
    /// # Panics
    ///
    /// Panics if `position > len()` or if the allocation fails.
    pub fn insert(&mut self, position: usize, value: T) -> usize {
        assert!(
            position <= self.size,
            "insert position {position} is out of bounds (size {})",
            self.size
        );
        self.try_insert(position, value).unwrap_or_else(|e| fail(e))
    }

    /// Fallible form of [`SimpleVector::insert`].
    ///
    /// # Errors
    ///
    /// Returns an `InvalidArgument` error if `position > len()`, or an
    /// allocation error if growing fails. In both cases the vector is
    /// unchanged.
    pub fn try_insert(&mut self, position: usize, value: T) -> Result<usize> {
        let required = self
            .size
            .checked_add(1)
            .ok_or_else(|| Error::capacity_overflow("size + 1"))?;
        verify_index!(position, required);

        if self.capacity() == 0 {
            let mut fresh = OwningBuffer::new(1)?;
            *fresh.get_mut(position) = value;
            log::trace!("SimpleVector: insert allocates the first slot");
            self.buffer.swap(&mut fresh);
        } else if self.size < self.capacity() {
            let slots = self.buffer.as_mut_slice();
            slots[self.size] = value;
            slots[position..required].rotate_right(1);
        } else {
            let new_capacity = self.grown_capacity(required);
            let mut fresh = OwningBuffer::new(new_capacity)?;
            let old = self.buffer.as_mut_slice();
            let new = fresh.as_mut_slice();
            new[..position].swap_with_slice(&mut old[..position]);
            new[position] = value;
            new[position + 1..required].swap_with_slice(&mut old[position..self.size]);
            log::trace!(
                "SimpleVector: insert grows capacity {} -> {new_capacity} (size {})",
                self.capacity(),
                self.size
            );
            self.buffer.swap(&mut fresh);
        }
        self.size = required;
        Ok(position)
    }

    /// Removes the last element and returns it, or `None` if the vector is
    /// empty. The vacated slot is reset to `T::default()`.
    pub fn pop(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        self.size -= 1;
        Some(std::mem::take(self.buffer.get_mut(self.size)))
    }

    /// Replaces the buffer with a default-filled one of `new_capacity` slots,
    /// moving the live elements across.
    fn reallocate(&mut self, new_capacity: usize, reason: &str) -> Result<()> {
        debug_assert!(new_capacity >= self.size);
        let mut fresh = OwningBuffer::new(new_capacity)?;
        fresh.as_mut_slice()[..self.size]
            .swap_with_slice(&mut self.buffer.as_mut_slice()[..self.size]);
        log::trace!(
            "SimpleVector: {reason} grows capacity {} -> {new_capacity} (size {})",
            self.capacity(),
            self.size
        );
        self.buffer.swap(&mut fresh);
        Ok(())
    }
}

impl<T: Clone> SimpleVector<T> {
    /// Creates a vector of `count` clones of `value`, with
    /// `len() == capacity() == count`.
    ///
    /// # Panics
    ///
    /// Panics if the allocation fails.
    pub fn from_elem(count: usize, value: T) -> SimpleVector<T> {
        Self::try_from_elem(count, value).unwrap_or_else(|e| fail(e))
    }

    /// Fallible form of [`SimpleVector::from_elem`].
    pub fn try_from_elem(count: usize, value: T) -> Result<SimpleVector<T>> {
        Ok(SimpleVector {
            buffer: OwningBuffer::filled(count, &value)?,
            size: count,
        })
    }

    /// Creates a vector holding clones of `items`, with
    /// `len() == capacity() == items.len()`.
    pub fn from_slice(items: &[T]) -> SimpleVector<T> {
        SimpleVector::from_vec(items.to_vec())
    }

    /// Returns an independent copy with the same size and capacity.
    ///
    /// Every slot is cloned, spare slots included.
    pub fn try_clone(&self) -> Result<SimpleVector<T>> {
        let slots = self.buffer.as_slice();
        let buffer = OwningBuffer::from_fn(slots.len(), |i| slots[i].clone())?;
        Ok(SimpleVector {
            buffer,
            size: self.size,
        })
    }

    /// Replaces the contents of `self` with a copy of `other`.
    ///
    /// The copy is built in full before it is swapped in, so if building it
    /// fails `self` is left exactly as it was.
    pub fn assign_from(&mut self, other: &SimpleVector<T>) -> Result<()> {
        let mut copy = other.try_clone()?;
        self.swap(&mut copy);
        Ok(())
    }
}

impl<T: Clone + Default> SimpleVector<T> {
    /// Appends clones of all elements of `items`, growing at most once.
    ///
    /// # Panics
    ///
    /// Panics if the allocation fails.
    pub fn extend_from_slice(&mut self, items: &[T]) {
        self.try_extend_from_slice(items)
            .unwrap_or_else(|e| fail(e))
    }

    /// Fallible form of [`SimpleVector::extend_from_slice`].
    pub fn try_extend_from_slice(&mut self, items: &[T]) -> Result<()> {
        let required = self
            .size
            .checked_add(items.len())
            .ok_or_else(|| Error::capacity_overflow("size + items.len()"))?;
        if required > self.capacity() {
            self.reallocate(self.grown_capacity(required), "extend_from_slice")?;
        }
        self.buffer.as_mut_slice()[self.size..required].clone_from_slice(items);
        self.size = required;
        Ok(())
    }
}

impl<T> Default for SimpleVector<T> {
    fn default() -> Self {
        SimpleVector::new()
    }
}

impl<T: Clone> Clone for SimpleVector<T> {
    fn clone(&self) -> Self {
        self.try_clone().unwrap_or_else(|e| fail(e))
    }

    fn clone_from(&mut self, source: &Self) {
        self.assign_from(source).unwrap_or_else(|e| fail(e))
    }
}

impl<T> std::ops::Index<usize> for SimpleVector<T> {
    type Output = T;

    /// Unchecked against the size in release builds: the caller must ensure
    /// `index < len()`.
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        debug_assert!(index < self.size, "index {index} >= size {}", self.size);
        self.buffer.get(index)
    }
}

impl<T> std::ops::IndexMut<usize> for SimpleVector<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        debug_assert!(index < self.size, "index {index} >= size {}", self.size);
        self.buffer.get_mut(index)
    }
}

/// Range indexing over the live elements, `v[a..b]` and friends.
macro_rules! impl_range_index {
    ($($range:ty),+ $(,)?) => {
        $(
            impl<T> std::ops::Index<$range> for SimpleVector<T> {
                type Output = [T];

                #[inline]
                fn index(&self, range: $range) -> &[T] {
                    &self.as_slice()[range]
                }
            }

            impl<T> std::ops::IndexMut<$range> for SimpleVector<T> {
                #[inline]
                fn index_mut(&mut self, range: $range) -> &mut [T] {
                    &mut self.as_mut_slice()[range]
                }
            }
        )+
    };
}

impl_range_index!(
    std::ops::Range<usize>,
    std::ops::RangeFrom<usize>,
    std::ops::RangeTo<usize>,
    std::ops::RangeFull,
    std::ops::RangeInclusive<usize>,
    std::ops::RangeToInclusive<usize>,
);

impl<T> std::ops::Deref for SimpleVector<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> std::ops::DerefMut for SimpleVector<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for SimpleVector<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for SimpleVector<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> std::borrow::Borrow<[T]> for SimpleVector<T> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for SimpleVector<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimpleVector")
            .field("values", &self.as_slice())
            .field("len", &self.len())
            .field("cap", &self.capacity())
            .finish()
    }
}

impl<T> From<Vec<T>> for SimpleVector<T> {
    fn from(vec: Vec<T>) -> Self {
        SimpleVector::from_vec(vec)
    }
}

impl<T, const N: usize> From<[T; N]> for SimpleVector<T> {
    fn from(items: [T; N]) -> Self {
        SimpleVector::from_vec(Vec::from(items))
    }
}

impl<T: Clone> From<&[T]> for SimpleVector<T> {
    fn from(items: &[T]) -> Self {
        SimpleVector::from_slice(items)
    }
}

impl<T: Default> From<ReserveCapacity> for SimpleVector<T> {
    fn from(request: ReserveCapacity) -> Self {
        SimpleVector::with_reserve(request)
    }
}

impl<T> From<SimpleVector<T>> for Vec<T> {
    fn from(v: SimpleVector<T>) -> Self {
        v.into_vec()
    }
}

#[cold]
#[track_caller]
fn fail(e: Error) -> ! {
    panic!("SimpleVector: {e}")
}
