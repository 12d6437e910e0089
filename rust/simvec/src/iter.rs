//! Iteration over [`SimpleVector`], plus collecting into and extending one.
//!
//! Every iterator visits exactly the live elements `[0, len())`, in index
//! order; slice iterators are double-ended, so `.rev()` walks them backwards.

use crate::SimpleVector;

/// By-value iterator over the live elements of a [`SimpleVector`].
pub type IntoIter<T> = std::vec::IntoIter<T>;

impl<T> IntoIterator for SimpleVector<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a SimpleVector<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut SimpleVector<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// Collects into a vector with `len() == capacity()`.
impl<T> FromIterator<T> for SimpleVector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        SimpleVector::from_vec(iter.into_iter().collect())
    }
}

/// Appends each item with [`SimpleVector::push_back`], so capacity follows
/// the usual doubling policy.
impl<T: Default> Extend<T> for SimpleVector<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<'a, T: Copy + Default + 'a> Extend<&'a T> for SimpleVector<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        for &item in iter {
            self.push_back(item);
        }
    }
}
