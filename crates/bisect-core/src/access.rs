//! Random-access containers
//!
//! Provides [`RandomAccess`], the minimal view a search needs over a
//! sequence: its length and constant-time indexed reads.

use std::collections::VecDeque;

/// Indexable, read-only sequence with constant-time element access
///
/// Implementors only ever see `at(index)` with `index < len()`.
pub trait RandomAccess {
    /// Element type
    type Item;

    /// Number of elements
    fn len(&self) -> usize;

    /// Element at `index`
    ///
    /// # Panics
    /// May panic if `index >= self.len()`
    fn at(&self, index: usize) -> &Self::Item;

    /// Check if the sequence has no elements
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> RandomAccess for [T] {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn at(&self, index: usize) -> &T {
        &self[index]
    }
}

impl<T, const N: usize> RandomAccess for [T; N] {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn at(&self, index: usize) -> &T {
        &self[index]
    }
}

impl<T> RandomAccess for Vec<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn at(&self, index: usize) -> &T {
        &self[index]
    }
}

impl<T> RandomAccess for VecDeque<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn at(&self, index: usize) -> &T {
        &self[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_and_vec_agree() {
        let v = vec![1, 2, 3];
        let s: &[i32] = &v;

        assert_eq!(RandomAccess::len(&v), 3);
        assert_eq!(RandomAccess::len(s), 3);
        assert_eq!(*v.at(2), 3);
        assert_eq!(*s.at(0), 1);
    }

    #[test]
    fn array_len_is_const() {
        let a = [7u8; 4];
        assert_eq!(RandomAccess::len(&a), 4);
        assert!(!RandomAccess::is_empty(&a));
    }

    #[test]
    fn deque_indexes_logical_order() {
        let mut d = VecDeque::new();
        d.push_back(2);
        d.push_front(1);
        d.push_back(3);

        assert_eq!(*d.at(0), 1);
        assert_eq!(*d.at(2), 3);
    }

    #[test]
    fn empty_slice_is_empty() {
        let s: &[u32] = &[];
        assert!(RandomAccess::is_empty(s));
    }
}
