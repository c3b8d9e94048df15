//! Finite, indexable sources for the combinatorial generators.
//!
//! Adapters only need in-order iteration and accept any [`IntoIterator`].
//! The combinatorial engine additionally needs a known length and random
//! access, which is what [`Sequence`] provides. Collections opt in
//! explicitly; nothing is patched onto foreign types beyond the standard
//! containers below.
//!
//! A generator owns its source. Pass a reference, an `Rc` or an `Arc` to
//! share one collection between several generators.
//!
//! # Examples
//!
//! ```rust
//! use resumable::source::Sequence;
//!
//! let letters = vec!['x', 'y', 'z'];
//! assert_eq!(Sequence::len(&letters), 3);
//! assert_eq!(Sequence::get(&letters, 1), Some(&'y'));
//! assert_eq!(letters.elements().copied().collect::<String>(), "xyz");
//! ```

use std::collections::VecDeque;
use std::iter::FusedIterator;
use std::rc::Rc;
use std::sync::Arc;

/// An ordered collection with a stable length and positional lookup.
///
/// # Laws
///
/// For a sequence `s` that is not mutated:
///
/// - `s.get(i).is_some()` exactly when `i < s.len()`
/// - `s.elements()` visits `s.get(0)`, `s.get(1)`, ... in that order
/// - repeated calls return the same elements
pub trait Sequence {
    /// The element type.
    type Item;

    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns the element at `index`, or `None` if out of bounds.
    fn get(&self, index: usize) -> Option<&Self::Item>;

    /// Returns `true` if the sequence has no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates the elements in order.
    fn elements(&self) -> Elements<'_, Self> {
        Elements {
            sequence: self,
            front: 0,
            back: self.len(),
        }
    }
}

/// In-order iterator over a [`Sequence`].
pub struct Elements<'a, S: ?Sized> {
    sequence: &'a S,
    front: usize,
    back: usize,
}

impl<'a, S: Sequence + ?Sized> Iterator for Elements<'a, S> {
    type Item = &'a S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let element = self.sequence.get(self.front);
        self.front += 1;
        element
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<S: Sequence + ?Sized> DoubleEndedIterator for Elements<'_, S> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.sequence.get(self.back)
    }
}

impl<S: Sequence + ?Sized> ExactSizeIterator for Elements<'_, S> {}

impl<S: Sequence + ?Sized> FusedIterator for Elements<'_, S> {}

impl<S: ?Sized> Clone for Elements<'_, S> {
    fn clone(&self) -> Self {
        Self {
            sequence: self.sequence,
            front: self.front,
            back: self.back,
        }
    }
}

/// Clones the element at `index`.
///
/// # Panics
///
/// Panics if `index` is out of bounds. The combinatorial engines only
/// produce indices below the `len` the sequence reported, so this fires
/// only for a `Sequence` whose `get` disagrees with its `len`.
pub(crate) fn element_at<S>(sequence: &S, index: usize) -> S::Item
where
    S: Sequence + ?Sized,
    S::Item: Clone,
{
    match sequence.get(index) {
        Some(element) => element.clone(),
        None => panic!(
            "index {index} out of bounds for sequence of length {}",
            sequence.len()
        ),
    }
}

/// Collects the elements at `indices` into a new tuple.
///
/// # Panics
///
/// Panics if any index is out of bounds; see [`element_at`].
pub(crate) fn select<S>(sequence: &S, indices: &[usize]) -> Vec<S::Item>
where
    S: Sequence + ?Sized,
    S::Item: Clone,
{
    indices
        .iter()
        .map(|&index| element_at(sequence, index))
        .collect()
}

impl<T> Sequence for [T] {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        <[T]>::get(self, index)
    }
}

impl<T, const N: usize> Sequence for [T; N] {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }
}

impl<T> Sequence for Vec<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        Self::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }
}

impl<T> Sequence for VecDeque<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        Self::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        Self::get(self, index)
    }
}

impl<S: Sequence + ?Sized> Sequence for &S {
    type Item = S::Item;

    #[inline]
    fn len(&self) -> usize {
        (**self).len()
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&Self::Item> {
        (**self).get(index)
    }
}

impl<S: Sequence + ?Sized> Sequence for Box<S> {
    type Item = S::Item;

    #[inline]
    fn len(&self) -> usize {
        (**self).len()
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&Self::Item> {
        (**self).get(index)
    }
}

impl<S: Sequence + ?Sized> Sequence for Rc<S> {
    type Item = S::Item;

    #[inline]
    fn len(&self) -> usize {
        (**self).len()
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&Self::Item> {
        (**self).get(index)
    }
}

impl<S: Sequence + ?Sized> Sequence for Arc<S> {
    type Item = S::Item;

    #[inline]
    fn len(&self) -> usize {
        (**self).len()
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&Self::Item> {
        (**self).get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn collect<S: Sequence>(sequence: &S) -> Vec<S::Item>
    where
        S::Item: Clone,
    {
        sequence.elements().cloned().collect()
    }

    #[rstest]
    fn test_sequence_impls_agree() {
        let vector = vec![1, 2, 3];
        let array = [1, 2, 3];
        let deque: VecDeque<i32> = vector.iter().copied().collect();
        let shared: Rc<[i32]> = Rc::from(vector.as_slice());
        let atomic: Arc<Vec<i32>> = Arc::new(vector.clone());
        let boxed: Box<[i32]> = vector.clone().into_boxed_slice();

        assert_eq!(collect(&vector), vec![1, 2, 3]);
        assert_eq!(collect(&array), vec![1, 2, 3]);
        assert_eq!(collect(&deque), vec![1, 2, 3]);
        assert_eq!(collect(&shared), vec![1, 2, 3]);
        assert_eq!(collect(&atomic), vec![1, 2, 3]);
        assert_eq!(collect(&boxed), vec![1, 2, 3]);
        assert_eq!(collect(&vector.as_slice()), vec![1, 2, 3]);
    }

    #[rstest]
    #[case(0, Some(&'a'))]
    #[case(2, Some(&'c'))]
    #[case(3, None)]
    fn test_get_bounds(#[case] index: usize, #[case] expected: Option<&char>) {
        let letters = ['a', 'b', 'c'];
        assert_eq!(Sequence::get(&letters, index), expected);
    }

    #[rstest]
    fn test_elements_is_double_ended_and_exact() {
        let numbers = vec![1, 2, 3, 4];
        let mut elements = numbers.elements();
        assert_eq!(elements.len(), 4);
        assert_eq!(elements.next_back(), Some(&4));
        assert_eq!(elements.next(), Some(&1));
        assert_eq!(elements.len(), 2);
        assert_eq!(elements.rev().copied().collect::<Vec<_>>(), vec![3, 2]);
    }

    #[rstest]
    fn test_empty_sequence() {
        let empty: Vec<u8> = Vec::new();
        assert!(Sequence::is_empty(&empty));
        assert_eq!(empty.elements().next(), None);
    }

    #[rstest]
    fn test_select_follows_index_order() {
        let letters = vec!['a', 'b', 'c', 'd'];
        assert_eq!(select(&letters, &[3, 0, 2]), vec!['d', 'a', 'c']);
        assert_eq!(select(&letters, &[]), Vec::<char>::new());
    }

    /// Reports three elements but only stores one.
    struct Truncated([u8; 1]);

    impl Sequence for Truncated {
        type Item = u8;

        fn len(&self) -> usize {
            3
        }

        fn get(&self, index: usize) -> Option<&u8> {
            self.0.get(index)
        }
    }

    #[rstest]
    #[should_panic(expected = "index 2 out of bounds for sequence of length 3")]
    fn test_select_panics_instead_of_shortening_the_tuple() {
        select(&Truncated([7]), &[0, 2]);
    }

    #[rstest]
    fn test_element_at_clones_in_bounds_element() {
        assert_eq!(element_at(&Truncated([7]), 0), 7);
    }
}
