use std::ops::RangeInclusive;

use super::combinations::{Combinations, combinations};
use crate::generator::{Coroutine, Generator, GeneratorState};
use crate::source::Sequence;
use crate::trace::trace_event;

/// Emits one combinations generator per subset size, smallest size first.
#[derive(Debug, Clone)]
pub struct Powerset<S> {
    source: S,
    sizes: RangeInclusive<usize>,
}

impl<S> Coroutine for Powerset<S>
where
    S: Sequence + Clone,
    S::Item: Clone,
{
    type Yield = Generator<Combinations<S>>;

    fn resume(&mut self) -> GeneratorState<Self::Yield> {
        self.sizes
            .next()
            .map(|size| combinations(self.source.clone(), size))
            .into()
    }

    fn name(&self) -> &'static str {
        "powerset"
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.sizes.size_hint()
    }
}

/// Lazily emits every subset of `source`, grouped by size.
///
/// Equivalent to [`powerset_from`] with a minimum size of zero.
///
/// # Examples
///
/// ```rust
/// use resumable::combinatorics::powerset;
///
/// let groups: Vec<Vec<Vec<i32>>> = powerset(vec![1, 2, 3])
///     .map(|group| group.collect())
///     .collect();
/// assert_eq!(
///     groups,
///     vec![
///         vec![vec![]],
///         vec![vec![1], vec![2], vec![3]],
///         vec![vec![1, 2], vec![1, 3], vec![2, 3]],
///         vec![vec![1, 2, 3]],
///     ]
/// );
/// ```
pub fn powerset<S>(source: S) -> Generator<Powerset<S>>
where
    S: Sequence + Clone,
    S::Item: Clone,
{
    powerset_from(source, 0)
}

/// Lazily emits the subsets of `source` with at least `min` elements.
///
/// Each emitted value is itself a generator over the combinations of one
/// size, for sizes `min..=n` in increasing order. Groups may be consumed
/// partially or not at all; every group carries its own copy of `source`,
/// so a cheaply cloned source (a reference or an `Rc`) is preferable for
/// large inputs. A `min` above the source length emits no groups.
///
/// # Examples
///
/// ```rust
/// use resumable::combinatorics::powerset_from;
///
/// let letters = ['a', 'b', 'c'];
/// let sizes: Vec<usize> = powerset_from(&letters[..], 2).map(Iterator::count).collect();
/// assert_eq!(sizes, vec![3, 1]);
///
/// assert_eq!(powerset_from(&letters[..], 4).count(), 0);
/// ```
pub fn powerset_from<S>(source: S, min: usize) -> Generator<Powerset<S>>
where
    S: Sequence + Clone,
    S::Item: Clone,
{
    let n = source.len();
    if min > n {
        trace_event!(
            debug,
            min,
            n,
            "minimum subset size exceeds source length; no groups will be emitted"
        );
    }
    Generator::new(Powerset {
        source,
        sizes: min..=n,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_powerset_of_empty_source_is_one_empty_group() {
        let groups: Vec<Vec<Vec<u8>>> = powerset(Vec::<u8>::new())
            .map(|group| group.collect())
            .collect();
        assert_eq!(groups, vec![vec![Vec::<u8>::new()]]);
    }

    #[rstest]
    #[case(0, 4)]
    #[case(2, 2)]
    #[case(3, 1)]
    #[case(4, 0)]
    fn test_group_count(#[case] min: usize, #[case] expected: usize) {
        assert_eq!(powerset_from(vec![1, 2, 3], min).count(), expected);
    }

    #[rstest]
    fn test_total_subsets() {
        let total: usize = powerset(vec!['a', 'b', 'c', 'd', 'e'])
            .map(Iterator::count)
            .sum();
        assert_eq!(total, 32);
    }

    #[rstest]
    fn test_groups_can_be_skipped() {
        let mut generator = powerset(vec![1, 2]);
        generator.next();
        generator.next();
        let last: Vec<Vec<i32>> = generator.next().into_iter().flatten().collect();
        assert_eq!(last, vec![vec![1, 2]]);
        assert!(matches!(generator.resume(), Ok(GeneratorState::Complete)));
    }

    #[rstest]
    fn test_size_hint_counts_groups() {
        assert_eq!(powerset(vec![1, 2, 3]).size_hint(), (4, Some(4)));
    }
}
