use super::indices::PermutationIndices;
use crate::generator::{Coroutine, Generator, GeneratorState};
use crate::source::{Sequence, select};

/// Emits ordered selections of distinct source positions.
#[derive(Debug, Clone)]
pub struct Permutations<S> {
    source: S,
    engine: PermutationIndices,
}

impl<S> Permutations<S> {
    /// The underlying index engine.
    pub const fn engine(&self) -> &PermutationIndices {
        &self.engine
    }
}

impl<S> Coroutine for Permutations<S>
where
    S: Sequence,
    S::Item: Clone,
{
    type Yield = Vec<S::Item>;

    fn resume(&mut self) -> GeneratorState<Vec<S::Item>> {
        let Self { source, engine } = self;
        engine
            .advance()
            .map(|indices| select(source, indices))
            .into()
    }

    fn name(&self) -> &'static str {
        "permutations"
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.engine.size_hint()
    }
}

/// Lazily emits every ordering of `r` distinct positions of `source`.
///
/// `r` defaults to the source length, giving full permutations. Output is
/// in lexicographic order of positions; a sorted source therefore yields
/// sorted output. If `r` exceeds the source length nothing is emitted.
///
/// # Examples
///
/// ```rust
/// use resumable::combinatorics::permutations;
///
/// let orders: Vec<Vec<char>> = permutations(vec!['x', 'y', 'z'], None).collect();
/// assert_eq!(orders.len(), 6);
/// assert_eq!(orders[0], vec!['x', 'y', 'z']);
/// assert_eq!(orders[5], vec!['z', 'y', 'x']);
///
/// let pairs: Vec<Vec<u8>> = permutations([1, 2, 3], Some(2)).collect();
/// assert_eq!(
///     pairs,
///     vec![vec![1, 2], vec![1, 3], vec![2, 1], vec![2, 3], vec![3, 1], vec![3, 2]]
/// );
/// ```
pub fn permutations<S>(source: S, r: Option<usize>) -> Generator<Permutations<S>>
where
    S: Sequence,
    S::Item: Clone,
{
    let n = source.len();
    let engine = PermutationIndices::new(n, r.unwrap_or(n));
    Generator::new(Permutations { source, engine })
}

/// Emits the raw index tuples of the `r`-permutations of `0..n`.
pub fn permutation_indices(n: usize, r: usize) -> Generator<PermutationIndices> {
    Generator::new(PermutationIndices::new(n, r))
}
