use super::indices::{CombinationIndices, ReplacementIndices};
use crate::generator::{Coroutine, Generator, GeneratorState};
use crate::source::{Sequence, select};

/// Emits the `r`-element combinations of a source in lexicographic
/// position order.
#[derive(Debug, Clone)]
pub struct Combinations<S> {
    source: S,
    engine: CombinationIndices,
}

impl<S> Combinations<S> {
    /// The underlying index engine.
    pub const fn engine(&self) -> &CombinationIndices {
        &self.engine
    }
}

impl<S> Coroutine for Combinations<S>
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
        "combinations"
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.engine.size_hint()
    }
}

/// Lazily emits every `r`-element subsequence of `source`.
///
/// Elements keep their source order within each combination, and
/// combinations are ordered lexicographically by position. Equal elements
/// at different positions count as distinct. If `r` exceeds the source
/// length nothing is emitted.
///
/// The source is owned by the generator; pass a reference, `Rc` or `Arc`
/// to share one source between generators.
///
/// # Examples
///
/// ```rust
/// use resumable::combinatorics::combinations;
///
/// let letters = ['a', 'b', 'c', 'd'];
/// let pairs: Vec<String> = combinations(&letters, 2)
///     .map(|pair| pair.into_iter().collect())
///     .collect();
/// assert_eq!(pairs, vec!["ab", "ac", "ad", "bc", "bd", "cd"]);
///
/// assert_eq!(combinations(&letters, 5).count(), 0);
/// ```
pub fn combinations<S>(source: S, r: usize) -> Generator<Combinations<S>>
where
    S: Sequence,
    S::Item: Clone,
{
    let engine = CombinationIndices::new(source.len(), r);
    Generator::new(Combinations { source, engine })
}

/// Emits the `r`-element combinations with repetition of a source.
#[derive(Debug, Clone)]
pub struct CombinationsWithReplacement<S> {
    source: S,
    engine: ReplacementIndices,
}

impl<S> CombinationsWithReplacement<S> {
    /// The underlying index engine.
    pub const fn engine(&self) -> &ReplacementIndices {
        &self.engine
    }
}

impl<S> Coroutine for CombinationsWithReplacement<S>
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
        "combinations_with_replacement"
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.engine.size_hint()
    }
}

/// Lazily emits every non-decreasing `r`-tuple of source positions, mapped
/// to elements.
///
/// A position may repeat within a tuple, so `r` may exceed the source
/// length. An empty source emits nothing unless `r` is zero.
///
/// # Examples
///
/// ```rust
/// use resumable::combinatorics::combinations_with_replacement;
///
/// let tuples: Vec<Vec<u8>> = combinations_with_replacement(vec![1, 2, 3], 2).collect();
/// assert_eq!(
///     tuples,
///     vec![vec![1, 1], vec![1, 2], vec![1, 3], vec![2, 2], vec![2, 3], vec![3, 3]]
/// );
/// ```
pub fn combinations_with_replacement<S>(
    source: S,
    r: usize,
) -> Generator<CombinationsWithReplacement<S>>
where
    S: Sequence,
    S::Item: Clone,
{
    let engine = ReplacementIndices::new(source.len(), r);
    Generator::new(CombinationsWithReplacement { source, engine })
}

/// Emits the raw index tuples of `n` choose `r`.
///
/// # Examples
///
/// ```rust
/// use resumable::combinatorics::combination_indices;
///
/// let tuples: Vec<Vec<usize>> = combination_indices(3, 2).collect();
/// assert_eq!(tuples, vec![vec![0, 1], vec![0, 2], vec![1, 2]]);
/// ```
pub fn combination_indices(n: usize, r: usize) -> Generator<CombinationIndices> {
    Generator::new(CombinationIndices::new(n, r))
}

/// Emits the raw non-decreasing index tuples of `n` multichoose `r`.
pub fn replacement_combination_indices(n: usize, r: usize) -> Generator<ReplacementIndices> {
    Generator::new(ReplacementIndices::new(n, r))
}
