use super::indices::ProductIndices;
use crate::generator::{Coroutine, Generator, GeneratorState};
use crate::source::{Sequence, element_at};

/// Emits the cartesian product of several sources.
#[derive(Debug, Clone)]
pub struct Product<S> {
    sources: Vec<S>,
    engine: ProductIndices,
}

impl<S> Coroutine for Product<S>
where
    S: Sequence,
    S::Item: Clone,
{
    type Yield = Vec<S::Item>;

    fn resume(&mut self) -> GeneratorState<Vec<S::Item>> {
        let Self { sources, engine } = self;
        engine
            .advance()
            .map(|indices| {
                indices
                    .iter()
                    .zip(sources.iter())
                    .map(|(&index, source)| element_at(source, index))
                    .collect()
            })
            .into()
    }

    fn name(&self) -> &'static str {
        "product"
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.engine.size_hint()
    }
}

/// Lazily emits one element from each source, for every combination of
/// choices.
///
/// Tuples are ordered like an odometer: the last source varies fastest. An
/// empty source makes the whole product empty, and no sources at all yield
/// a single empty tuple.
///
/// # Examples
///
/// ```rust
/// use resumable::combinatorics::product;
///
/// let grid: Vec<Vec<i32>> = product(vec![vec![0, 1], vec![5, 6, 7]]).collect();
/// assert_eq!(
///     grid,
///     vec![vec![0, 5], vec![0, 6], vec![0, 7], vec![1, 5], vec![1, 6], vec![1, 7]]
/// );
/// ```
pub fn product<S>(sources: Vec<S>) -> Generator<Product<S>>
where
    S: Sequence,
    S::Item: Clone,
{
    let engine = ProductIndices::new(sources.iter().map(Sequence::len).collect());
    Generator::new(Product { sources, engine })
}
