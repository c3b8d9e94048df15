use crate::generator::{Coroutine, Generator, GeneratorState};

/// Emits the elements at positions `start, start + step, ...` below `stop`.
#[derive(Debug, Clone)]
pub struct Slice<I> {
    source: I,
    position: usize,
    target: usize,
    stop: Option<usize>,
    step: usize,
}

impl<I: Iterator> Coroutine for Slice<I> {
    type Yield = I::Item;

    fn resume(&mut self) -> GeneratorState<I::Item> {
        if self.stop.is_some_and(|stop| self.target >= stop) {
            return GeneratorState::Complete;
        }
        loop {
            let Some(element) = self.source.next() else {
                return GeneratorState::Complete;
            };
            let position = self.position;
            self.position += 1;
            if position == self.target {
                self.target = self.target.saturating_add(self.step);
                return GeneratorState::Yielded(element);
            }
        }
    }

    fn name(&self) -> &'static str {
        "slice"
    }
}

/// Lazily selects positions `start..stop` of `source`, every `step`-th one.
///
/// With `stop == None` the slice runs to the end of the source. Once the
/// next selected position would reach `stop`, the source is not pulled
/// again.
///
/// # Panics
///
/// Panics if `step` is zero.
///
/// # Examples
///
/// ```rust
/// use resumable::adapter::{count, slice};
///
/// let values: Vec<u32> = slice(count(0, 1), 2, Some(11), 3).collect();
/// assert_eq!(values, vec![2, 5, 8]);
///
/// let tail: Vec<char> = slice("abcde".chars(), 3, None, 1).collect();
/// assert_eq!(tail, vec!['d', 'e']);
/// ```
pub fn slice<S: IntoIterator>(
    source: S,
    start: usize,
    stop: Option<usize>,
    step: usize,
) -> Generator<Slice<S::IntoIter>> {
    assert!(step != 0, "slice step must be non-zero");
    Generator::new(Slice {
        source: source.into_iter(),
        position: 0,
        target: start,
        stop,
        step,
    })
}

/// Emits successive overlapping pairs.
#[derive(Debug, Clone)]
pub struct Pairwise<I: Iterator> {
    source: I,
    previous: Option<I::Item>,
}

impl<I> Coroutine for Pairwise<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Yield = (I::Item, I::Item);

    fn resume(&mut self) -> GeneratorState<Self::Yield> {
        let previous = match self.previous.take() {
            Some(previous) => previous,
            None => match self.source.next() {
                Some(first) => first,
                None => return GeneratorState::Complete,
            },
        };
        let Some(current) = self.source.next() else {
            return GeneratorState::Complete;
        };
        self.previous = Some(current.clone());
        GeneratorState::Yielded((previous, current))
    }

    fn name(&self) -> &'static str {
        "pairwise"
    }
}

/// Emits `(a, b)`, `(b, c)`, ... for a source `a, b, c, ...`.
///
/// Sources with fewer than two elements emit nothing.
///
/// # Examples
///
/// ```rust
/// use resumable::adapter::pairwise;
///
/// let gaps: Vec<i32> = pairwise([1, 4, 9, 16]).map(|(a, b)| b - a).collect();
/// assert_eq!(gaps, vec![3, 5, 7]);
/// ```
pub fn pairwise<S>(source: S) -> Generator<Pairwise<S::IntoIter>>
where
    S: IntoIterator,
    S::Item: Clone,
{
    Generator::new(Pairwise {
        source: source.into_iter(),
        previous: None,
    })
}
