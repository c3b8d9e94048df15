use std::ops::Add;

use crate::generator::{Coroutine, Generator, GeneratorState};
use crate::trace::trace_event;

/// Emits the same value a fixed number of times, or forever.
#[derive(Debug, Clone)]
pub struct Repeat<T> {
    value: T,
    remaining: Option<usize>,
}

impl<T: Clone> Coroutine for Repeat<T> {
    type Yield = T;

    fn resume(&mut self) -> GeneratorState<T> {
        match &mut self.remaining {
            None => GeneratorState::Yielded(self.value.clone()),
            Some(0) => GeneratorState::Complete,
            Some(remaining) => {
                *remaining -= 1;
                GeneratorState::Yielded(self.value.clone())
            }
        }
    }

    fn name(&self) -> &'static str {
        "repeat"
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.remaining
            .map_or((usize::MAX, None), |remaining| (remaining, Some(remaining)))
    }
}

/// Emits `value` `times` times, or forever when `times` is `None`.
///
/// # Examples
///
/// ```rust
/// use resumable::adapter::repeat;
///
/// assert_eq!(repeat("ab", Some(3)).collect::<Vec<_>>(), vec!["ab", "ab", "ab"]);
/// assert_eq!(repeat(7, None).take(2).collect::<Vec<_>>(), vec![7, 7]);
/// assert_eq!(repeat(7, Some(0)).count(), 0);
/// ```
pub fn repeat<T: Clone>(value: T, times: Option<usize>) -> Generator<Repeat<T>> {
    Generator::new(Repeat {
        value,
        remaining: times,
    })
}

/// Records a source on its first pass and replays the record forever.
#[derive(Debug, Clone)]
pub struct Cycle<I: Iterator> {
    source: Option<I>,
    saved: Vec<I::Item>,
    position: usize,
}

impl<I> Coroutine for Cycle<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Yield = I::Item;

    fn resume(&mut self) -> GeneratorState<I::Item> {
        if let Some(source) = &mut self.source {
            if let Some(element) = source.next() {
                self.saved.push(element.clone());
                return GeneratorState::Yielded(element);
            }
            self.source = None;
            if self.saved.is_empty() {
                trace_event!(debug, "cycle over an empty source");
                return GeneratorState::Complete;
            }
        }

        match self.saved.get(self.position) {
            Some(element) => {
                self.position = (self.position + 1) % self.saved.len();
                GeneratorState::Yielded(element.clone())
            }
            None => GeneratorState::Complete,
        }
    }

    fn name(&self) -> &'static str {
        "cycle"
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if !self.saved.is_empty() {
            return (usize::MAX, None);
        }
        match &self.source {
            None => (0, Some(0)),
            Some(source) => match source.size_hint() {
                (0, Some(0)) => (0, Some(0)),
                (0, _) => (0, None),
                _ => (usize::MAX, None),
            },
        }
    }
}

/// Emits the elements of `source`, then repeats them forever.
///
/// The first pass records every element; later passes replay the record, so
/// the source is iterated only once. An empty source completes immediately.
///
/// # Examples
///
/// ```rust
/// use resumable::adapter::cycle;
///
/// let values: Vec<i32> = cycle([1, 2, 3]).take(7).collect();
/// assert_eq!(values, vec![1, 2, 3, 1, 2, 3, 1]);
///
/// assert_eq!(cycle(Vec::<i32>::new()).next(), None);
/// ```
pub fn cycle<S>(source: S) -> Generator<Cycle<S::IntoIter>>
where
    S: IntoIterator,
    S::Item: Clone,
{
    Generator::new(Cycle {
        source: Some(source.into_iter()),
        saved: Vec::new(),
        position: 0,
    })
}

/// An unbounded arithmetic sequence.
#[derive(Debug, Clone)]
pub struct Count<T> {
    current: T,
    step: T,
    started: bool,
}

impl<T> Coroutine for Count<T>
where
    T: Clone + Add<Output = T>,
{
    type Yield = T;

    #[inline]
    fn resume(&mut self) -> GeneratorState<T> {
        if self.started {
            self.current = self.current.clone() + self.step.clone();
        }
        self.started = true;
        GeneratorState::Yielded(self.current.clone())
    }

    fn name(&self) -> &'static str {
        "count"
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

/// Emits `start`, `start + step`, `start + step + step`, ... forever.
///
/// Any `Clone + Add` type works, including floating point steps. Integer
/// overflow behaves as `+` does for the type: it panics in debug builds.
///
/// # Examples
///
/// ```rust
/// use resumable::adapter::count;
///
/// assert_eq!(count(10, 5).take(3).collect::<Vec<_>>(), vec![10, 15, 20]);
/// assert_eq!(count(0.0, 0.25).take(3).collect::<Vec<_>>(), vec![0.0, 0.25, 0.5]);
/// ```
pub fn count<T>(start: T, step: T) -> Generator<Count<T>>
where
    T: Clone + Add<Output = T>,
{
    Generator::new(Count {
        current: start,
        step,
        started: false,
    })
}
