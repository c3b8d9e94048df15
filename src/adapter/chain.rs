use crate::generator::{Coroutine, Generator, GeneratorState};

/// Emits every element of each inner source, one source after another.
///
/// Backs both [`chain`] and [`flatten`].
pub struct Flatten<O>
where
    O: Iterator,
    O::Item: IntoIterator,
{
    outer: O,
    current: Option<<O::Item as IntoIterator>::IntoIter>,
    name: &'static str,
}

impl<O> Flatten<O>
where
    O: Iterator,
    O::Item: IntoIterator,
{
    const fn new(outer: O, name: &'static str) -> Self {
        Self {
            outer,
            current: None,
            name,
        }
    }
}

impl<O> Clone for Flatten<O>
where
    O: Iterator + Clone,
    O::Item: IntoIterator,
    <O::Item as IntoIterator>::IntoIter: Clone,
{
    fn clone(&self) -> Self {
        Self {
            outer: self.outer.clone(),
            current: self.current.clone(),
            name: self.name,
        }
    }
}

impl<O> std::fmt::Debug for Flatten<O>
where
    O: Iterator,
    O::Item: IntoIterator,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("Flatten")
            .field("name", &self.name)
            .field("in_source", &self.current.is_some())
            .finish_non_exhaustive()
    }
}

impl<O> Coroutine for Flatten<O>
where
    O: Iterator,
    O::Item: IntoIterator,
{
    type Yield = <O::Item as IntoIterator>::Item;

    fn resume(&mut self) -> GeneratorState<Self::Yield> {
        loop {
            if let Some(inner) = &mut self.current {
                if let Some(element) = inner.next() {
                    return GeneratorState::Yielded(element);
                }
                self.current = None;
            }
            match self.outer.next() {
                Some(source) => self.current = Some(source.into_iter()),
                None => return GeneratorState::Complete,
            }
        }
    }

    fn name(&self) -> &'static str {
        self.name
    }
}

/// Emits every element of the first source, then the second, and so on.
///
/// Empty sources are skipped. With no sources at all the generator completes
/// without emitting. Sources of different concrete types can be combined
/// with the [`chain!`](crate::chain!) macro.
///
/// # Examples
///
/// ```rust
/// use resumable::adapter::chain;
///
/// let values: Vec<i32> = chain([vec![1, 2], vec![], vec![3]]).collect();
/// assert_eq!(values, vec![1, 2, 3]);
///
/// assert_eq!(chain(Vec::<Vec<i32>>::new()).count(), 0);
/// ```
pub fn chain<S>(sources: S) -> Generator<Flatten<S::IntoIter>>
where
    S: IntoIterator,
    S::Item: IntoIterator,
{
    Generator::new(Flatten::new(sources.into_iter(), "chain"))
}

/// Emits the elements of each source produced by `outer`, in order.
///
/// The outer source is pulled lazily: the next inner source is requested
/// only once the current one is exhausted, so `outer` may itself be an
/// infinite generator.
///
/// # Examples
///
/// ```rust
/// use resumable::adapter::{count, flatten, map};
///
/// let runs = map(|length: usize| vec![length; length], count(1, 1));
/// let values: Vec<usize> = flatten(runs).take(6).collect();
/// assert_eq!(values, vec![1, 2, 2, 3, 3, 3]);
/// ```
pub fn flatten<S>(outer: S) -> Generator<Flatten<S::IntoIter>>
where
    S: IntoIterator,
    S::Item: IntoIterator,
{
    Generator::new(Flatten::new(outer.into_iter(), "flatten"))
}

/// Chains sources of different types that share an element type.
///
/// Each source is boxed, so any mix of collections, iterators and
/// generators is accepted.
///
/// # Examples
///
/// ```rust
/// use resumable::{adapter::repeat, chain};
///
/// let values: Vec<i32> = chain![vec![1, 2], [3], repeat(0, Some(2))].collect();
/// assert_eq!(values, vec![1, 2, 3, 0, 0]);
/// ```
#[macro_export]
macro_rules! chain {
    ($($source:expr),+ $(,)?) => {
        $crate::adapter::chain(::std::vec![
            $(
                ::std::boxed::Box::new(::std::iter::IntoIterator::into_iter($source))
                    as ::std::boxed::Box<dyn ::std::iter::Iterator<Item = _> + '_>
            ),+
        ])
    };
}
