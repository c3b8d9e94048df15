use crate::generator::{Coroutine, Generator, GeneratorState};

/// Emits the elements whose predicate result equals `keep`.
///
/// Backs [`filter`] (`keep == true`) and [`filter_negated`]
/// (`keep == false`).
#[derive(Clone)]
pub struct Filter<P, I> {
    predicate: P,
    source: I,
    keep: bool,
}

impl<T, P, I> Coroutine for Filter<P, I>
where
    I: Iterator<Item = T>,
    P: FnMut(&T) -> bool,
{
    type Yield = T;

    fn resume(&mut self) -> GeneratorState<T> {
        let keep = self.keep;
        let predicate = &mut self.predicate;
        self.source
            .find(|element| predicate(element) == keep)
            .into()
    }

    fn name(&self) -> &'static str {
        if self.keep { "filter" } else { "filter_negated" }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.source.size_hint().1)
    }
}

impl<P, I> std::fmt::Debug for Filter<P, I> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("Filter")
            .field("keep", &self.keep)
            .finish_non_exhaustive()
    }
}

/// Emits the elements for which `predicate` returns `true`.
///
/// # Examples
///
/// ```rust
/// use resumable::adapter::filter;
///
/// let evens: Vec<i32> = filter(|x: &i32| x % 2 == 0, 1..=6).collect();
/// assert_eq!(evens, vec![2, 4, 6]);
/// ```
pub fn filter<P, S>(predicate: P, source: S) -> Generator<Filter<P, S::IntoIter>>
where
    S: IntoIterator,
    P: FnMut(&S::Item) -> bool,
{
    Generator::new(Filter {
        predicate,
        source: source.into_iter(),
        keep: true,
    })
}

/// Emits the elements for which `predicate` returns `false`.
///
/// # Examples
///
/// ```rust
/// use resumable::adapter::filter_negated;
///
/// let odds: Vec<i32> = filter_negated(|x: &i32| x % 2 == 0, 1..=6).collect();
/// assert_eq!(odds, vec![1, 3, 5]);
/// ```
pub fn filter_negated<P, S>(predicate: P, source: S) -> Generator<Filter<P, S::IntoIter>>
where
    S: IntoIterator,
    P: FnMut(&S::Item) -> bool,
{
    Generator::new(Filter {
        predicate,
        source: source.into_iter(),
        keep: false,
    })
}

/// Emits elements while the predicate holds.
#[derive(Clone)]
pub struct TakeWhile<P, I> {
    predicate: P,
    source: I,
}

impl<T, P, I> Coroutine for TakeWhile<P, I>
where
    I: Iterator<Item = T>,
    P: FnMut(&T) -> bool,
{
    type Yield = T;

    fn resume(&mut self) -> GeneratorState<T> {
        match self.source.next() {
            Some(element) if (self.predicate)(&element) => GeneratorState::Yielded(element),
            _ => GeneratorState::Complete,
        }
    }

    fn name(&self) -> &'static str {
        "take_while"
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.source.size_hint().1)
    }
}

impl<P, I> std::fmt::Debug for TakeWhile<P, I> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("TakeWhile").finish_non_exhaustive()
    }
}

/// Emits elements while `predicate` holds and completes at the first
/// element that fails it.
///
/// The failing element is consumed from the source and discarded. The
/// source is never pulled again afterwards.
///
/// # Examples
///
/// ```rust
/// use resumable::adapter::take_while;
///
/// let prefix: Vec<i32> = take_while(|x: &i32| *x < 5, [1, 4, 6, 4, 1]).collect();
/// assert_eq!(prefix, vec![1, 4]);
/// ```
pub fn take_while<P, S>(predicate: P, source: S) -> Generator<TakeWhile<P, S::IntoIter>>
where
    S: IntoIterator,
    P: FnMut(&S::Item) -> bool,
{
    Generator::new(TakeWhile {
        predicate,
        source: source.into_iter(),
    })
}

/// Discards a prefix while the predicate holds, then forwards everything.
#[derive(Clone)]
pub struct DropWhile<P, I> {
    predicate: P,
    source: I,
    dropping: bool,
}

impl<T, P, I> Coroutine for DropWhile<P, I>
where
    I: Iterator<Item = T>,
    P: FnMut(&T) -> bool,
{
    type Yield = T;

    fn resume(&mut self) -> GeneratorState<T> {
        if self.dropping {
            self.dropping = false;
            let predicate = &mut self.predicate;
            return self.source.find(|element| !predicate(element)).into();
        }
        self.source.next().into()
    }

    fn name(&self) -> &'static str {
        "drop_while"
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.source.size_hint();
        if self.dropping { (0, upper) } else { (lower, upper) }
    }
}

impl<P, I> std::fmt::Debug for DropWhile<P, I> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("DropWhile")
            .field("dropping", &self.dropping)
            .finish_non_exhaustive()
    }
}

/// Discards elements while `predicate` holds, then emits the first failing
/// element and every element after it, unfiltered.
///
/// # Examples
///
/// ```rust
/// use resumable::adapter::drop_while;
///
/// let rest: Vec<i32> = drop_while(|x: &i32| *x < 5, [1, 4, 6, 4, 1]).collect();
/// assert_eq!(rest, vec![6, 4, 1]);
/// ```
pub fn drop_while<P, S>(predicate: P, source: S) -> Generator<DropWhile<P, S::IntoIter>>
where
    S: IntoIterator,
    P: FnMut(&S::Item) -> bool,
{
    Generator::new(DropWhile {
        predicate,
        source: source.into_iter(),
        dropping: true,
    })
}

/// Truthiness of a `compress` selector.
pub trait Selector {
    /// Returns `true` if the paired element is kept.
    fn is_selected(&self) -> bool;
}

impl Selector for bool {
    #[inline]
    fn is_selected(&self) -> bool {
        *self
    }
}

macro_rules! impl_selector_for_numbers {
    ($zero:literal => $($number:ty),+) => {
        $(
            impl Selector for $number {
                #[inline]
                fn is_selected(&self) -> bool {
                    *self != $zero
                }
            }
        )+
    };
}

impl_selector_for_numbers!(0 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_selector_for_numbers!(0.0 => f32, f64);

impl<T> Selector for Option<T> {
    #[inline]
    fn is_selected(&self) -> bool {
        self.is_some()
    }
}

impl<S: Selector + ?Sized> Selector for &S {
    #[inline]
    fn is_selected(&self) -> bool {
        (**self).is_selected()
    }
}

/// Returns the elements of `data` whose paired selector is truthy.
///
/// Unlike the other adapters this one is eager. Pairing stops at the shorter
/// of the two inputs.
///
/// # Examples
///
/// ```rust
/// use resumable::adapter::compress;
///
/// assert_eq!(compress([1, 2, 3, 4, 5, 6], [1, 0, 1, 0, 1, 1]), vec![1, 3, 5, 6]);
/// assert_eq!(compress("abc".chars(), [true, false]), vec!['a']);
/// ```
pub fn compress<D, S>(data: D, selectors: S) -> Vec<D::Item>
where
    D: IntoIterator,
    S: IntoIterator,
    S::Item: Selector,
{
    data.into_iter()
        .zip(selectors)
        .filter_map(|(element, selector)| selector.is_selected().then_some(element))
        .collect()
}
