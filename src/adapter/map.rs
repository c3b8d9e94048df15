use crate::generator::{Coroutine, Generator, GeneratorState};

/// Applies a function to every element of one source.
#[derive(Clone)]
pub struct Map<F, I> {
    function: F,
    source: I,
}

impl<U, F, I> Coroutine for Map<F, I>
where
    I: Iterator,
    F: FnMut(I::Item) -> U,
{
    type Yield = U;

    #[inline]
    fn resume(&mut self) -> GeneratorState<U> {
        self.source.next().map(&mut self.function).into()
    }

    fn name(&self) -> &'static str {
        "map"
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.source.size_hint()
    }
}

impl<F, I> std::fmt::Debug for Map<F, I> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("Map").finish_non_exhaustive()
    }
}

/// Emits `function(element)` for every element of `source`.
///
/// # Examples
///
/// ```rust
/// use resumable::adapter::map;
///
/// let squares: Vec<u32> = map(|x: u32| x * x, 1..=4).collect();
/// assert_eq!(squares, vec![1, 4, 9, 16]);
/// ```
pub fn map<U, F, S>(function: F, source: S) -> Generator<Map<F, S::IntoIter>>
where
    S: IntoIterator,
    F: FnMut(S::Item) -> U,
{
    Generator::new(Map {
        function,
        source: source.into_iter(),
    })
}

/// Advances several sources in lockstep and applies a function to each
/// collected tuple.
///
/// Backs [`map_n`] and [`zip`].
#[derive(Clone)]
pub struct MapN<F, I> {
    function: F,
    sources: Vec<I>,
    name: &'static str,
}

impl<U, F, I> Coroutine for MapN<F, I>
where
    I: Iterator,
    F: FnMut(Vec<I::Item>) -> U,
{
    type Yield = U;

    fn resume(&mut self) -> GeneratorState<U> {
        if self.sources.is_empty() {
            return GeneratorState::Complete;
        }
        // Collecting into `Option` stops at the first exhausted source.
        let tuple: Option<Vec<I::Item>> = self.sources.iter_mut().map(Iterator::next).collect();
        tuple.map(&mut self.function).into()
    }

    fn name(&self) -> &'static str {
        self.name
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.sources
            .iter()
            .map(Iterator::size_hint)
            .reduce(|(lower, upper), (other_lower, other_upper)| {
                let upper = match (upper, other_upper) {
                    (Some(left), Some(right)) => Some(left.min(right)),
                    (bound, None) | (None, bound) => bound,
                };
                (lower.min(other_lower), upper)
            })
            .unwrap_or((0, Some(0)))
    }
}

impl<F, I> std::fmt::Debug for MapN<F, I> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("MapN")
            .field("name", &self.name)
            .field("sources", &self.sources.len())
            .finish_non_exhaustive()
    }
}

/// Applies `function` to one element from each source at a time.
///
/// All sources share an element type and the function receives the elements
/// as a `Vec`, in source order. The generator completes as soon as any
/// source is exhausted; with no sources it completes immediately.
///
/// # Examples
///
/// ```rust
/// use resumable::adapter::map_n;
///
/// let sums: Vec<i32> = map_n(
///     |tuple: Vec<i32>| tuple.iter().sum(),
///     [vec![1, 2, 3], vec![10, 20, 30], vec![100, 200]],
/// )
/// .collect();
/// assert_eq!(sums, vec![111, 222]);
/// ```
pub fn map_n<U, F, S>(
    function: F,
    sources: S,
) -> Generator<MapN<F, <S::Item as IntoIterator>::IntoIter>>
where
    S: IntoIterator,
    S::Item: IntoIterator,
    F: FnMut(Vec<<S::Item as IntoIterator>::Item>) -> U,
{
    Generator::new(MapN {
        function,
        sources: sources.into_iter().map(IntoIterator::into_iter).collect(),
        name: "map_n",
    })
}

/// The identity function used by [`zip`].
pub type ZipFunction<T> = fn(Vec<T>) -> Vec<T>;

/// Emits one tuple per step, taking one element from each source.
///
/// This is [`map_n`] with the identity function. It follows zip-shortest
/// semantics.
///
/// # Examples
///
/// ```rust
/// use resumable::adapter::zip;
///
/// let rows: Vec<Vec<char>> = zip(["abc".chars(), "xy".chars()]).collect();
/// assert_eq!(rows, vec![vec!['a', 'x'], vec!['b', 'y']]);
/// ```
pub fn zip<S>(
    sources: S,
) -> Generator<
    MapN<ZipFunction<<S::Item as IntoIterator>::Item>, <S::Item as IntoIterator>::IntoIter>,
>
where
    S: IntoIterator,
    S::Item: IntoIterator,
{
    let function: ZipFunction<_> = std::convert::identity;
    Generator::new(MapN {
        function,
        sources: sources.into_iter().map(IntoIterator::into_iter).collect(),
        name: "zip",
    })
}

/// Applies a two-argument function to elements of two sources in lockstep.
///
/// Backs [`map2`] and [`zip2`].
#[derive(Clone)]
pub struct Map2<F, A, B> {
    function: F,
    first: A,
    second: B,
    name: &'static str,
}

impl<U, F, A, B> Coroutine for Map2<F, A, B>
where
    A: Iterator,
    B: Iterator,
    F: FnMut(A::Item, B::Item) -> U,
{
    type Yield = U;

    fn resume(&mut self) -> GeneratorState<U> {
        let Some(left) = self.first.next() else {
            return GeneratorState::Complete;
        };
        let Some(right) = self.second.next() else {
            return GeneratorState::Complete;
        };
        GeneratorState::Yielded((self.function)(left, right))
    }

    fn name(&self) -> &'static str {
        self.name
    }
}

impl<F, A, B> std::fmt::Debug for Map2<F, A, B> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("Map2")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Applies `function` to paired elements of two sources of any types.
///
/// # Examples
///
/// ```rust
/// use resumable::adapter::map2;
///
/// let labels: Vec<String> =
///     map2(|name: &str, age: u8| format!("{name}:{age}"), ["ann", "bo"], [31, 42]).collect();
/// assert_eq!(labels, vec!["ann:31", "bo:42"]);
/// ```
pub fn map2<U, F, A, B>(
    function: F,
    first: A,
    second: B,
) -> Generator<Map2<F, A::IntoIter, B::IntoIter>>
where
    A: IntoIterator,
    B: IntoIterator,
    F: FnMut(A::Item, B::Item) -> U,
{
    Generator::new(Map2 {
        function,
        first: first.into_iter(),
        second: second.into_iter(),
        name: "map2",
    })
}

/// The pairing function used by [`zip2`].
pub type PairFunction<A, B> = fn(A, B) -> (A, B);

/// Pairs the elements of two sources of any types.
///
/// # Examples
///
/// ```rust
/// use resumable::adapter::zip2;
///
/// let pairs: Vec<(i32, char)> = zip2([1, 2, 3], ['a', 'b']).collect();
/// assert_eq!(pairs, vec![(1, 'a'), (2, 'b')]);
/// ```
pub fn zip2<A, B>(
    first: A,
    second: B,
) -> Generator<Map2<PairFunction<A::Item, B::Item>, A::IntoIter, B::IntoIter>>
where
    A: IntoIterator,
    B: IntoIterator,
{
    let function: PairFunction<_, _> = |left, right| (left, right);
    Generator::new(Map2 {
        function,
        first: first.into_iter(),
        second: second.into_iter(),
        name: "zip2",
    })
}

/// Calls a function with the fields of a tuple as separate arguments.
///
/// Implemented for every `FnMut` of arity 0 through 8, with `Args` the tuple
/// of its parameter types. Closures passed through this trait need their
/// parameter types annotated.
///
/// # Examples
///
/// ```rust
/// use resumable::adapter::Apply;
///
/// let mut add = |left: i32, right: i32| left + right;
/// assert_eq!(add.apply((2, 3)), 5);
/// ```
pub trait Apply<Args> {
    /// The function's return type.
    type Output;

    /// Calls the function with the unpacked arguments.
    fn apply(&mut self, arguments: Args) -> Self::Output;
}

macro_rules! impl_apply {
    ($($argument:ident),*) => {
        impl<Function, Return, $($argument),*> Apply<($($argument,)*)> for Function
        where
            Function: FnMut($($argument),*) -> Return,
        {
            type Output = Return;

            #[inline]
            #[allow(non_snake_case)]
            fn apply(&mut self, ($($argument,)*): ($($argument,)*)) -> Return {
                self($($argument),*)
            }
        }
    };
}

impl_apply!();
impl_apply!(A);
impl_apply!(A, B);
impl_apply!(A, B, C);
impl_apply!(A, B, C, D);
impl_apply!(A, B, C, D, E);
impl_apply!(A, B, C, D, E, G);
impl_apply!(A, B, C, D, E, G, H);
impl_apply!(A, B, C, D, E, G, H, J);

/// Applies a function to each argument tuple of a source.
#[derive(Clone)]
pub struct StarApply<F, I> {
    function: F,
    source: I,
}

impl<F, I> Coroutine for StarApply<F, I>
where
    I: Iterator,
    F: Apply<I::Item>,
{
    type Yield = F::Output;

    #[inline]
    fn resume(&mut self) -> GeneratorState<F::Output> {
        match self.source.next() {
            Some(arguments) => GeneratorState::Yielded(self.function.apply(arguments)),
            None => GeneratorState::Complete,
        }
    }

    fn name(&self) -> &'static str {
        "star_apply"
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.source.size_hint()
    }
}

impl<F, I> std::fmt::Debug for StarApply<F, I> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("StarApply").finish_non_exhaustive()
    }
}

/// Emits `function` applied to the unpacked fields of each argument tuple.
///
/// # Examples
///
/// ```rust
/// use resumable::adapter::star_apply;
///
/// let powers: Vec<u32> =
///     star_apply(|base: u32, exponent: u32| base.pow(exponent), [(2, 5), (3, 2), (10, 3)])
///         .collect();
/// assert_eq!(powers, vec![32, 9, 1000]);
/// ```
pub fn star_apply<F, S>(function: F, source: S) -> Generator<StarApply<F, S::IntoIter>>
where
    S: IntoIterator,
    F: Apply<S::Item>,
{
    Generator::new(StarApply {
        function,
        source: source.into_iter(),
    })
}

/// Emits the running fold of a source.
#[derive(Clone)]
pub struct Accumulate<F, I, T> {
    function: F,
    source: I,
    total: Option<T>,
}

impl<T, F, I> Coroutine for Accumulate<F, I, T>
where
    T: Clone,
    I: Iterator<Item = T>,
    F: FnMut(T, T) -> T,
{
    type Yield = T;

    fn resume(&mut self) -> GeneratorState<T> {
        let Some(element) = self.source.next() else {
            return GeneratorState::Complete;
        };
        let total = match self.total.take() {
            Some(total) => (self.function)(total, element),
            None => element,
        };
        self.total = Some(total.clone());
        GeneratorState::Yielded(total)
    }

    fn name(&self) -> &'static str {
        "accumulate"
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.source.size_hint()
    }
}

impl<F, I, T> std::fmt::Debug for Accumulate<F, I, T> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("Accumulate")
            .field("started", &self.total.is_some())
            .finish_non_exhaustive()
    }
}

/// Emits every partial result of folding `source` with `function`.
///
/// The first element is emitted unchanged.
///
/// # Examples
///
/// ```rust
/// use resumable::adapter::accumulate;
///
/// let totals: Vec<i32> = accumulate(|total, x| total + x, [1, 2, 3, 4]).collect();
/// assert_eq!(totals, vec![1, 3, 6, 10]);
///
/// let maxima: Vec<i32> = accumulate(i32::max, [3, 1, 4, 1, 5]).collect();
/// assert_eq!(maxima, vec![3, 3, 4, 4, 5]);
/// ```
pub fn accumulate<T, F, S>(function: F, source: S) -> Generator<Accumulate<F, S::IntoIter, T>>
where
    T: Clone,
    S: IntoIterator<Item = T>,
    F: FnMut(T, T) -> T,
{
    Generator::new(Accumulate {
        function,
        source: source.into_iter(),
        total: None,
    })
}
