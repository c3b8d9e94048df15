//! The resumable body of a generator.

use super::state::GeneratorState;

/// A computation that runs forward to its next emit point on each call.
///
/// Implementors are explicit state machines: loop counters, buffers and
/// partially consumed sources live in fields, so all local progress survives
/// between calls to [`resume`](Coroutine::resume).
///
/// [`Generator`](super::Generator) wraps a coroutine and never calls
/// `resume` again once it returned [`GeneratorState::Complete`], so
/// implementors do not need to guard against that case themselves.
///
/// # Examples
///
/// ```rust
/// use resumable::generator::{Coroutine, Generator, GeneratorState};
///
/// struct Countdown(u32);
///
/// impl Coroutine for Countdown {
///     type Yield = u32;
///
///     fn resume(&mut self) -> GeneratorState<u32> {
///         if self.0 == 0 {
///             return GeneratorState::Complete;
///         }
///         self.0 -= 1;
///         GeneratorState::Yielded(self.0 + 1)
///     }
/// }
///
/// let values: Vec<u32> = Generator::new(Countdown(3)).collect();
/// assert_eq!(values, vec![3, 2, 1]);
/// ```
pub trait Coroutine {
    /// The type of the emitted values.
    type Yield;

    /// Runs the body until it emits a value or reaches its end.
    fn resume(&mut self) -> GeneratorState<Self::Yield>;

    /// A short name used in errors and diagnostics.
    fn name(&self) -> &'static str {
        "generator"
    }

    /// Bounds on the number of remaining emissions, as for
    /// [`Iterator::size_hint`].
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, None)
    }
}

impl<C: Coroutine + ?Sized> Coroutine for Box<C> {
    type Yield = C::Yield;

    #[inline]
    fn resume(&mut self) -> GeneratorState<Self::Yield> {
        (**self).resume()
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (**self).size_hint()
    }
}

impl<C: Coroutine + ?Sized> Coroutine for &mut C {
    type Yield = C::Yield;

    #[inline]
    fn resume(&mut self) -> GeneratorState<Self::Yield> {
        (**self).resume()
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (**self).size_hint()
    }
}

/// A coroutine driven by a closure returning `Option`.
///
/// Created by [`Generator::from_fn`](super::Generator::from_fn).
#[derive(Clone)]
pub struct FromFn<F> {
    function: F,
}

impl<F> FromFn<F> {
    pub(crate) const fn new(function: F) -> Self {
        Self { function }
    }
}

impl<Y, F> Coroutine for FromFn<F>
where
    F: FnMut() -> Option<Y>,
{
    type Yield = Y;

    #[inline]
    fn resume(&mut self) -> GeneratorState<Y> {
        (self.function)().into()
    }

    fn name(&self) -> &'static str {
        "from_fn"
    }
}

impl<F> std::fmt::Debug for FromFn<F> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("FromFn").finish_non_exhaustive()
    }
}

/// A coroutine that forwards an iterator element by element.
///
/// This is the uniform adapter that turns any ordered collection into a
/// generator. Created by [`generate`](super::generate).
#[derive(Debug, Clone)]
pub struct FromIterable<I> {
    iterator: I,
}

impl<I> FromIterable<I> {
    pub(crate) const fn new(iterator: I) -> Self {
        Self { iterator }
    }
}

impl<I: Iterator> Coroutine for FromIterable<I> {
    type Yield = I::Item;

    #[inline]
    fn resume(&mut self) -> GeneratorState<I::Item> {
        self.iterator.next().into()
    }

    fn name(&self) -> &'static str {
        "iterable"
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iterator.size_hint()
    }
}
