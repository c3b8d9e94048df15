//! The suspend/resume core.
//!
//! A [`Generator`] wraps a [`Coroutine`] (the resumable body) and enforces
//! the resumption protocol around it:
//!
//! - each [`resume`](Generator::resume) runs the body to its next emit point
//!   and returns [`GeneratorState::Yielded`];
//! - the end of the body is reported exactly once, as
//!   [`GeneratorState::Complete`];
//! - every resumption after that fails with [`GeneratorError::Exhausted`].
//!
//! A generator is also a fused [`Iterator`]. Driving it with a `for` loop is
//! equivalent to resuming until completion.
//!
//! # Examples
//!
//! ```rust
//! use resumable::generator::{generate, GeneratorState};
//!
//! let mut generator = generate([1, 2]);
//!
//! assert_eq!(generator.resume(), Ok(GeneratorState::Yielded(1)));
//! assert_eq!(generator.resume(), Ok(GeneratorState::Yielded(2)));
//! assert_eq!(generator.resume(), Ok(GeneratorState::Complete));
//! assert!(generator.resume().is_err());
//! ```

mod coroutine;
mod error;
mod fiber;
mod state;

pub use coroutine::{Coroutine, FromFn, FromIterable};
pub use error::{ExhaustedError, GeneratorError};
pub use fiber::{Fiber, FiberCoroutine, Thunk};
pub use state::{GeneratorState, GeneratorStatus};

use std::iter::FusedIterator;

use crate::trace::trace_event;

/// A resumable computation emitting a sequence of values.
///
/// `Generator<C>` owns its body `C`, a lifecycle status and the number of
/// values emitted so far. Each emitted value is moved out to the caller; the
/// generator keeps nothing but the body's own progress state.
///
/// The last emitted value is not retained: ownership passes to the caller on
/// every resumption, so there is no "current value" accessor.
///
/// # Protocol
///
/// | status before `resume` | outcome                                    |
/// |------------------------|--------------------------------------------|
/// | `Created`, `Suspended` | runs the body: `Ok(Yielded)` or `Ok(Complete)` |
/// | `Complete`             | `Err(GeneratorError::Exhausted)`           |
/// | `Running`              | `Err(GeneratorError::Poisoned)`            |
///
/// `Running` is only observable between resumptions when the body panicked.
///
/// # Thread Safety
///
/// Resumption requires `&mut self`, so a single instance can never be
/// resumed concurrently. A generator is `Send` when its body is.
///
/// # Examples
///
/// ```rust
/// use resumable::generator::Generator;
///
/// let mut state = 1;
/// let powers = Generator::from_fn(move || {
///     let current = state;
///     state *= 2;
///     (current <= 16).then_some(current)
/// });
///
/// assert_eq!(powers.collect::<Vec<_>>(), vec![1, 2, 4, 8, 16]);
/// ```
pub struct Generator<C> {
    coroutine: C,
    status: GeneratorStatus,
    emitted: usize,
}

/// A type-erased generator.
pub type BoxGenerator<'a, Y> = Generator<Box<dyn Coroutine<Yield = Y> + 'a>>;

impl<C: Coroutine> Generator<C> {
    /// Creates a generator that has not been resumed yet.
    ///
    /// No part of the body runs until the first resumption.
    #[inline]
    pub const fn new(coroutine: C) -> Self {
        Self {
            coroutine,
            status: GeneratorStatus::Created,
            emitted: 0,
        }
    }

    /// Runs the body forward to its next emit point.
    ///
    /// # Errors
    ///
    /// - [`GeneratorError::Exhausted`] if completion was already reported.
    ///   Returned on every such call; the generator is never re-entered.
    /// - [`GeneratorError::Poisoned`] if an earlier resumption panicked
    ///   inside the body.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resumable::generator::{generate, GeneratorError, GeneratorState};
    ///
    /// let mut generator = generate(Vec::<i32>::new());
    /// assert_eq!(generator.resume(), Ok(GeneratorState::Complete));
    ///
    /// let error = generator.resume().unwrap_err();
    /// assert!(matches!(error, GeneratorError::Exhausted(_)));
    /// ```
    pub fn resume(&mut self) -> Result<GeneratorState<C::Yield>, GeneratorError> {
        match self.status {
            GeneratorStatus::Complete => {
                trace_event!(
                    debug,
                    generator = self.coroutine.name(),
                    emitted = self.emitted,
                    "resumed after completion"
                );
                return Err(GeneratorError::Exhausted(ExhaustedError {
                    generator_name: self.coroutine.name(),
                    emitted: self.emitted,
                }));
            }
            GeneratorStatus::Running => {
                trace_event!(
                    debug,
                    generator = self.coroutine.name(),
                    "resumed a poisoned generator"
                );
                return Err(GeneratorError::Poisoned {
                    generator_name: self.coroutine.name(),
                });
            }
            GeneratorStatus::Created | GeneratorStatus::Suspended => {}
        }

        // Stays `Running` if the body unwinds.
        self.status = GeneratorStatus::Running;
        let state = self.coroutine.resume();

        match &state {
            GeneratorState::Yielded(_) => {
                self.emitted += 1;
                self.status = GeneratorStatus::Suspended;
            }
            GeneratorState::Complete => {
                self.status = GeneratorStatus::Complete;
                trace_event!(
                    trace,
                    generator = self.coroutine.name(),
                    emitted = self.emitted,
                    "generator completed"
                );
            }
        }
        Ok(state)
    }

    /// Returns the current lifecycle status.
    #[inline]
    pub const fn status(&self) -> GeneratorStatus {
        self.status
    }

    /// Returns `true` once completion has been reported.
    #[inline]
    pub const fn is_complete(&self) -> bool {
        matches!(self.status, GeneratorStatus::Complete)
    }

    /// Returns how many values have been emitted so far.
    #[inline]
    pub const fn emitted(&self) -> usize {
        self.emitted
    }

    /// Returns the body's diagnostic name.
    pub fn name(&self) -> &'static str {
        self.coroutine.name()
    }

    /// Consumes the generator, returning its body.
    pub fn into_inner(self) -> C {
        self.coroutine
    }
}

impl<'a, C: Coroutine + 'a> Generator<C> {
    /// Erases the body type.
    ///
    /// Progress made so far is kept.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resumable::generator::{generate, BoxGenerator};
    ///
    /// let generators: Vec<BoxGenerator<'_, i32>> = vec![
    ///     generate(vec![1, 2]).boxed(),
    ///     generate(3..5).boxed(),
    /// ];
    /// let values: Vec<i32> = generators.into_iter().flatten().collect();
    /// assert_eq!(values, vec![1, 2, 3, 4]);
    /// ```
    pub fn boxed(self) -> BoxGenerator<'a, C::Yield> {
        let coroutine: Box<dyn Coroutine<Yield = C::Yield> + 'a> = Box::new(self.coroutine);
        Generator {
            coroutine,
            status: self.status,
            emitted: self.emitted,
        }
    }
}

impl<Y, F> Generator<FromFn<F>>
where
    F: FnMut() -> Option<Y>,
{
    /// Creates a generator whose body is a closure.
    ///
    /// The closure is called once per resumption. Returning `None` ends the
    /// body.
    #[inline]
    pub const fn from_fn(function: F) -> Self {
        Self::new(FromFn::new(function))
    }
}

impl<I: Iterator> Generator<FromIterable<I>> {
    /// Creates a generator emitting the elements of `iterable` in order.
    ///
    /// See also [`generate`].
    #[inline]
    pub fn from_iterable<T>(iterable: T) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        Self::new(FromIterable::new(iterable.into_iter()))
    }
}

/// Adapts any ordered collection or iterator into a generator.
///
/// # Examples
///
/// ```rust
/// use resumable::generator::generate;
///
/// let letters: Vec<char> = generate(['a', 'b', 'c']).collect();
/// assert_eq!(letters, vec!['a', 'b', 'c']);
/// ```
#[inline]
pub fn generate<T: IntoIterator>(iterable: T) -> Generator<FromIterable<T::IntoIter>> {
    Generator::from_iterable(iterable)
}

impl<C: Coroutine> Iterator for Generator<C> {
    type Item = C::Yield;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if !self.status.is_resumable() {
            return None;
        }
        self.resume().ok().and_then(GeneratorState::into_option)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.status.is_resumable() {
            self.coroutine.size_hint()
        } else {
            (0, Some(0))
        }
    }
}

impl<C: Coroutine> FusedIterator for Generator<C> {}

impl<C: Clone> Clone for Generator<C> {
    /// Forks the generator. The clone resumes from the same point but shares
    /// no state with the original afterwards.
    fn clone(&self) -> Self {
        Self {
            coroutine: self.coroutine.clone(),
            status: self.status,
            emitted: self.emitted,
        }
    }
}

impl<C: Coroutine> std::fmt::Debug for Generator<C> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("Generator")
            .field("name", &self.coroutine.name())
            .field("status", &self.status)
            .field("emitted", &self.emitted)
            .finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(Generator<FromIterable<std::vec::IntoIter<i32>>>: Send, Sync);
static_assertions::assert_not_impl_any!(Generator<FiberCoroutine<i32>>: Send, Sync);
