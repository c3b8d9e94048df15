//! Generator bodies written as chains of continuations.
//!
//! A [`Fiber<Y>`] encodes a generator body as data. Each emit point is a
//! value paired with the thunk that continues the body, so local state is
//! whatever the thunk captured. Running a fiber never grows the call stack:
//! the coroutine driving it unwinds one step per loop iteration, in the same
//! way a trampoline is run.
//!
//! # Examples
//!
//! ## Counting
//!
//! ```rust
//! use resumable::generator::Fiber;
//!
//! fn naturals(from: u64) -> Fiber<u64> {
//!     Fiber::emit(from, move || naturals(from + 1))
//! }
//!
//! let first: Vec<u64> = naturals(0).into_generator().take(4).collect();
//! assert_eq!(first, vec![0, 1, 2, 3]);
//! ```
//!
//! ## Skipping Without Emitting
//!
//! ```rust
//! use resumable::generator::Fiber;
//!
//! fn evens(current: u32, limit: u32) -> Fiber<u32> {
//!     if current >= limit {
//!         Fiber::done()
//!     } else if current % 2 == 1 {
//!         Fiber::suspend(move || evens(current + 1, limit))
//!     } else {
//!         Fiber::emit(current, move || evens(current + 1, limit))
//!     }
//! }
//!
//! let values: Vec<u32> = evens(0, 7).into_generator().collect();
//! assert_eq!(values, vec![0, 2, 4, 6]);
//! ```

use super::coroutine::Coroutine;
use super::state::GeneratorState;
use super::Generator;

/// The continuation of a fiber body.
pub type Thunk<Y> = Box<dyn FnOnce() -> Fiber<Y> + 'static>;

/// A generator body encoded as data.
///
/// # Design
///
/// The fiber has three states:
///
/// 1. `Emit(value, next)` - emit `value`, then continue with `next`
/// 2. `Suspend(next)` - take an internal step without emitting
/// 3. `Done` - the body has ended
pub enum Fiber<Y> {
    /// Emit a value, then continue with the thunk on the next resumption.
    Emit(Y, Thunk<Y>),
    /// Continue with the thunk without emitting.
    Suspend(Thunk<Y>),
    /// The body has ended.
    Done,
}

impl<Y> Fiber<Y> {
    /// Creates a fiber that emits `value` and then continues with `next`.
    ///
    /// `next` is not evaluated until the generator is resumed again.
    #[inline]
    pub fn emit<F>(value: Y, next: F) -> Self
    where
        F: FnOnce() -> Self + 'static,
    {
        Self::Emit(value, Box::new(next))
    }

    /// Creates a fiber that continues with `next` without emitting.
    #[inline]
    pub fn suspend<F>(next: F) -> Self
    where
        F: FnOnce() -> Self + 'static,
    {
        Self::Suspend(Box::new(next))
    }

    /// Creates a finished fiber.
    #[inline]
    pub const fn done() -> Self {
        Self::Done
    }
}

impl<Y: 'static> Fiber<Y> {
    /// Creates a fiber emitting a single value.
    #[inline]
    pub fn once(value: Y) -> Self {
        Self::emit(value, Self::done)
    }

    /// Sequences two bodies: once this one ends, `next` produces the rest.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resumable::generator::Fiber;
    ///
    /// let body = Fiber::once(1).then(|| Fiber::once(2));
    /// let values: Vec<i32> = body.into_generator().collect();
    /// assert_eq!(values, vec![1, 2]);
    /// ```
    pub fn then<F>(self, next: F) -> Self
    where
        F: FnOnce() -> Self + 'static,
    {
        match self {
            Self::Done => Self::suspend(next),
            Self::Emit(value, thunk) => Self::emit(value, move || thunk().then(next)),
            Self::Suspend(thunk) => Self::suspend(move || thunk().then(next)),
        }
    }

    /// Wraps this body in a [`Generator`].
    pub fn into_generator(self) -> Generator<FiberCoroutine<Y>> {
        Generator::new(FiberCoroutine::new(self))
    }
}

impl<Y: std::fmt::Debug> std::fmt::Debug for Fiber<Y> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Emit(value, _) => formatter
                .debug_tuple("Emit")
                .field(value)
                .field(&"<thunk>")
                .finish(),
            Self::Suspend(_) => formatter.debug_tuple("Suspend").field(&"<thunk>").finish(),
            Self::Done => formatter.write_str("Done"),
        }
    }
}

/// The coroutine that runs a [`Fiber`] one emit point at a time.
pub struct FiberCoroutine<Y> {
    current: Fiber<Y>,
}

impl<Y> FiberCoroutine<Y> {
    /// Creates a coroutine positioned at the start of `body`.
    pub const fn new(body: Fiber<Y>) -> Self {
        Self { current: body }
    }
}

impl<Y> Coroutine for FiberCoroutine<Y> {
    type Yield = Y;

    fn resume(&mut self) -> GeneratorState<Y> {
        loop {
            match std::mem::replace(&mut self.current, Fiber::Done) {
                Fiber::Done => return GeneratorState::Complete,
                Fiber::Suspend(thunk) => {
                    self.current = thunk();
                }
                Fiber::Emit(value, thunk) => {
                    self.current = Fiber::Suspend(thunk);
                    return GeneratorState::Yielded(value);
                }
            }
        }
    }

    fn name(&self) -> &'static str {
        "fiber"
    }
}

impl<Y: std::fmt::Debug> std::fmt::Debug for FiberCoroutine<Y> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FiberCoroutine")
            .field("current", &self.current)
            .finish()
    }
}
