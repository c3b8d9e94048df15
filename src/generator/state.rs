//! Resumption results and lifecycle status.

/// The outcome of a single resumption.
///
/// A resumption either produces the next value (`Yielded`) or reports that
/// the body has reached its end (`Complete`). This corresponds to the
/// `(value, done)` pair of a classic semicoroutine.
///
/// # Examples
///
/// ```rust
/// use resumable::generator::GeneratorState;
///
/// let state = GeneratorState::Yielded(42);
/// assert!(!state.is_complete());
/// assert_eq!(state.into_option(), Some(42));
///
/// let done: GeneratorState<i32> = GeneratorState::Complete;
/// assert!(done.is_complete());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GeneratorState<Y> {
    /// The body emitted a value and is suspended.
    Yielded(Y),
    /// The body ran to its end. No value accompanies completion.
    Complete,
}

impl<Y> GeneratorState<Y> {
    /// Returns `true` if this is the completion signal.
    #[inline]
    pub const fn is_complete(&self) -> bool {
        matches!(self, Self::Complete)
    }

    /// Returns `true` if a value was emitted.
    #[inline]
    pub const fn is_yielded(&self) -> bool {
        matches!(self, Self::Yielded(_))
    }

    /// Converts into an `Option`, discarding the completion marker.
    #[inline]
    pub fn into_option(self) -> Option<Y> {
        match self {
            Self::Yielded(value) => Some(value),
            Self::Complete => None,
        }
    }

    /// Borrows the emitted value, if any.
    #[inline]
    pub const fn as_ref(&self) -> GeneratorState<&Y> {
        match self {
            Self::Yielded(value) => GeneratorState::Yielded(value),
            Self::Complete => GeneratorState::Complete,
        }
    }

    /// Applies a function to the emitted value, leaving completion untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resumable::generator::GeneratorState;
    ///
    /// assert_eq!(GeneratorState::Yielded(21).map(|x| x * 2), GeneratorState::Yielded(42));
    /// assert_eq!(GeneratorState::<i32>::Complete.map(|x| x * 2), GeneratorState::Complete);
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> GeneratorState<U>
    where
        F: FnOnce(Y) -> U,
    {
        match self {
            Self::Yielded(value) => GeneratorState::Yielded(function(value)),
            Self::Complete => GeneratorState::Complete,
        }
    }
}

impl<Y> From<Option<Y>> for GeneratorState<Y> {
    #[inline]
    fn from(option: Option<Y>) -> Self {
        option.map_or(Self::Complete, Self::Yielded)
    }
}

impl<Y> From<GeneratorState<Y>> for Option<Y> {
    #[inline]
    fn from(state: GeneratorState<Y>) -> Self {
        state.into_option()
    }
}

/// Lifecycle of a [`Generator`](super::Generator).
///
/// ```text
/// Created --resume--> Running --emit--> Suspended --resume--> Running ...
///                        |
///                        +--end of body--> Complete
/// ```
///
/// A generator observed in `Running` outside of a resumption is poisoned:
/// its body panicked part-way through a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GeneratorStatus {
    /// Built but never resumed.
    Created,
    /// Stopped at an emit point, waiting for the next resumption.
    Suspended,
    /// Currently executing a step of its body.
    Running,
    /// The body has ended. Further resumptions are protocol violations.
    Complete,
}

impl GeneratorStatus {
    /// Returns `true` if another resumption may make progress.
    #[inline]
    pub const fn is_resumable(self) -> bool {
        matches!(self, Self::Created | Self::Suspended)
    }
}
