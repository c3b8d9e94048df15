//! Error types for the resumption protocol.
//!
//! Errors are local to the resumption that raised them. They describe caller
//! protocol violations and are never retried: a generator that reported an
//! error keeps reporting it.

/// Represents an attempt to resume a generator that already completed.
///
/// A generator reports completion exactly once. Every later resumption of the
/// same instance yields this error.
///
/// # Examples
///
/// ```rust
/// use resumable::generator::ExhaustedError;
///
/// let error = ExhaustedError {
///     generator_name: "cycle",
///     emitted: 3,
/// };
/// assert_eq!(
///     format!("{}", error),
///     "cycle: resumed after completion (3 values emitted). Create a new generator to iterate again."
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExhaustedError {
    /// The name of the generator that was resumed.
    pub generator_name: &'static str,
    /// How many values the generator emitted before completing.
    pub emitted: usize,
}

impl std::fmt::Display for ExhaustedError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "{}: resumed after completion ({} values emitted). Create a new generator to iterate again.",
            self.generator_name, self.emitted
        )
    }
}

impl std::error::Error for ExhaustedError {}

/// Represents errors that can occur when resuming a generator.
///
/// # Examples
///
/// ```rust
/// use resumable::generator::{ExhaustedError, GeneratorError};
///
/// let error = GeneratorError::Exhausted(ExhaustedError {
///     generator_name: "chain",
///     emitted: 0,
/// });
/// assert!(error.is_exhausted());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    /// The generator already signalled completion.
    Exhausted(ExhaustedError),
    /// The generator body panicked during an earlier resumption.
    Poisoned {
        /// The name of the poisoned generator.
        generator_name: &'static str,
    },
}

impl GeneratorError {
    /// Returns `true` for the resume-after-completion violation.
    #[inline]
    pub const fn is_exhausted(&self) -> bool {
        matches!(self, Self::Exhausted(_))
    }
}

impl std::fmt::Display for GeneratorError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exhausted(error) => write!(formatter, "{error}"),
            Self::Poisoned { generator_name } => write!(
                formatter,
                "{generator_name}: generator has been poisoned by a panic in its body"
            ),
        }
    }
}

impl std::error::Error for GeneratorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Exhausted(error) => Some(error),
            Self::Poisoned { .. } => None,
        }
    }
}

impl From<ExhaustedError> for GeneratorError {
    fn from(error: ExhaustedError) -> Self {
        Self::Exhausted(error)
    }
}
