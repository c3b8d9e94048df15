//! # resumable
//!
//! Lazy, resumable sequence generators for Rust.
//!
//! ## Overview
//!
//! A generator is a suspended computation that produces values one at a
//! time, on demand. Each resumption runs it forward to its next emitted
//! value and suspends again; when the body runs out it reports completion
//! exactly once, and any later resumption is an error. Generators are also
//! fused [`Iterator`]s, so the usual driving loop works unchanged.
//!
//! - **Generator Core** ([`generator`]): the [`Generator`](generator::Generator)
//!   handle, the [`Coroutine`](generator::Coroutine) body trait, and the
//!   closure-continuation [`Fiber`](generator::Fiber) encoding.
//! - **Sequences** ([`source`]): the positional [`Sequence`](source::Sequence)
//!   capability that combinatorial generators read from.
//! - **Adapters** ([`adapter`]): `chain`, `filter`, `map`, `zip`, `cycle`,
//!   `count`, `take_while` and friends.
//! - **Combinatorics** ([`combinatorics`]): combinations (with and without
//!   replacement), permutations, cartesian products and powersets.
//!
//! ## Feature Flags
//!
//! - `adapter`: streaming combinators
//! - `combinatorics`: combinatorial generators (pulls in `smallvec`)
//! - `tracing`: diagnostic events through the `tracing` crate
//! - `serde`: serialization for generator states and statuses
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use resumable::prelude::*;
//!
//! let mut generator = combinations(vec!['a', 'b', 'c'], 2);
//! assert_eq!(generator.resume(), Ok(GeneratorState::Yielded(vec!['a', 'b'])));
//! assert_eq!(generator.next(), Some(vec!['a', 'c']));
//! assert_eq!(generator.next(), Some(vec!['b', 'c']));
//! assert_eq!(generator.resume(), Ok(GeneratorState::Complete));
//! assert!(generator.resume().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the generator core and every enabled generator family.
///
/// # Usage
///
/// ```rust
/// use resumable::prelude::*;
/// ```
pub mod prelude {
    pub use crate::generator::*;
    pub use crate::source::Sequence;

    #[cfg(feature = "adapter")]
    pub use crate::adapter::*;

    #[cfg(feature = "combinatorics")]
    pub use crate::combinatorics::*;
}

mod trace;

pub mod generator;
pub mod source;

#[cfg(feature = "adapter")]
pub mod adapter;

#[cfg(feature = "combinatorics")]
pub mod combinatorics;
