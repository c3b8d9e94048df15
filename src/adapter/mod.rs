//! Streaming combinators.
//!
//! Every adapter takes one or more sources and returns a new
//! [`Generator`](crate::generator::Generator). A source is anything
//! implementing [`IntoIterator`]: collections, plain iterators, and other
//! generators. Predicates and mapping functions are ordinary closures.
//!
//! - Concatenation: [`chain`], [`flatten`], [`chain!`](crate::chain!)
//! - Selection: [`filter`], [`filter_negated`], [`take_while`],
//!   [`drop_while`], [`compress`], [`slice`]
//! - Mapping: [`map`], [`map2`], [`map_n`], [`zip`], [`zip2`],
//!   [`star_apply`], [`accumulate`], [`pairwise`]
//! - Unbounded: [`repeat`], [`cycle`], [`count`]
//!
//! Adapters are lazy: nothing is pulled from a source until the returned
//! generator is resumed, and each resumption pulls only what it needs. The
//! one exception is [`compress`], which returns a `Vec`.
//!
//! # Examples
//!
//! ```rust
//! use resumable::adapter::{count, filter, map, take_while};
//!
//! let odd_squares = map(|x: u64| x * x, filter(|x: &u64| x % 2 == 1, count(1, 1)));
//! let small: Vec<u64> = take_while(|square: &u64| *square < 100, odd_squares).collect();
//! assert_eq!(small, vec![1, 9, 25, 49, 81]);
//! ```

mod chain;
mod filter;
mod infinite;
mod map;
mod window;

pub use chain::{Flatten, chain, flatten};
pub use filter::{
    DropWhile, Filter, Selector, TakeWhile, compress, drop_while, filter, filter_negated,
    take_while,
};
pub use infinite::{Count, Cycle, Repeat, count, cycle, repeat};
pub use map::{
    Accumulate, Apply, Map, Map2, MapN, PairFunction, StarApply, ZipFunction, accumulate, map,
    map_n, map2, star_apply, zip, zip2,
};
pub use window::{Pairwise, Slice, pairwise, slice};
