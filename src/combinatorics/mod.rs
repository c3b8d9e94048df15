//! Combinatorial generators over a [`Sequence`](crate::source::Sequence).
//!
//! Each element generator is a thin mapping over an index engine from
//! [`indices`]: the engine walks index tuples in lexicographic order and the
//! generator clones the elements at those positions. Output order therefore
//! follows source positions, never element values.
//!
//! | generator | tuples emitted |
//! |-----------|----------------|
//! | [`combinations`] | `C(n, r)` |
//! | [`combinations_with_replacement`] | `C(n + r - 1, r)` |
//! | [`permutations`] | `n! / (n - r)!` |
//! | [`product`] | product of the source lengths |
//! | [`powerset`] | groups for sizes `0..=n` |
//!
//! An `r` larger than the source length is not an error: combinations and
//! permutations complete on their first resumption. Combinations with
//! replacement repeat positions, so they accept any `r`.
//!
//! # Examples
//!
//! ```rust
//! use resumable::combinatorics::{combinations, permutations};
//!
//! let pairs: Vec<Vec<char>> = combinations(vec!['a', 'b', 'c'], 2).collect();
//! assert_eq!(pairs, vec![vec!['a', 'b'], vec!['a', 'c'], vec!['b', 'c']]);
//!
//! assert_eq!(permutations([1, 2, 3, 4], Some(2)).count(), 12);
//! ```

mod combinations;
pub mod indices;
mod permutations;
mod powerset;
mod product;

pub use combinations::{
    Combinations, CombinationsWithReplacement, combination_indices, combinations,
    combinations_with_replacement, replacement_combination_indices,
};
pub use indices::{
    CombinationIndices, IndexTuple, PermutationIndices, ProductIndices, ReplacementIndices,
};
pub use permutations::{Permutations, permutation_indices, permutations};
pub use powerset::{Powerset, powerset, powerset_from};
pub use product::{Product, product};

/// Returns the binomial coefficient `C(n, k)`, or `None` if it does not fit
/// in a `usize`.
///
/// `C(n, k)` is zero for `k > n`.
///
/// # Examples
///
/// ```rust
/// use resumable::combinatorics::binomial;
///
/// assert_eq!(binomial(5, 2), Some(10));
/// assert_eq!(binomial(2, 5), Some(0));
/// assert_eq!(binomial(200, 100), None);
/// ```
pub fn binomial(n: usize, k: usize) -> Option<usize> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    // Each partial product is itself a binomial coefficient, so the
    // division is exact.
    let mut result: u128 = 1;
    for step in 0..k {
        result = result.checked_mul((n - step) as u128)? / (step as u128 + 1);
    }
    usize::try_from(result).ok()
}

/// Returns `n! / (n - r)!`, or `None` on overflow. Zero for `r > n`.
///
/// # Examples
///
/// ```rust
/// use resumable::combinatorics::falling_factorial;
///
/// assert_eq!(falling_factorial(4, 2), Some(12));
/// assert_eq!(falling_factorial(3, 0), Some(1));
/// assert_eq!(falling_factorial(3, 4), Some(0));
/// ```
pub fn falling_factorial(n: usize, r: usize) -> Option<usize> {
    if r > n {
        return Some(0);
    }
    (n - r + 1..=n).try_fold(1usize, usize::checked_mul)
}
