//! Lexicographic index-tuple state machines.
//!
//! Each engine owns a working index tuple over a source of length `n` and
//! advances it in place. [`advance`](CombinationIndices::advance) returns
//! the tuple after each step (the initial tuple first) and `None` once the
//! enumeration is exhausted. Every engine is also a [`Coroutine`] emitting
//! owned copies of its tuples.

use smallvec::SmallVec;

use super::{binomial, falling_factorial};
use crate::generator::{Coroutine, GeneratorState};
use crate::trace::trace_event;

/// Number of indices stored inline before spilling to the heap.
pub const INLINE_INDICES: usize = 8;

/// Working storage for an index tuple.
pub type IndexTuple = SmallVec<[usize; INLINE_INDICES]>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// The initial tuple has not been emitted yet.
    Initial,
    Running,
    Exhausted,
}

impl Phase {
    const fn starting(n: usize, r: usize) -> Self {
        if r > n { Self::Exhausted } else { Self::Initial }
    }
}

fn exact_hint(remaining: Option<usize>) -> (usize, Option<usize>) {
    remaining.map_or((usize::MAX, None), |remaining| (remaining, Some(remaining)))
}

macro_rules! note_oversized {
    ($engine:literal, $n:expr, $r:expr) => {
        if $r > $n {
            trace_event!(
                debug,
                engine = $engine,
                n = $n,
                r = $r,
                "selection size exceeds source length; nothing will be emitted"
            );
        }
    };
}

// =============================================================================
// Combinations
// =============================================================================

/// Strictly increasing `r`-tuples over `0..n`, in lexicographic order.
///
/// # Examples
///
/// ```rust
/// use resumable::combinatorics::CombinationIndices;
///
/// let mut engine = CombinationIndices::new(4, 2);
/// assert_eq!(engine.advance(), Some(&[0, 1][..]));
/// assert_eq!(engine.advance(), Some(&[0, 2][..]));
/// assert_eq!(engine.advance(), Some(&[0, 3][..]));
/// assert_eq!(engine.advance(), Some(&[1, 2][..]));
/// ```
#[derive(Debug, Clone)]
pub struct CombinationIndices {
    n: usize,
    r: usize,
    indices: IndexTuple,
    phase: Phase,
    remaining: Option<usize>,
}

impl CombinationIndices {
    /// Creates the engine at `[0, 1, ..., r - 1]`.
    ///
    /// If `r > n` the engine starts exhausted.
    pub fn new(n: usize, r: usize) -> Self {
        note_oversized!("combinations", n, r);
        let phase = Phase::starting(n, r);
        let indices = if phase == Phase::Exhausted {
            IndexTuple::new()
        } else {
            (0..r).collect()
        };
        Self {
            n,
            r,
            indices,
            phase,
            remaining: binomial(n, r),
        }
    }

    /// The source length.
    pub const fn n(&self) -> usize {
        self.n
    }

    /// The tuple length.
    pub const fn r(&self) -> usize {
        self.r
    }

    /// Moves to the next tuple and returns it.
    ///
    /// The rightmost index that is below its maximum (`position + n - r`)
    /// is incremented and every index to its right is reset to consecutive
    /// successors of it.
    pub fn advance(&mut self) -> Option<&[usize]> {
        match self.phase {
            Phase::Exhausted => return None,
            Phase::Initial => self.phase = Phase::Running,
            Phase::Running => {
                let offset = self.n - self.r;
                let indices = &mut self.indices;
                let Some(position) = (0..self.r)
                    .rev()
                    .find(|&position| indices[position] != position + offset)
                else {
                    self.phase = Phase::Exhausted;
                    return None;
                };
                indices[position] += 1;
                for next in position + 1..self.r {
                    indices[next] = indices[next - 1] + 1;
                }
            }
        }
        self.remaining = self.remaining.map(|remaining| remaining.saturating_sub(1));
        Some(self.indices.as_slice())
    }
}

impl Coroutine for CombinationIndices {
    type Yield = Vec<usize>;

    fn resume(&mut self) -> GeneratorState<Vec<usize>> {
        self.advance().map(<[usize]>::to_vec).into()
    }

    fn name(&self) -> &'static str {
        "combination_indices"
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        exact_hint(self.remaining)
    }
}

// =============================================================================
// Combinations with replacement
// =============================================================================

/// Non-decreasing `r`-tuples over `0..n`, in lexicographic order.
///
/// # Examples
///
/// ```rust
/// use resumable::combinatorics::ReplacementIndices;
///
/// let mut engine = ReplacementIndices::new(2, 2);
/// assert_eq!(engine.advance(), Some(&[0, 0][..]));
/// assert_eq!(engine.advance(), Some(&[0, 1][..]));
/// assert_eq!(engine.advance(), Some(&[1, 1][..]));
/// assert_eq!(engine.advance(), None);
/// ```
#[derive(Debug, Clone)]
pub struct ReplacementIndices {
    n: usize,
    r: usize,
    indices: IndexTuple,
    phase: Phase,
    remaining: Option<usize>,
}

impl ReplacementIndices {
    /// Creates the engine at `[0, 0, ..., 0]`.
    ///
    /// Positions may repeat, so `r` may exceed `n`. Only an empty source
    /// with `r > 0` starts exhausted.
    pub fn new(n: usize, r: usize) -> Self {
        let phase = if n == 0 && r > 0 {
            trace_event!(
                debug,
                engine = "combinations_with_replacement",
                r,
                "empty source; nothing will be emitted"
            );
            Phase::Exhausted
        } else {
            Phase::Initial
        };
        let indices = if phase == Phase::Exhausted {
            IndexTuple::new()
        } else {
            smallvec::smallvec![0; r]
        };
        let remaining = match (phase, r) {
            (Phase::Exhausted, _) => Some(0),
            (_, 0) => Some(1),
            _ => n.checked_add(r - 1).and_then(|top| binomial(top, r)),
        };
        Self {
            n,
            r,
            indices,
            phase,
            remaining,
        }
    }

    /// The source length.
    pub const fn n(&self) -> usize {
        self.n
    }

    /// The tuple length.
    pub const fn r(&self) -> usize {
        self.r
    }

    /// Moves to the next tuple and returns it.
    ///
    /// The rightmost index below `n - 1` is incremented and the whole tail
    /// from that position on is set to the new value.
    pub fn advance(&mut self) -> Option<&[usize]> {
        match self.phase {
            Phase::Exhausted => return None,
            Phase::Initial => self.phase = Phase::Running,
            Phase::Running => {
                let n = self.n;
                let indices = &mut self.indices;
                let Some(position) = (0..self.r)
                    .rev()
                    .find(|&position| indices[position] + 1 != n)
                else {
                    self.phase = Phase::Exhausted;
                    return None;
                };
                let value = indices[position] + 1;
                indices[position..].fill(value);
            }
        }
        self.remaining = self.remaining.map(|remaining| remaining.saturating_sub(1));
        Some(self.indices.as_slice())
    }
}

impl Coroutine for ReplacementIndices {
    type Yield = Vec<usize>;

    fn resume(&mut self) -> GeneratorState<Vec<usize>> {
        self.advance().map(<[usize]>::to_vec).into()
    }

    fn name(&self) -> &'static str {
        "replacement_indices"
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        exact_hint(self.remaining)
    }
}

// =============================================================================
// Permutations
// =============================================================================

/// Ordered `r`-selections of distinct indices from `0..n`, in
/// lexicographic order.
///
/// Uses the cycle-counter algorithm: `pool` holds an arrangement of all of
/// `0..n` whose first `r` entries are the current tuple, and `cycles[i]`
/// counts the rotations left at position `i`.
///
/// # Examples
///
/// ```rust
/// use resumable::combinatorics::PermutationIndices;
///
/// let mut engine = PermutationIndices::new(3, 2);
/// assert_eq!(engine.advance(), Some(&[0, 1][..]));
/// assert_eq!(engine.advance(), Some(&[0, 2][..]));
/// assert_eq!(engine.advance(), Some(&[1, 0][..]));
/// ```
#[derive(Debug, Clone)]
pub struct PermutationIndices {
    n: usize,
    r: usize,
    pool: IndexTuple,
    cycles: IndexTuple,
    phase: Phase,
    remaining: Option<usize>,
}

impl PermutationIndices {
    /// Creates the engine at the identity arrangement with cycle counters
    /// `[n, n - 1, ..., n - r + 1]`.
    ///
    /// If `r > n` the engine starts exhausted.
    pub fn new(n: usize, r: usize) -> Self {
        note_oversized!("permutations", n, r);
        let phase = Phase::starting(n, r);
        let (pool, cycles) = if phase == Phase::Exhausted {
            (IndexTuple::new(), IndexTuple::new())
        } else {
            ((0..n).collect(), (0..r).map(|position| n - position).collect())
        };
        Self {
            n,
            r,
            pool,
            cycles,
            phase,
            remaining: falling_factorial(n, r),
        }
    }

    /// The source length.
    pub const fn n(&self) -> usize {
        self.n
    }

    /// The tuple length.
    pub const fn r(&self) -> usize {
        self.r
    }

    /// Moves to the next tuple and returns it.
    ///
    /// Positions are scanned right to left. Each visited counter is
    /// decremented; a counter reaching zero rotates its suffix of the pool
    /// left by one and is reset to `n - position`, and the scan continues.
    /// Otherwise the position is swapped with the entry `counter` places
    /// from the end of the pool and the scan stops.
    pub fn advance(&mut self) -> Option<&[usize]> {
        match self.phase {
            Phase::Exhausted => return None,
            Phase::Initial => self.phase = Phase::Running,
            Phase::Running => {
                if !self.step() {
                    self.phase = Phase::Exhausted;
                    return None;
                }
            }
        }
        self.remaining = self.remaining.map(|remaining| remaining.saturating_sub(1));
        Some(&self.pool[..self.r])
    }

    /// Returns `false` when the scan ran out of positions.
    fn step(&mut self) -> bool {
        for position in (0..self.r).rev() {
            self.cycles[position] -= 1;
            if self.cycles[position] == 0 {
                self.pool[position..].rotate_left(1);
                self.cycles[position] = self.n - position;
            } else {
                let distance = self.cycles[position];
                self.pool.swap(position, self.n - distance);
                return true;
            }
        }
        false
    }
}

impl Coroutine for PermutationIndices {
    type Yield = Vec<usize>;

    fn resume(&mut self) -> GeneratorState<Vec<usize>> {
        self.advance().map(<[usize]>::to_vec).into()
    }

    fn name(&self) -> &'static str {
        "permutation_indices"
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        exact_hint(self.remaining)
    }
}

// =============================================================================
// Cartesian product
// =============================================================================

/// Mixed-radix odometer: one index per source, rightmost advancing fastest.
///
/// # Examples
///
/// ```rust
/// use resumable::combinatorics::ProductIndices;
///
/// let mut engine = ProductIndices::new(vec![2, 3]);
/// assert_eq!(engine.advance(), Some(&[0, 0][..]));
/// assert_eq!(engine.advance(), Some(&[0, 1][..]));
/// assert_eq!(engine.advance(), Some(&[0, 2][..]));
/// assert_eq!(engine.advance(), Some(&[1, 0][..]));
/// ```
#[derive(Debug, Clone)]
pub struct ProductIndices {
    radices: Vec<usize>,
    indices: IndexTuple,
    phase: Phase,
    remaining: Option<usize>,
}

impl ProductIndices {
    /// Creates the odometer at all zeros.
    ///
    /// A zero radix makes the product empty. No radices at all yields a
    /// single empty tuple.
    pub fn new(radices: Vec<usize>) -> Self {
        let empty = radices.contains(&0);
        let remaining = radices
            .iter()
            .try_fold(1usize, |total, &radix| total.checked_mul(radix));
        Self {
            indices: if empty {
                IndexTuple::new()
            } else {
                smallvec::smallvec![0; radices.len()]
            },
            radices,
            phase: if empty { Phase::Exhausted } else { Phase::Initial },
            remaining,
        }
    }

    /// The length of each dimension.
    pub fn radices(&self) -> &[usize] {
        &self.radices
    }

    /// Moves to the next tuple and returns it.
    pub fn advance(&mut self) -> Option<&[usize]> {
        match self.phase {
            Phase::Exhausted => return None,
            Phase::Initial => self.phase = Phase::Running,
            Phase::Running => {
                let radices = &self.radices;
                let indices = &mut self.indices;
                let Some(position) = (0..radices.len())
                    .rev()
                    .find(|&position| indices[position] + 1 < radices[position])
                else {
                    self.phase = Phase::Exhausted;
                    return None;
                };
                indices[position] += 1;
                indices[position + 1..].fill(0);
            }
        }
        self.remaining = self.remaining.map(|remaining| remaining.saturating_sub(1));
        Some(self.indices.as_slice())
    }
}

impl Coroutine for ProductIndices {
    type Yield = Vec<usize>;

    fn resume(&mut self) -> GeneratorState<Vec<usize>> {
        self.advance().map(<[usize]>::to_vec).into()
    }

    fn name(&self) -> &'static str {
        "product_indices"
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        exact_hint(self.remaining)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn drain(mut next: impl FnMut() -> Option<Vec<usize>>) -> Vec<Vec<usize>> {
        std::iter::from_fn(move || next()).collect()
    }

    #[rstest]
    fn test_combinations_of_four_choose_two() {
        let mut engine = CombinationIndices::new(4, 2);
        let tuples = drain(|| engine.advance().map(<[usize]>::to_vec));
        assert_eq!(
            tuples,
            vec![
                vec![0, 1],
                vec![0, 2],
                vec![0, 3],
                vec![1, 2],
                vec![1, 3],
                vec![2, 3]
            ]
        );
    }

    #[rstest]
    #[case(0, 0, 1)]
    #[case(3, 0, 1)]
    #[case(3, 3, 1)]
    #[case(5, 2, 10)]
    #[case(2, 3, 0)]
    fn test_combination_counts(#[case] n: usize, #[case] r: usize, #[case] expected: usize) {
        let mut engine = CombinationIndices::new(n, r);
        assert_eq!(engine.size_hint(), (expected, Some(expected)));
        let tuples = drain(|| engine.advance().map(<[usize]>::to_vec));
        assert_eq!(tuples.len(), expected);
        assert_eq!(engine.size_hint(), (0, Some(0)));
    }

    #[rstest]
    fn test_exhausted_engine_stays_exhausted() {
        let mut engine = CombinationIndices::new(2, 2);
        assert_eq!(engine.advance(), Some(&[0, 1][..]));
        assert_eq!(engine.advance(), None);
        assert_eq!(engine.advance(), None);
    }

    #[rstest]
    fn test_replacement_of_three_choose_two() {
        let mut engine = ReplacementIndices::new(3, 2);
        let tuples = drain(|| engine.advance().map(<[usize]>::to_vec));
        assert_eq!(
            tuples,
            vec![
                vec![0, 0],
                vec![0, 1],
                vec![0, 2],
                vec![1, 1],
                vec![1, 2],
                vec![2, 2]
            ]
        );
    }

    #[rstest]
    fn test_replacement_tuples_may_be_longer_than_source() {
        let mut engine = ReplacementIndices::new(2, 3);
        assert_eq!(engine.size_hint(), (4, Some(4)));
        let tuples = drain(|| engine.advance().map(<[usize]>::to_vec));
        assert_eq!(
            tuples,
            vec![vec![0, 0, 0], vec![0, 0, 1], vec![0, 1, 1], vec![1, 1, 1]]
        );
    }

    #[rstest]
    #[case(0, 0, 1)]
    #[case(1, 1, 1)]
    #[case(4, 0, 1)]
    #[case(4, 3, 20)]
    #[case(2, 3, 4)]
    #[case(1, 4, 1)]
    #[case(3, 5, 21)]
    #[case(0, 1, 0)]
    fn test_replacement_counts(#[case] n: usize, #[case] r: usize, #[case] expected: usize) {
        let mut engine = ReplacementIndices::new(n, r);
        assert_eq!(engine.size_hint(), (expected, Some(expected)));
        let tuples = drain(|| engine.advance().map(<[usize]>::to_vec));
        assert_eq!(tuples.len(), expected);
    }

    #[rstest]
    fn test_permutations_of_three() {
        let mut engine = PermutationIndices::new(3, 3);
        let tuples = drain(|| engine.advance().map(<[usize]>::to_vec));
        assert_eq!(
            tuples,
            vec![
                vec![0, 1, 2],
                vec![0, 2, 1],
                vec![1, 0, 2],
                vec![1, 2, 0],
                vec![2, 0, 1],
                vec![2, 1, 0]
            ]
        );
    }

    #[rstest]
    #[case(0, 0, 1)]
    #[case(3, 0, 1)]
    #[case(4, 2, 12)]
    #[case(5, 5, 120)]
    #[case(2, 3, 0)]
    fn test_permutation_counts(#[case] n: usize, #[case] r: usize, #[case] expected: usize) {
        let mut engine = PermutationIndices::new(n, r);
        assert_eq!(engine.size_hint(), (expected, Some(expected)));
        let tuples = drain(|| engine.advance().map(<[usize]>::to_vec));
        assert_eq!(tuples.len(), expected);
    }

    #[rstest]
    fn test_product_odometer() {
        let mut engine = ProductIndices::new(vec![2, 2]);
        let tuples = drain(|| engine.advance().map(<[usize]>::to_vec));
        assert_eq!(tuples, vec![vec![0, 0], vec![0, 1], vec![1, 0], vec![1, 1]]);
    }

    #[rstest]
    #[case(vec![], 1)]
    #[case(vec![3, 0, 2], 0)]
    #[case(vec![3, 1, 2], 6)]
    fn test_product_counts(#[case] radices: Vec<usize>, #[case] expected: usize) {
        let mut engine = ProductIndices::new(radices);
        assert_eq!(engine.size_hint(), (expected, Some(expected)));
        let tuples = drain(|| engine.advance().map(<[usize]>::to_vec));
        assert_eq!(tuples.len(), expected);
    }

    #[rstest]
    fn test_large_arity_spills_to_heap() {
        let mut engine = CombinationIndices::new(12, 10);
        assert_eq!(engine.advance(), Some(&[0, 1, 2, 3, 4, 5, 6, 7, 8, 9][..]));
        assert_eq!(engine.advance(), Some(&[0, 1, 2, 3, 4, 5, 6, 7, 8, 10][..]));
    }

    #[rstest]
    fn test_oversized_arity_does_not_allocate_tuple() {
        let mut engine = PermutationIndices::new(3, usize::MAX);
        assert_eq!(engine.advance(), None);
        assert_eq!(engine.size_hint(), (0, Some(0)));
    }
}
