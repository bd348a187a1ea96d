mod algorithms;
mod error;

use std::fmt;
use std::str::FromStr;

pub use algorithms::common::is_sorted_non_decreasing;
pub use error::SortError;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SortAlgorithm {
    HybridQuickSort,
    InsertionSort,
}

pub const ALL_ALGORITHMS: [SortAlgorithm; 2] =
    [SortAlgorithm::HybridQuickSort, SortAlgorithm::InsertionSort];

pub fn all_algorithms() -> &'static [SortAlgorithm] {
    &ALL_ALGORITHMS
}

pub fn algorithm_name(algo: SortAlgorithm) -> &'static str {
    match algo {
        SortAlgorithm::HybridQuickSort => "hybrid_quick_sort",
        SortAlgorithm::InsertionSort => "insertion_sort",
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(algorithm_name(*self))
    }
}

impl FromStr for SortAlgorithm {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        all_algorithms()
            .iter()
            .copied()
            .find(|&algo| algorithm_name(algo) == s)
            .ok_or_else(|| SortError::UnknownAlgorithm(s.to_owned()))
    }
}

#[derive(Clone, Copy, Debug)]
pub struct TunedParams {
    /// Ranges of at most this many elements are finished by insertion sort.
    pub insertion_threshold: usize,
}

pub const TUNED_PARAMS: TunedParams = TunedParams {
    insertion_threshold: 10,
};

/// Reusable state for the hybrid driver.
///
/// Holds the stack of pending inclusive `(lower, upper)` ranges plus counters
/// describing the most recent sort.
#[derive(Clone, Debug, Default)]
pub struct SortContext {
    pending: Vec<(usize, usize)>,
    peak_pending: usize,
    partitions: usize,
}

impl SortContext {
    /// Deepest pending-range stack seen during the last hybrid sort.
    pub fn peak_pending(&self) -> usize {
        self.peak_pending
    }

    /// Number of partition passes performed by the last hybrid sort.
    pub fn partitions(&self) -> usize {
        self.partitions
    }

    #[inline]
    pub(crate) fn reset(&mut self) {
        self.pending.clear();
        self.peak_pending = 0;
        self.partitions = 0;
    }

    #[inline]
    pub(crate) fn push_pending(&mut self, lower: usize, upper: usize) {
        self.pending.push((lower, upper));
        self.peak_pending = self.peak_pending.max(self.pending.len());
    }

    #[inline]
    pub(crate) fn pop_pending(&mut self) -> Option<(usize, usize)> {
        self.pending.pop()
    }

    #[inline]
    pub(crate) fn count_partition(&mut self) {
        self.partitions += 1;
    }
}

/// Sorts `data` in non-decreasing order with the hybrid quicksort.
pub fn sort(data: &mut [i32]) {
    let mut ctx = SortContext::default();
    algorithms::hybrid_quick_sort::sort(data, &mut ctx);
}

/// Sorts `data` after checking that `len` describes it.
///
/// Nothing is mutated when the lengths disagree.
pub fn sort_with_len(data: &mut [i32], len: usize) -> Result<(), SortError> {
    if len != data.len() {
        tracing::debug!(expected = len, actual = data.len(), "rejecting length mismatch");
        return Err(SortError::LengthMismatch {
            expected: len,
            actual: data.len(),
        });
    }
    sort(data);
    Ok(())
}

pub fn sort_i32(algo: SortAlgorithm, data: &mut [i32]) {
    let mut ctx = SortContext::default();
    sort_i32_with_ctx(algo, data, &mut ctx);
}

pub fn sort_i32_with_ctx(algo: SortAlgorithm, data: &mut [i32], ctx: &mut SortContext) {
    match algo {
        SortAlgorithm::HybridQuickSort => algorithms::hybrid_quick_sort::sort(data, ctx),
        SortAlgorithm::InsertionSort => algorithms::insertion_sort::sort(data, ctx),
    }
}
