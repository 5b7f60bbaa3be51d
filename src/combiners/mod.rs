//! Combiners used to summarize a partition.
//!
//! A combiner is a small accumulator protocol ([`CombineFn`]): create an
//! empty accumulator, fold values into it, merge two accumulators built over
//! adjacent slices, and finish into an output. The per-partition statistics
//! are all expressed this way:
//!
//! - [`Max<T>`] -- maximum value (`None` for an empty input).
//! - [`RoundedMean`] -- arithmetic mean of integers, rounded half away from zero.
//! - [`MostFrequent<T>`] -- mode with first-encountered tie-break.
//!
//! `merge` must be order-aware where the output depends on order: merging
//! `b` into `a` treats every value of `b` as arriving after every value of `a`.
//!
//! # Examples
//! ```
//! use roster_beam::combiners::{combine_all, Max, MostFrequent, RoundedMean};
//!
//! assert_eq!(combine_all(&Max::<i64>::new(), [30, 45, 22]), Some(45));
//! assert_eq!(combine_all(&RoundedMean, [1, 2]), Some(2));
//! assert_eq!(
//!     combine_all(&MostFrequent::<&str>::new(), ["X", "Y"]),
//!     Some("X")
//! );
//! ```

mod basic;
mod frequency;
mod statistical;

pub use basic::Max;
pub use frequency::{FrequencyAcc, MostFrequent};
pub use statistical::RoundedMean;

/// Accumulator protocol for aggregations.
pub trait CombineFn<V, A, O>: Send + Sync + 'static {
    fn create(&self) -> A;
    fn add_input(&self, acc: &mut A, v: V);
    fn merge(&self, acc: &mut A, other: A);
    fn finish(&self, acc: A) -> O;
}

/// Fold every value of `values`, in order, through `comb`.
pub fn combine_all<V, A, O, C>(comb: &C, values: impl IntoIterator<Item = V>) -> O
where
    C: CombineFn<V, A, O>,
{
    let mut acc = comb.create();
    for v in values {
        comb.add_input(&mut acc, v);
    }
    comb.finish(acc)
}
