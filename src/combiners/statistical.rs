//! Statistical combiners: `RoundedMean`

use super::CombineFn;

/// Mean of integer values, rounded half away from zero.
///
/// - Accumulator: `(sum_i64, count_u64)`
/// - Output: `Option<i64>`, `None` for an empty input
#[derive(Clone, Copy, Debug, Default)]
pub struct RoundedMean;

impl CombineFn<i64, (i64, u64), Option<i64>> for RoundedMean {
    fn create(&self) -> (i64, u64) {
        (0, 0)
    }

    fn add_input(&self, acc: &mut (i64, u64), v: i64) {
        acc.0 += v;
        acc.1 += 1;
    }

    fn merge(&self, acc: &mut (i64, u64), other: (i64, u64)) {
        acc.0 += other.0;
        acc.1 += other.1;
    }

    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    fn finish(&self, acc: (i64, u64)) -> Option<i64> {
        if acc.1 == 0 {
            None
        } else {
            Some((acc.0 as f64 / acc.1 as f64).round() as i64)
        }
    }
}
