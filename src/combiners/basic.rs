//! Basic ordering combiner: Max

use super::CombineFn;
use std::marker::PhantomData;

/// Maximum value (requires `Ord`).
///
/// - Accumulator: `Option<T>`
/// - Output: `Option<T>`, `None` when no value was added
#[derive(Clone, Copy, Debug, Default)]
pub struct Max<T>(pub PhantomData<T>);
impl<T> Max<T> {
    /// Convenience constructor (same as `Default`).
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> CombineFn<T, Option<T>, Option<T>> for Max<T>
where
    T: Ord + Send + Sync + 'static,
{
    fn create(&self) -> Option<T> {
        None
    }

    fn add_input(&self, acc: &mut Option<T>, v: T) {
        match acc {
            Some(cur) => {
                if v > *cur {
                    *cur = v
                }
            }
            None => *acc = Some(v),
        }
    }

    fn merge(&self, acc: &mut Option<T>, other: Option<T>) {
        if let Some(b) = other {
            self.add_input(acc, b);
        }
    }

    fn finish(&self, acc: Option<T>) -> Option<T> {
        acc
    }
}
