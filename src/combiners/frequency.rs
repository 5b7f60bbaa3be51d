//! Frequency combiner: `MostFrequent`

use super::CombineFn;
use std::collections::HashMap;
use std::hash::Hash;
use std::marker::PhantomData;

/// Counts per distinct value, remembering first-seen order.
#[derive(Clone, Debug)]
pub struct FrequencyAcc<T> {
    counts: Vec<(T, u64)>,
    index: HashMap<T, usize>,
}

impl<T> Default for FrequencyAcc<T> {
    fn default() -> Self {
        Self {
            counts: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<T: Eq + Hash + Clone> FrequencyAcc<T> {
    fn add(&mut self, v: T, n: u64) {
        let existing = self.index.get(&v).copied();
        match existing {
            Some(i) => self.counts[i].1 += n,
            None => {
                self.index.insert(v.clone(), self.counts.len());
                self.counts.push((v, n));
            }
        }
    }
}

/// Most frequent value; ties go to the value encountered first.
///
/// - Accumulator: [`FrequencyAcc<T>`]
/// - Output: `Option<T>`, `None` for an empty input
#[derive(Clone, Copy, Debug, Default)]
pub struct MostFrequent<T>(pub PhantomData<T>);
impl<T> MostFrequent<T> {
    /// Convenience constructor (same as `Default`).
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> CombineFn<T, FrequencyAcc<T>, Option<T>> for MostFrequent<T>
where
    T: Eq + Hash + Clone + Send + Sync + 'static,
{
    fn create(&self) -> FrequencyAcc<T> {
        FrequencyAcc::default()
    }

    fn add_input(&self, acc: &mut FrequencyAcc<T>, v: T) {
        acc.add(v, 1);
    }

    fn merge(&self, acc: &mut FrequencyAcc<T>, other: FrequencyAcc<T>) {
        for (v, n) in other.counts {
            acc.add(v, n);
        }
    }

    fn finish(&self, acc: FrequencyAcc<T>) -> Option<T> {
        let mut best: Option<(T, u64)> = None;
        for (v, n) in acc.counts {
            // strict > keeps the earliest value on ties
            if best.as_ref().is_none_or(|(_, top)| n > *top) {
                best = Some((v, n));
            }
        }
        best.map(|(v, _)| v)
    }
}
