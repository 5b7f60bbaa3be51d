//! Per-partition summary statistics and the file name that encodes them.

use crate::combiners::{combine_all, Max, MostFrequent, RoundedMean};
use crate::partition::Partition;
use serde::Serialize;
use std::fmt;

/// Rendered in place of the average when no row had a usable registration date.
pub const UNKNOWN_AVERAGE: &str = "unknown";

/// The three summaries embedded in a partition's file name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PartitionStats {
    /// Maximum `dob_age` in the partition.
    pub max_age: i64,
    /// Rounded mean of `current_year - registration year`.
    pub avg_registered: Option<i64>,
    /// Most frequent `id_name`, first-encountered on ties.
    pub popular_id: String,
}

impl PartitionStats {
    /// Compute the statistics of `partition`, or `None` if it has no rows.
    #[must_use]
    pub fn compute(partition: &Partition, current_year: i32) -> Option<Self> {
        let rows = partition.rows();
        let max_age = combine_all(&Max::<i64>::new(), rows.iter().map(|r| r.row.dob_age))?;
        let popular_id = combine_all(
            &MostFrequent::<String>::new(),
            rows.iter().map(|r| r.row.id_name.clone()),
        )?;
        let avg_registered = combine_all(
            &RoundedMean,
            rows.iter()
                .filter_map(|r| r.registered_year)
                .map(|y| i64::from(current_year - y)),
        );

        Some(Self {
            max_age,
            avg_registered,
            popular_id,
        })
    }

    /// `max_age_<max>_avg_registered_<avg>_popular_id_<id>.csv`
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{self}.csv")
    }
}

impl fmt::Display for PartitionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "max_age_{}_avg_registered_", self.max_age)?;
        match self.avg_registered {
            Some(avg) => write!(f, "{avg}")?,
            None => f.write_str(UNKNOWN_AVERAGE)?,
        }
        write!(f, "_popular_id_{}", self.popular_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_layout() {
        let stats = PartitionStats {
            max_age: 45,
            avg_registered: Some(12),
            popular_id: "SSN".into(),
        };
        assert_eq!(
            stats.file_name(),
            "max_age_45_avg_registered_12_popular_id_SSN.csv"
        );

        let unknown = PartitionStats {
            avg_registered: None,
            ..stats
        };
        assert_eq!(
            unknown.file_name(),
            "max_age_45_avg_registered_unknown_popular_id_SSN.csv"
        );
    }
}
