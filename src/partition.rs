//! Two-level partitioning of dated rows by (birth decade, country).

use crate::dates::DatedRow;
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::info;

/// Rows born strictly before this year are dropped before grouping.
pub const BIRTH_YEAR_CUTOFF: i32 = 1960;

/// Value-type key of a partition. Two rows share a partition iff both
/// components are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PartitionKey {
    /// Multiple of ten.
    pub decade: i32,
    /// Country verbatim from the row.
    pub country: String,
}

impl PartitionKey {
    #[must_use]
    pub fn new(birth_year: i32, country: impl Into<String>) -> Self {
        Self {
            decade: birth_year.div_euclid(10) * 10,
            country: country.into(),
        }
    }

    #[must_use]
    pub fn for_row(row: &DatedRow) -> Self {
        Self::new(row.birth_year, row.row.country.clone())
    }

    /// Directory name of the decade level, e.g. `1980-th`.
    #[must_use]
    pub fn decade_label(&self) -> String {
        format!("{}-th", self.decade)
    }

    /// `<decade label>/<country>`, relative to the output root.
    #[must_use]
    pub fn relative_dir(&self) -> PathBuf {
        PathBuf::from(self.decade_label()).join(&self.country)
    }
}

/// Ordered, non-empty group of rows sharing a [`PartitionKey`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    key: PartitionKey,
    rows: Vec<DatedRow>,
}

impl Partition {
    /// A partition only comes into existence with its first row.
    #[must_use]
    pub fn new(key: PartitionKey, first: DatedRow) -> Self {
        Self {
            key,
            rows: vec![first],
        }
    }

    pub fn push(&mut self, row: DatedRow) {
        self.rows.push(row);
    }

    #[must_use]
    pub fn key(&self) -> &PartitionKey {
        &self.key
    }

    /// Rows in the order they arrived.
    #[must_use]
    pub fn rows(&self) -> &[DatedRow] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Output of [`partition_rows`].
#[derive(Debug, Clone, Default)]
pub struct Partitioned {
    /// Partitions sorted by key.
    pub partitions: Vec<Partition>,
    /// Rows dropped by the birth-year cutoff.
    pub before_cutoff: usize,
}

impl Partitioned {
    #[must_use]
    pub fn total_rows(&self) -> usize {
        self.partitions.iter().map(Partition::len).sum()
    }
}

/// Drop rows born before `cutoff`, then group the rest by [`PartitionKey`].
///
/// Grouping is stable: within a partition rows keep their input order.
#[must_use]
pub fn partition_rows(rows: Vec<DatedRow>, cutoff: i32) -> Partitioned {
    let mut groups: BTreeMap<PartitionKey, Partition> = BTreeMap::new();
    let mut before_cutoff = 0usize;

    for row in rows {
        if row.birth_year < cutoff {
            before_cutoff += 1;
            continue;
        }
        let key = PartitionKey::for_row(&row);
        match groups.get_mut(&key) {
            Some(partition) => partition.push(row),
            None => {
                groups.insert(key.clone(), Partition::new(key, row));
            }
        }
    }

    let partitioned = Partitioned {
        partitions: groups.into_values().collect(),
        before_cutoff,
    };
    info!(
        cutoff,
        dropped = before_cutoff,
        remaining = partitioned.total_rows(),
        partitions = partitioned.partitions.len(),
        "removed rows born before cutoff and grouped the rest"
    );
    partitioned
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decade_floors_to_multiple_of_ten() {
        assert_eq!(PartitionKey::new(1960, "X").decade, 1960);
        assert_eq!(PartitionKey::new(1969, "X").decade, 1960);
        assert_eq!(PartitionKey::new(2001, "X").decade_label(), "2000-th");
        assert_eq!(
            PartitionKey::new(1987, "Norway").relative_dir(),
            PathBuf::from("1980-th").join("Norway")
        );
    }
}
