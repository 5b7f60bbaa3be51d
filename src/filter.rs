//! Row filters applied between flattening and date formatting.

use crate::record::FlatRow;
use tracing::info;

/// Optional predicates over flat rows.
///
/// The gender filter runs first, then the cap, so the cap always counts rows
/// that already passed the gender filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowFilter {
    /// Case-insensitive equality against [`FlatRow::gender`].
    pub gender: Option<String>,
    /// Keep only the first `n` rows; `n <= 0` disables the cap.
    pub max_rows: Option<i64>,
}

impl RowFilter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = Some(gender.into());
        self
    }

    #[must_use]
    pub fn with_max_rows(mut self, n: i64) -> Self {
        self.max_rows = Some(n);
        self
    }

    fn effective_cap(&self) -> Option<usize> {
        self.max_rows
            .filter(|n| *n > 0)
            .map(|n| usize::try_from(n).unwrap_or(usize::MAX))
    }

    /// Apply the filters, preserving relative order.
    #[must_use]
    pub fn apply(&self, rows: Vec<FlatRow>) -> Vec<FlatRow> {
        let mut rows = rows;

        if let Some(gender) = &self.gender {
            rows.retain(|r| r.gender.eq_ignore_ascii_case(gender));
            info!(gender = %gender, remaining = rows.len(), "filtered by gender");
        }

        if let Some(cap) = self.effective_cap() {
            rows.truncate(cap);
            info!(cap, remaining = rows.len(), "capped row count");
        }

        rows
    }
}

/// Free-function form of [`RowFilter::apply`].
#[must_use]
pub fn apply_filters(rows: Vec<FlatRow>, gender: Option<&str>, max_rows: Option<i64>) -> Vec<FlatRow> {
    RowFilter {
        gender: gender.map(str::to_string),
        max_rows,
    }
    .apply(rows)
}
