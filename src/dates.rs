//! Date display formatting and birth-year derivation.
//!
//! Source dates are RFC 3339 timestamps. They are rewritten into fixed display
//! patterns; the birth year used for partitioning is then read back from the
//! *formatted* birth date. A row whose birth year cannot be derived is dropped
//! here and counted, so every [`DatedRow`] carries a year.

use crate::record::FlatRow;
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use tracing::{debug, warn};

/// Display pattern of [`FlatRow::dob_date`] after formatting.
pub const BIRTH_DATE_FORMAT: &str = "%m/%d/%Y";

/// Display pattern of [`FlatRow::registered_date`] after formatting.
pub const REGISTERED_DATE_FORMAT: &str = "%m-%d-%Y, %H:%M:%S";

/// A formatted row plus the derived values later stages key and aggregate on.
///
/// `registered_year` is an aggregation helper and is never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatedRow {
    pub row: FlatRow,
    pub birth_year: i32,
    pub registered_year: Option<i32>,
}

/// Output of [`format_dates`].
#[derive(Debug, Clone, Default)]
pub struct FormattedRows {
    pub rows: Vec<DatedRow>,
    /// Rows excluded because no birth year could be derived.
    pub undated: usize,
}

fn parse_source_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Reformat a source date into `pattern`, or `None` if it does not parse.
#[must_use]
pub fn reformat_date(raw: &str, pattern: &str) -> Option<String> {
    parse_source_date(raw).map(|dt| dt.format(pattern).to_string())
}

/// Year of a birth date already in [`BIRTH_DATE_FORMAT`].
#[must_use]
pub fn birth_year_of(formatted: &str) -> Option<i32> {
    NaiveDate::parse_from_str(formatted, BIRTH_DATE_FORMAT)
        .ok()
        .map(|d| d.year())
}

/// Year of a registration date already in [`REGISTERED_DATE_FORMAT`].
#[must_use]
pub fn registered_year_of(formatted: &str) -> Option<i32> {
    NaiveDateTime::parse_from_str(formatted, REGISTERED_DATE_FORMAT)
        .ok()
        .map(|d| d.year())
}

fn reformat_field(row: usize, field: &'static str, raw: String, pattern: &str) -> String {
    match reformat_date(&raw, pattern) {
        Some(formatted) => formatted,
        None => {
            warn!(row, field, value = %raw, "unparseable date left as-is");
            raw
        }
    }
}

/// Format both date fields of every row and attach the derived years.
#[must_use]
pub fn format_dates(rows: Vec<FlatRow>) -> FormattedRows {
    let mut out = FormattedRows::default();
    for row in rows {
        let idx = row.global_index;
        let dob_date = reformat_field(idx, "dob_date", row.dob_date.clone(), BIRTH_DATE_FORMAT);
        let registered_date = reformat_field(
            idx,
            "registered_date",
            row.registered_date.clone(),
            REGISTERED_DATE_FORMAT,
        );
        let row = FlatRow {
            dob_date,
            registered_date,
            ..row
        };

        let Some(birth_year) = birth_year_of(&row.dob_date) else {
            warn!(row = idx, field = "dob_date", "no birth year; row excluded from partitioning");
            out.undated += 1;
            continue;
        };
        let registered_year = registered_year_of(&row.registered_date);
        out.rows.push(DatedRow {
            row,
            birth_year,
            registered_year,
        });
    }
    debug!(rows = out.rows.len(), undated = out.undated, "dates formatted");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reformats_provider_timestamps() {
        assert_eq!(
            reformat_date("1993-07-20T09:44:18.674Z", BIRTH_DATE_FORMAT).as_deref(),
            Some("07/20/1993")
        );
        assert_eq!(
            reformat_date("2016-02-03T21:05:07.123Z", REGISTERED_DATE_FORMAT).as_deref(),
            Some("02-03-2016, 21:05:07")
        );
        assert_eq!(reformat_date("not a date", BIRTH_DATE_FORMAT), None);
    }

    #[test]
    fn years_come_from_formatted_values() {
        assert_eq!(birth_year_of("07/20/1993"), Some(1993));
        assert_eq!(birth_year_of("1993-07-20T09:44:18.674Z"), None);
        assert_eq!(registered_year_of("02-03-2016, 21:05:07"), Some(2016));
        assert_eq!(registered_year_of("garbage"), None);
    }
}
