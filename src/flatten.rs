//! Flattening of nested provider records into [`FlatRow`]s.
//!
//! Each raw record produces exactly one row. The only fallible derivation is
//! the local wall-clock time, computed from the record's UTC offset and a
//! reference "now" captured once per run; on failure the field is left empty
//! and the row still flows downstream.

use crate::error::OffsetError;
use crate::record::{FlatRow, RawRecord};
use chrono::{DateTime, TimeDelta, Utc};
use tracing::{debug, warn};

/// Display format of the derived local time.
pub const LOCAL_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Largest hour component accepted in an offset (UTC+14 is the real maximum).
const MAX_OFFSET_HOURS: i64 = 14;

/// Map the provider's honorific to its normalized spelling.
///
/// Titles outside the mapping pass through unchanged.
#[must_use]
pub fn normalize_title(raw: &str) -> String {
    match raw {
        "Mrs" => "missis",
        "Ms" => "miss",
        "Mr" => "mister",
        "Madame" => "mademoiselle",
        other => other,
    }
    .to_string()
}

/// Parse a `±HH:MM` offset into a signed duration.
///
/// The leading sign applies to both the hour and the minute component, so
/// `-03:30` is minus three and a half hours. A missing sign means positive and
/// the hour part may be a single digit (`5:45`), as the provider emits.
///
/// # Errors
/// Returns an [`OffsetError`] for empty input, anything not matching the
/// grammar, or components out of range.
pub fn parse_utc_offset(raw: &str) -> Result<TimeDelta, OffsetError> {
    let s = raw.trim();
    if s.is_empty() {
        return Err(OffsetError::Empty);
    }
    let (sign, rest) = match s.as_bytes()[0] {
        b'+' => (1, &s[1..]),
        b'-' => (-1, &s[1..]),
        _ => (1, s),
    };
    let malformed = || OffsetError::Malformed(raw.to_string());

    let (h, m) = rest.split_once(':').ok_or_else(malformed)?;
    let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(h) || h.len() > 2 || !all_digits(m) || m.len() != 2 {
        return Err(malformed());
    }
    let hours: i64 = h.parse().map_err(|_| malformed())?;
    let minutes: i64 = m.parse().map_err(|_| malformed())?;
    if hours > MAX_OFFSET_HOURS || minutes >= 60 {
        return Err(OffsetError::OutOfRange(raw.to_string()));
    }

    Ok(TimeDelta::minutes(sign * (hours * 60 + minutes)))
}

/// Render `now` shifted by `offset` in [`LOCAL_TIME_FORMAT`].
///
/// # Errors
/// Propagates the parse failure of [`parse_utc_offset`].
pub fn local_time(now: DateTime<Utc>, offset: &str) -> Result<String, OffsetError> {
    let delta = parse_utc_offset(offset)?;
    Ok((now + delta).format(LOCAL_TIME_FORMAT).to_string())
}

/// Flatten one raw record; `global_index` is assigned by the caller.
#[must_use]
pub fn flatten_record(global_index: usize, raw: &RawRecord, now: DateTime<Utc>) -> FlatRow {
    let offset = &raw.location.timezone.offset;
    let current_time = match local_time(now, offset) {
        Ok(t) => t,
        Err(err) => {
            warn!(
                row = global_index,
                field = "timezone_offset",
                error = %err,
                "local time derivation failed; leaving current_time empty"
            );
            String::new()
        }
    };

    FlatRow {
        global_index,
        gender: raw.gender.clone(),
        title: normalize_title(&raw.name.title),
        first: raw.name.first.clone(),
        last: raw.name.last.clone(),
        country: raw.location.country.clone(),
        timezone_offset: offset.clone(),
        dob_date: raw.dob.date.clone(),
        dob_age: raw.dob.age,
        registered_date: raw.registered.date.clone(),
        id_name: raw.id.name.clone(),
        current_time,
    }
}

/// Flatten a whole batch, numbering rows from 1 in source order.
#[must_use]
pub fn flatten_records(raws: &[RawRecord], now: DateTime<Utc>) -> Vec<FlatRow> {
    let rows: Vec<FlatRow> = raws
        .iter()
        .enumerate()
        .map(|(i, raw)| flatten_record(i + 1, raw, now))
        .collect();
    debug!(rows = rows.len(), "records flattened");
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn titles_map_and_pass_through() {
        assert_eq!(normalize_title("Mrs"), "missis");
        assert_eq!(normalize_title("Ms"), "miss");
        assert_eq!(normalize_title("Mr"), "mister");
        assert_eq!(normalize_title("Madame"), "mademoiselle");
        assert_eq!(normalize_title("Monsieur"), "Monsieur");
        assert_eq!(normalize_title(""), "");
    }

    #[test]
    fn sign_applies_to_minutes_too() {
        assert_eq!(parse_utc_offset("+05:30"), Ok(TimeDelta::minutes(330)));
        assert_eq!(parse_utc_offset("-03:30"), Ok(TimeDelta::minutes(-210)));
        assert_eq!(parse_utc_offset("-0:30"), Ok(TimeDelta::minutes(-30)));
        assert_eq!(parse_utc_offset("5:45"), Ok(TimeDelta::minutes(345)));
        assert_eq!(parse_utc_offset("0:00"), Ok(TimeDelta::zero()));
    }

    #[test]
    fn rejects_malformed_offsets() {
        assert_eq!(parse_utc_offset(""), Err(OffsetError::Empty));
        assert!(matches!(parse_utc_offset("abc"), Err(OffsetError::Malformed(_))));
        assert!(matches!(parse_utc_offset("+5"), Err(OffsetError::Malformed(_))));
        assert!(matches!(parse_utc_offset("+05:3"), Err(OffsetError::Malformed(_))));
        assert!(matches!(parse_utc_offset("+-5:00"), Err(OffsetError::Malformed(_))));
        assert!(matches!(parse_utc_offset("+05:75"), Err(OffsetError::OutOfRange(_))));
        assert!(matches!(parse_utc_offset("+15:00"), Err(OffsetError::OutOfRange(_))));
    }

    #[test]
    fn local_time_shifts_reference_now() {
        assert_eq!(local_time(noon(), "+05:30").unwrap(), "2024-03-01 17:30:00");
        assert_eq!(local_time(noon(), "-03:00").unwrap(), "2024-03-01 09:00:00");
        assert_eq!(local_time(noon(), "-12:00").unwrap(), "2024-03-01 00:00:00");
    }
}
