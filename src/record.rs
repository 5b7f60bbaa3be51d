//! Record types: the nested provider record and the flat working row.
//!
//! [`RawRecord`] mirrors only the parts of the provider payload the pipeline
//! reads; unknown fields are ignored and missing optional parts fall back to
//! their defaults. [`FlatRow`] is the unit every later stage works on and is
//! also the exact CSV schema of every persisted table.

use serde::{Deserialize, Serialize};

/// Nested person record as supplied by the record source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    pub gender: String,
    pub name: RawName,
    pub location: RawLocation,
    pub dob: RawDated,
    pub registered: RawDated,
    #[serde(default)]
    pub id: RawId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawName {
    #[serde(default)]
    pub title: String,
    pub first: String,
    pub last: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawLocation {
    pub country: String,
    #[serde(default)]
    pub timezone: RawTimezone,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawTimezone {
    /// Signed `HH:MM` offset from UTC, e.g. `+05:30`.
    #[serde(default)]
    pub offset: String,
}

/// A date string paired with an age in years (`dob` and `registered`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawDated {
    pub date: String,
    #[serde(default)]
    pub age: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawId {
    /// Provider sends `null` for some nationalities.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
}

fn null_as_empty<'de, D>(de: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(de)?.unwrap_or_default())
}

/// Single-level row with one named field per attribute used downstream.
///
/// Field order is the column order of every CSV the pipeline writes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatRow {
    pub global_index: usize,
    pub gender: String,
    pub title: String,
    pub first: String,
    pub last: String,
    pub country: String,
    pub timezone_offset: String,
    pub dob_date: String,
    pub dob_age: i64,
    pub registered_date: String,
    pub id_name: String,
    /// Local wall-clock time at the person's offset; empty when the offset
    /// could not be parsed.
    pub current_time: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_provider_payload_and_ignores_extra_fields() {
        let json = r#"{
            "gender": "female",
            "name": {"title": "Ms", "first": "Ada", "last": "Byron"},
            "location": {"city": "London", "country": "United Kingdom",
                         "timezone": {"offset": "+1:00", "description": "Brussels"}},
            "email": "ada@example.com",
            "dob": {"date": "1985-12-10T08:00:00.000Z", "age": 39},
            "registered": {"date": "2010-01-01T00:00:00.000Z", "age": 15},
            "id": {"name": null, "value": null}
        }"#;
        let rec: RawRecord = serde_json::from_str(json).unwrap();
        assert_eq!(rec.name.title, "Ms");
        assert_eq!(rec.location.timezone.offset, "+1:00");
        assert_eq!(rec.dob.age, 39);
        assert_eq!(rec.id.name, "");
    }
}
