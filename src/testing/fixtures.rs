//! Pre-built provider batches.

use super::RawRecordBuilder;
use crate::record::RawRecord;
use chrono::{DateTime, TimeZone, Utc};

/// Reference time the fixture expectations are computed against
/// (2024-06-15 12:00:00 UTC).
#[must_use]
pub fn fixture_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0)
        .single()
        .unwrap_or_default()
}

/// Eight records producing three partitions at [`fixture_now`]:
///
/// | partition | rows (global index) | max age | avg registered | popular id |
/// |---|---|---|---|---|
/// | `1970-th/Brazil` | 4, 7 | 52 | 19 | `CPF` (tie, first seen) |
/// | `1980-th/Norway` | 1, 2, 3 | 43 | 10 | `FN` |
/// | `1990-th/France` | 6 | 24 | 4 | `INSEE` |
///
/// Row 5 is born in 1955 (dropped by the cutoff), row 6 has a malformed
/// offset (empty local time), row 8 has an unparseable birth date (undated).
#[must_use]
pub fn sample_raw_records() -> Vec<RawRecord> {
    vec![
        RawRecordBuilder::new()
            .gender("female")
            .name("Ms", "Ingrid", "Berg")
            .country("Norway")
            .offset("+1:00")
            .born("1985-04-12T10:00:00.000Z", 39)
            .registered("2010-05-01T08:30:00.000Z")
            .id_name("FN")
            .build(),
        RawRecordBuilder::new()
            .gender("male")
            .name("Mr", "Ola", "Nordmann")
            .country("Norway")
            .offset("+1:00")
            .born("1987-09-30T22:15:00.000Z", 36)
            .registered("2014-03-03T12:00:00.000Z")
            .id_name("FN")
            .build(),
        RawRecordBuilder::new()
            .gender("female")
            .name("Mrs", "Kari", "Hansen")
            .country("Norway")
            .offset("+1:00")
            .born("1981-01-15T06:45:00.000Z", 43)
            .registered("2018-07-07T07:07:07.000Z")
            .id_name("SSN")
            .build(),
        RawRecordBuilder::new()
            .gender("male")
            .name("Mr", "Joao", "Silva")
            .country("Brazil")
            .offset("-3:00")
            .born("1972-02-02T02:02:02.000Z", 52)
            .registered("2004-11-11T11:11:11.000Z")
            .id_name("CPF")
            .build(),
        RawRecordBuilder::new()
            .gender("female")
            .name("Madame", "Anne", "Favre")
            .country("Switzerland")
            .offset("+1:00")
            .born("1955-06-06T00:00:00.000Z", 69)
            .registered("2003-01-01T00:00:00.000Z")
            .id_name("AVS")
            .build(),
        RawRecordBuilder::new()
            .gender("male")
            .name("Monsieur", "Luc", "Martin")
            .country("France")
            .offset("abc")
            .born("1999-12-31T23:59:59.000Z", 24)
            .registered("2020-02-02T20:20:20.000Z")
            .id_name("INSEE")
            .build(),
        RawRecordBuilder::new()
            .gender("female")
            .name("Miss", "Ana", "Souza")
            .country("Brazil")
            .offset("-3:00")
            .born("1978-08-08T08:08:08.000Z", 45)
            .registered("2006-06-06T06:06:06.000Z")
            .id_name("RG")
            .build(),
        RawRecordBuilder::new()
            .gender("male")
            .name("Mr", "Per", "Olsen")
            .country("Norway")
            .offset("+1:00")
            .born("unknown", 30)
            .registered("2012-12-12T12:12:12.000Z")
            .id_name("FN")
            .build(),
    ]
}
