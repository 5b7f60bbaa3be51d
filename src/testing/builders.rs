//! Fluent construction of provider records.

use crate::record::{RawDated, RawId, RawLocation, RawName, RawRecord, RawTimezone};

/// A fluent builder for [`RawRecord`].
///
/// Unset fields get plausible defaults, so tests only spell out what they
/// assert on.
///
/// # Example
///
/// ```
/// use roster_beam::testing::RawRecordBuilder;
///
/// let rec = RawRecordBuilder::new()
///     .gender("female")
///     .country("Norway")
///     .born("1985-04-12T10:00:00.000Z", 39)
///     .build();
///
/// assert_eq!(rec.location.country, "Norway");
/// ```
#[derive(Debug, Clone)]
pub struct RawRecordBuilder {
    rec: RawRecord,
}

impl RawRecordBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            rec: RawRecord {
                gender: "female".into(),
                name: RawName {
                    title: "Ms".into(),
                    first: "Jane".into(),
                    last: "Doe".into(),
                },
                location: RawLocation {
                    country: "Norway".into(),
                    timezone: RawTimezone {
                        offset: "+1:00".into(),
                    },
                },
                dob: RawDated {
                    date: "1980-01-01T00:00:00.000Z".into(),
                    age: 44,
                },
                registered: RawDated {
                    date: "2010-01-01T00:00:00.000Z".into(),
                    age: 14,
                },
                id: RawId {
                    name: "FN".into(),
                },
            },
        }
    }

    #[must_use]
    pub fn gender(mut self, gender: &str) -> Self {
        self.rec.gender = gender.into();
        self
    }

    #[must_use]
    pub fn name(mut self, title: &str, first: &str, last: &str) -> Self {
        self.rec.name = RawName {
            title: title.into(),
            first: first.into(),
            last: last.into(),
        };
        self
    }

    #[must_use]
    pub fn country(mut self, country: &str) -> Self {
        self.rec.location.country = country.into();
        self
    }

    #[must_use]
    pub fn offset(mut self, offset: &str) -> Self {
        self.rec.location.timezone.offset = offset.into();
        self
    }

    #[must_use]
    pub fn born(mut self, date: &str, age: i64) -> Self {
        self.rec.dob = RawDated {
            date: date.into(),
            age,
        };
        self
    }

    #[must_use]
    pub fn registered(mut self, date: &str) -> Self {
        self.rec.registered.date = date.into();
        self
    }

    #[must_use]
    pub fn id_name(mut self, name: &str) -> Self {
        self.rec.id.name = name.into();
        self
    }

    #[must_use]
    pub fn build(self) -> RawRecord {
        self.rec
    }
}

impl Default for RawRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}
