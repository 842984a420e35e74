//!
//! Serializes datetimes as ISO-8601 UTC strings
//! with millisecond precision, e.g. `2024-01-21T19:06:25.123Z`
//!

use serde::{ser::Error, Serializer};
use time::{macros::format_description, OffsetDateTime, UtcOffset};

pub fn serialize<S: Serializer>(v: &OffsetDateTime, s: S) -> Result<S::Ok, S::Error> {
    let iso8601 = v
        .to_offset(UtcOffset::UTC)
        .format(format_description!(
            "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z"
        ))
        .map_err(S::Error::custom)?;

    s.serialize_str(&iso8601)
}
