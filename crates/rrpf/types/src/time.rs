//! Canonical UTC rendering of instants.
//!
//! Every instant the protocol emits (canonical request timestamps, the
//! resolved `as_of`, `provenance.fulfilled_at`) uses one format: ISO-8601 in
//! UTC with a `Z` suffix, seconds precision, plus exactly six fractional
//! digits when the microsecond part is non-zero.

use chrono::{DateTime, FixedOffset, NaiveDateTime, SubsecRound, TimeZone, Utc};

/// Render an instant in the canonical UTC format.
pub fn canonical_utc<Tz: TimeZone>(instant: &DateTime<Tz>) -> String {
    let utc = instant.with_timezone(&Utc);
    if utc.timestamp_subsec_micros() == 0 {
        utc.format("%Y-%m-%dT%H:%M:%SZ").to_string()
    } else {
        utc.format("%Y-%m-%dT%H:%M:%S%.6fZ").to_string()
    }
}

/// Interpret a naive timestamp as UTC.
pub fn assume_utc(naive: NaiveDateTime) -> DateTime<FixedOffset> {
    naive.and_utc().fixed_offset()
}

/// Current instant truncated to the precision the canonical format keeps,
/// so a response survives a serialize/parse round trip unchanged.
pub fn now_utc() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// Serde adapter for `DateTime<Utc>` fields rendered with [`canonical_utc`].
pub mod canonical_utc_serde {
    use chrono::{DateTime, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(instant: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::canonical_utc(instant))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|instant| instant.with_timezone(&Utc))
            .map_err(de::Error::custom)
    }
}

/// Parse an incoming instant: RFC 3339 with an offset, or a naive
/// date-time which is taken as UTC.
pub fn parse_instant(raw: &str) -> Result<DateTime<FixedOffset>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(raw).or_else(|rfc3339_err| {
        raw.parse::<NaiveDateTime>()
            .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
            .map(assume_utc)
            .map_err(|_| rfc3339_err)
    })
}

/// Serde adapter for request-side instants accepted by [`parse_instant`].
pub mod instant_serde {
    use chrono::{DateTime, FixedOffset};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        instant: &DateTime<FixedOffset>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&instant.to_rfc3339())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateTime<FixedOffset>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_instant(&raw).map_err(de::Error::custom)
    }

    pub mod option {
        use chrono::{DateTime, FixedOffset};
        use serde::{de, Deserialize, Deserializer, Serializer};

        pub fn serialize<S: Serializer>(
            instant: &Option<DateTime<FixedOffset>>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match instant {
                Some(instant) => serializer.serialize_str(&instant.to_rfc3339()),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<DateTime<FixedOffset>>, D::Error> {
            Option::<String>::deserialize(deserializer)?
                .map(|raw| super::super::parse_instant(&raw).map_err(de::Error::custom))
                .transpose()
        }
    }
}
