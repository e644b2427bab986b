// Box is using RFC3339 in UTC
// 2024-01-15T10:30:00Z

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Seconds between the unix epoch and `0001-01-01T00:00:00Z`
const ZERO_TIMESTAMP: i64 = -62_135_596_800;
const ZERO_RFC3339: &str = "0001-01-01T00:00:00Z";

fn is_zero_instant(value: &DateTime<Utc>) -> bool {
    value.timestamp() == ZERO_TIMESTAMP && value.timestamp_subsec_nanos() == 0
}

/// A point in time as exchanged with the Box API.
///
/// The wire representation is always an RFC 3339 string in UTC. The unset
/// state is the zero value, written `0001-01-01T00:00:00Z` on the wire.
///
/// ```
/// use box_entity::date::BoxTime;
///
/// let time = BoxTime::decode(br#""2024-01-15T10:30:00Z""#).unwrap();
/// assert_eq!(time.encode(), r#""2024-01-15T10:30:00Z""#);
///
/// let empty = BoxTime::decode(b"null").unwrap();
/// assert!(empty.is_zero());
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct BoxTime(Option<DateTime<Utc>>);

impl BoxTime {
    /// The canonical zero value
    pub const fn zero() -> Self {
        Self(None)
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_none()
    }

    /// The wrapped instant, `None` for the zero value
    pub fn as_datetime(&self) -> Option<&DateTime<Utc>> {
        self.0.as_ref()
    }

    /// Decodes a raw JSON value.
    ///
    /// Empty input and the `null` literal give the zero value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] when the input is not a JSON string.
    /// Returns [`Error::Time`] when the string is not a valid RFC 3339 timestamp.
    pub fn decode(raw: &[u8]) -> Result<Self, Error> {
        if raw.is_empty() {
            return Ok(Self::zero());
        }
        match serde_json::from_slice::<Option<String>>(raw)? {
            Some(value) => value.parse::<Self>().map_err(Error::from),
            None => Ok(Self::zero()),
        }
    }

    /// Encodes the timestamp as a JSON string
    pub fn encode(&self) -> String {
        serde_json::Value::String(self.to_string()).to_string()
    }
}

impl From<DateTime<Utc>> for BoxTime {
    fn from(value: DateTime<Utc>) -> Self {
        if is_zero_instant(&value) {
            tracing::trace!("normalizing zero instant");
            Self::zero()
        } else {
            Self(Some(value))
        }
    }
}

impl From<BoxTime> for Option<DateTime<Utc>> {
    fn from(value: BoxTime) -> Self {
        value.0
    }
}

impl FromStr for BoxTime {
    type Err = chrono::ParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        DateTime::parse_from_rfc3339(value)
            .map(|fixed| Self::from(fixed.with_timezone(&Utc)))
            .map_err(|err| {
                tracing::debug!("unable to parse timestamp {value:?}: {err}");
                err
            })
    }
}

impl fmt::Display for BoxTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(ref value) => f.write_str(&value.to_rfc3339_opts(SecondsFormat::Secs, true)),
            None => f.write_str(ZERO_RFC3339),
        }
    }
}

impl Serialize for BoxTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for BoxTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(value) => value.parse::<Self>().map_err(serde::de::Error::custom),
            None => Ok(Self::zero()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::BoxTime;
    use crate::error::Error;
    use chrono::{TimeZone, Utc};

    #[test]
    fn should_encode_then_decode_known_instant() {
        crate::tests::init();
        let instant = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        let time = BoxTime::from(instant);
        let encoded = time.encode();
        assert_eq!(encoded, r#""2024-01-15T10:30:00Z""#);
        let decoded = BoxTime::decode(encoded.as_bytes()).unwrap();
        assert_eq!(decoded, time);
        assert_eq!(decoded.as_datetime(), Some(&instant));
    }

    #[test]
    fn should_decode_null_as_zero() {
        crate::tests::init();
        let time = BoxTime::decode(b"null").unwrap();
        assert!(time.is_zero());
        assert_eq!(time, BoxTime::zero());
    }

    #[test]
    fn should_decode_empty_as_zero() {
        crate::tests::init();
        assert!(BoxTime::decode(b"").unwrap().is_zero());
    }

    #[test]
    fn should_fail_parsing_invalid_time() {
        crate::tests::init();
        let err = BoxTime::decode(br#""not-a-time""#).unwrap_err();
        assert!(matches!(err, Error::Time(_)));
    }

    #[test]
    fn should_fail_decoding_non_string() {
        crate::tests::init();
        let err = BoxTime::decode(b"42").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn should_normalize_zero_instant() {
        crate::tests::init();
        let time = BoxTime::decode(br#""0001-01-01T00:00:00Z""#).unwrap();
        assert!(time.is_zero());
        assert_eq!(time.as_datetime(), None);
    }

    #[test]
    fn should_encode_zero_value() {
        assert_eq!(BoxTime::zero().encode(), r#""0001-01-01T00:00:00Z""#);
    }

    #[test]
    fn should_convert_offset_to_utc() {
        crate::tests::init();
        let time: BoxTime = "2024-01-15T12:30:00+02:00".parse().unwrap();
        assert_eq!(time.to_string(), "2024-01-15T10:30:00Z");
    }

    #[test]
    fn should_drop_fraction_when_encoding() {
        crate::tests::init();
        let time: BoxTime = "2024-01-15T10:30:00.250Z".parse().unwrap();
        assert_eq!(time.encode(), r#""2024-01-15T10:30:00Z""#);
    }

    #[test]
    fn should_deserialize_with_serde() {
        crate::tests::init();
        let time: BoxTime = serde_json::from_str(r#""2013-12-02T18:31:14-08:00""#).unwrap();
        assert_eq!(time.to_string(), "2013-12-03T02:31:14Z");
        let err = serde_json::from_str::<BoxTime>(r#""yesterday""#).unwrap_err();
        assert!(err.is_data());
    }
}
