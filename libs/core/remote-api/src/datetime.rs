//! Wire format for the remote API's unzoned timestamps.
//!
//! Use with `#[serde(with = "remote_api::datetime")]` on `NaiveDateTime`
//! fields, or `remote_api::datetime::option` on `Option<NaiveDateTime>`.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serializer, de};

/// Format written to the remote API.
pub const FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Parse any timestamp shape the API is known to emit.
///
/// Offsets are converted to UTC; a bare date means midnight.
pub fn parse(raw: &str) -> Result<NaiveDateTime, String> {
    let raw = raw.trim();

    if let Ok(zoned) = DateTime::parse_from_rfc3339(raw) {
        return Ok(zoned.naive_utc());
    }
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(naive);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or_else(|| format!("unrecognized timestamp '{}'", raw))
}

pub fn serialize<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&value.format(FORMAT).to_string())
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
    let raw = String::deserialize(deserializer)?;
    parse(&raw).map_err(de::Error::custom)
}

pub mod option {
    use super::*;

    pub fn serialize<S: Serializer>(
        value: &Option<NaiveDateTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(value) => super::serialize(value, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDateTime>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) if raw.trim().is_empty() => Ok(None),
            Some(raw) => parse(&raw).map(Some).map_err(de::Error::custom),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .and_then(|date| date.and_hms_opt(h, min, s))
            .unwrap()
    }

    #[test]
    fn test_parses_known_shapes() {
        assert_eq!(parse("2025-09-01").unwrap(), at(2025, 9, 1, 0, 0, 0));
        assert_eq!(parse("2025-09-01T10:30:00").unwrap(), at(2025, 9, 1, 10, 30, 0));
        assert_eq!(parse("2025-09-01T10:30:00.1234567").unwrap().date(), at(2025, 9, 1, 0, 0, 0).date());
        assert_eq!(parse("2025-09-01 10:30:00").unwrap(), at(2025, 9, 1, 10, 30, 0));
        assert_eq!(parse("2025-09-01T10:30").unwrap(), at(2025, 9, 1, 10, 30, 0));
        assert_eq!(parse("2025-09-01T10:30:00+02:00").unwrap(), at(2025, 9, 1, 8, 30, 0));
        assert_eq!(parse("2025-09-01T10:30:00Z").unwrap(), at(2025, 9, 1, 10, 30, 0));
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(parse("next tuesday").is_err());
        assert!(parse("").is_err());
    }

    #[derive(serde::Serialize, serde::Deserialize)]
    struct Holder {
        #[serde(with = "crate::datetime")]
        at: NaiveDateTime,
        #[serde(default, with = "crate::datetime::option")]
        maybe: Option<NaiveDateTime>,
    }

    #[test]
    fn test_serializes_without_offset() {
        let holder = Holder {
            at: at(2025, 9, 3, 0, 0, 0),
            maybe: None,
        };
        let json = serde_json::to_value(&holder).unwrap();
        assert_eq!(json["at"], "2025-09-03T00:00:00");
        assert!(json["maybe"].is_null());
    }

    #[test]
    fn test_option_treats_blank_as_none() {
        let holder: Holder = serde_json::from_str(r#"{"at":"2025-09-01","maybe":""}"#).unwrap();
        assert!(holder.maybe.is_none());
        let holder: Holder = serde_json::from_str(r#"{"at":"2025-09-01"}"#).unwrap();
        assert!(holder.maybe.is_none());
    }
}
