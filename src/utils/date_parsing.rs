use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// Parse a timestamp the way clients and football-data.org write them.
///
/// Accepts RFC 3339 (`2023-01-01T15:00:00Z`, `2023-01-01T16:00:00+01:00`),
/// naive date-times (`2023-01-01T15:00:00`, read as UTC) and plain dates
/// (`2023-01-01`, midnight UTC).
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Upstream timestamp that keeps the exact text it was read from.
///
/// Comparisons use the parsed instant, serialization writes the original
/// string back so raw records leave the service unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UtcTimestamp {
    raw: String,
    instant: DateTime<Utc>,
}

impl UtcTimestamp {
    pub fn parse(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        let instant = parse_timestamp(&raw)?;
        Some(Self { raw, instant })
    }

    pub fn instant(&self) -> &DateTime<Utc> {
        &self.instant
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl Serialize for UtcTimestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for UtcTimestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        UtcTimestamp::parse(raw.clone())
            .ok_or_else(|| de::Error::custom(format!("invalid timestamp: {}", raw)))
    }
}
