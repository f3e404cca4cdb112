//! CloudWatch log search models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of `POST /api/search`.
///
/// Times are absolute instants serialized as RFC 3339 in UTC
/// (`2024-05-01T10:00:00Z`), so the backend never guesses a zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogSearchRequest {
    pub profile: String,
    pub handler: String,
    pub search_term: String,
    #[serde(with = "utc_seconds")]
    pub start_time: DateTime<Utc>,
    #[serde(with = "utc_seconds")]
    pub end_time: DateTime<Utc>,
}

mod utc_seconds {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::Serializer;

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Secs, true))
    }
}

/// One row of `POST /api/search`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub message: String,
    #[serde(rename = "logStream", default)]
    pub log_stream: String,
    #[serde(default)]
    pub log: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone};

    #[test]
    fn test_search_request_serializes_iso_times() {
        let start = Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();
        // An offset input is normalised to UTC on the wire.
        let end = FixedOffset::east_opt(2 * 3600)
            .unwrap()
            .with_ymd_and_hms(2024, 5, 1, 12, 30, 15)
            .unwrap()
            .with_timezone(&Utc);
        let request = LogSearchRequest {
            profile: "prod".into(),
            handler: "ingest".into(),
            search_term: "ERROR".into(),
            start_time: start,
            end_time: end,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["start_time"], "2024-05-01T09:00:00Z");
        assert_eq!(json["end_time"], "2024-05-01T10:30:15Z");
        assert_eq!(json["search_term"], "ERROR");
    }

    #[test]
    fn test_log_entry_renames_log_stream() {
        let entry: LogEntry = serde_json::from_value(serde_json::json!({
            "timestamp": "2024-05-01 09:15:00.000",
            "message": "boom",
            "logStream": "2024/05/01/[$LATEST]abc",
            "log": "123456789012:/aws/lambda/ingest"
        }))
        .unwrap();
        assert_eq!(entry.log_stream, "2024/05/01/[$LATEST]abc");
    }
}
