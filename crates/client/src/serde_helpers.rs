//! Serde helpers for loosely typed backend fields.
//!
//! Responsibilities:
//! - Accept either JSON numbers or strings for fields the backend emits both ways
//!   (e.g. `battery_percentage` is an integer or `"N/A"`).
//!
//! Invariants / assumptions:
//! - Values are kept as display strings; no unit conversion happens here.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    U64(u64),
    I64(i64),
    F64(f64),
    Bool(bool),
}

impl StringOrNumber {
    fn into_string(self) -> String {
        match self {
            StringOrNumber::String(s) => s,
            StringOrNumber::U64(v) => v.to_string(),
            StringOrNumber::I64(v) => v.to_string(),
            StringOrNumber::F64(v) => v.to_string(),
            StringOrNumber::Bool(v) => v.to_string(),
        }
    }
}

pub fn opt_string_from_number_or_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<StringOrNumber>::deserialize(deserializer)?.map(StringOrNumber::into_string))
}

pub fn string_from_number_or_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<StringOrNumber>::deserialize(deserializer)?
        .map(StringOrNumber::into_string)
        .unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "opt_string_from_number_or_string")]
        value: Option<String>,
    }

    #[test]
    fn test_accepts_number_string_and_null() {
        let p: Probe = serde_json::from_str(r#"{"value": 87}"#).unwrap();
        assert_eq!(p.value.as_deref(), Some("87"));
        let p: Probe = serde_json::from_str(r#"{"value": "N/A"}"#).unwrap();
        assert_eq!(p.value.as_deref(), Some("N/A"));
        let p: Probe = serde_json::from_str(r#"{"value": null}"#).unwrap();
        assert_eq!(p.value, None);
        let p: Probe = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(p.value, None);
    }
}
