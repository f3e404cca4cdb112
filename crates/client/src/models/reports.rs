//! Canned report and simple acknowledgement models.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Which labels report to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelDay {
    Today,
    Tomorrow,
}

impl LabelDay {
    pub fn path(self) -> &'static str {
        match self {
            LabelDay::Today => "/api/labels/today",
            LabelDay::Tomorrow => "/api/labels/tomorrow",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LabelDay::Today => "Today",
            LabelDay::Tomorrow => "Tomorrow",
        }
    }
}

/// Result of `GET /api/labels/{today,tomorrow}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelsOutput {
    #[serde(default)]
    pub output: String,
}

/// `{message}` acknowledgement returned by write endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Result of `GET /health`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    #[serde(default)]
    pub status: String,
}

/// Free-form statistics from `GET /api/tools/modem-failed-count`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToolReport(pub Value);

impl ToolReport {
    pub fn message(&self) -> Option<&str> {
        self.0.get("message").and_then(Value::as_str)
    }

    /// Error reported inside a 2xx body.
    pub fn error(&self) -> Option<&str> {
        self.0.get("error").and_then(Value::as_str)
    }

    /// The `message` field when present, otherwise the whole payload pretty-printed.
    pub fn display_text(&self) -> String {
        match self.message() {
            Some(message) => message.to_string(),
            None => serde_json::to_string_pretty(&self.0).unwrap_or_else(|_| self.0.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_display_prefers_message() {
        let report = ToolReport(json!({"message": "No failed modems", "count": 0}));
        assert_eq!(report.display_text(), "No failed modems");
    }

    #[test]
    fn test_display_falls_back_to_pretty_payload() {
        let report = ToolReport(json!({"count": 3, "iccids": ["1", "2", "3"]}));
        let text = report.display_text();
        assert!(text.contains("\"count\": 3"));
        assert!(text.contains('\n'));
        assert!(report.error().is_none());
    }

    #[test]
    fn test_error_field() {
        let report = ToolReport(json!({"error": "table missing"}));
        assert_eq!(report.error(), Some("table missing"));
    }
}
