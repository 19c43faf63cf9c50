//! User-facing error notices and the admin data-fetch contract
//!
//! Every failure shown to a visitor uses the same [`ErrorNotice`] shape:
//! a message, optionally the field it concerns and a machine code.
//! Local validation (see [`DataRange`]) produces notices before any remote
//! call is made; remote failures are mapped with
//! [`ErrorNotice::from_api_error`].

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Message used when a remote error has no usable shape
pub const GENERIC_FETCH_MESSAGE: &str = "Failed to fetch data";

/// A structured, displayable error
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorNotice {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl ErrorNotice {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            field: None,
            code: None,
        }
    }

    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Maps a remote error body to a notice.
    ///
    /// The API answers with `{"error": code, "field": field, "message": text}`.
    /// A body without a non-blank `message` falls back to the generic notice.
    pub fn from_api_error(body: &Value) -> Self {
        let text = |key: &str| {
            body.get(key)
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };

        match text("message") {
            Some(message) => Self {
                message,
                field: text("field"),
                code: text("error"),
            },
            None => Self::new(GENERIC_FETCH_MESSAGE),
        }
    }
}

impl fmt::Display for ErrorNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(field) = &self.field {
            write!(f, "[{}] ", field)?;
        }
        write!(f, "{}", self.message)?;
        if let Some(code) = &self.code {
            write!(f, " (code: {})", code)?;
        }
        Ok(())
    }
}

impl std::error::Error for ErrorNotice {}

/// Inclusive record index range for the admin results fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "[u32; 2]")]
pub struct DataRange {
    start: u32,
    end: u32,
}

impl DataRange {
    /// Validates a range: both bounds non-negative and `start <= end`
    pub fn new(start: i64, end: i64) -> Result<Self, ErrorNotice> {
        let invalid = || {
            ErrorNotice::new("Invalid data range")
                .with_field("data-range")
                .with_code("invalid_range")
        };

        if start > end {
            return Err(invalid());
        }
        let start = u32::try_from(start).map_err(|_| invalid())?;
        let end = u32::try_from(end).map_err(|_| invalid())?;

        Ok(Self { start, end })
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    /// Number of records the range covers. `0..=u32::MAX` does not fit a `u32`.
    pub fn count(&self) -> u64 {
        u64::from(self.end) - u64::from(self.start) + 1
    }
}

impl From<DataRange> for [u32; 2] {
    fn from(range: DataRange) -> Self {
        [range.start, range.end]
    }
}

/// Request body for the admin results fetch
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DataRequest {
    pub token: String,
    #[serde(rename = "data-range")]
    pub data_range: DataRange,
}

impl DataRequest {
    pub fn new(token: impl Into<String>, data_range: DataRange) -> Self {
        Self {
            token: token.into(),
            data_range,
        }
    }
}

/// One quiz submission as returned to the admin panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HueRecord {
    pub name: String,
    /// Word -> chosen color label
    #[serde(default)]
    pub choice: BTreeMap<String, String>,
}

/// Response body of the admin results fetch
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataResponse {
    #[serde(default)]
    pub records: Vec<HueRecord>,
}

impl DataResponse {
    /// Interprets a saved response body: a records list, or an error notice
    pub fn from_body(body: &Value) -> Result<Self, ErrorNotice> {
        if body.get("records").is_some() {
            serde_json::from_value(body.clone())
                .map_err(|e| ErrorNotice::new(format!("Malformed records: {}", e)))
        } else {
            Err(ErrorNotice::from_api_error(body))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn display_includes_optional_parts() {
        let notice = ErrorNotice::new("Invalid data range")
            .with_field("data-range")
            .with_code("invalid_range");
        assert_eq!(
            notice.to_string(),
            "[data-range] Invalid data range (code: invalid_range)"
        );
        assert_eq!(ErrorNotice::new("Oops").to_string(), "Oops");
    }

    #[test]
    fn maps_api_error_body() {
        let notice = ErrorNotice::from_api_error(&json!({
            "error": "unauthorized",
            "field": "token",
            "message": "session expired"
        }));
        assert_eq!(notice.message, "session expired");
        assert_eq!(notice.field.as_deref(), Some("token"));
        assert_eq!(notice.code.as_deref(), Some("unauthorized"));
    }

    #[test]
    fn unknown_shapes_fall_back() {
        for body in [json!("boom"), json!({"status": 500}), json!({"message": "  "})] {
            let notice = ErrorNotice::from_api_error(&body);
            assert_eq!(notice, ErrorNotice::new(GENERIC_FETCH_MESSAGE));
        }
    }

    #[test]
    fn range_validation() {
        assert!(DataRange::new(0, 24).is_ok());
        assert!(DataRange::new(5, 5).is_ok());

        let err = DataRange::new(10, 2).unwrap_err();
        assert_eq!(err.field.as_deref(), Some("data-range"));
        assert!(DataRange::new(-1, 3).is_err());
        assert!(DataRange::new(0, -3).is_err());
    }

    #[test]
    fn range_len_is_inclusive() {
        assert_eq!(DataRange::new(0, 24).unwrap().count(), 25);
        assert_eq!(DataRange::new(3, 3).unwrap().count(), 1);
    }

    #[test]
    fn full_range_count_does_not_overflow() {
        let range = DataRange::new(0, i64::from(u32::MAX)).unwrap();
        assert_eq!(range.count(), 1 << 32);
        assert!(DataRange::new(0, i64::from(u32::MAX) + 1).is_err());
    }

    #[test]
    fn request_body_shape() {
        let request = DataRequest::new("abc", DataRange::new(0, 24).unwrap());
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"token": "abc", "data-range": [0, 24]})
        );
    }

    #[test]
    fn response_body_records_or_notice() {
        let ok = DataResponse::from_body(&json!({
            "records": [{"name": "aki", "choice": {"sky": "青"}}]
        }))
        .unwrap();
        assert_eq!(ok.records[0].choice["sky"], "青");

        let err = DataResponse::from_body(&json!({"error": "forbidden", "message": "admin only"}))
            .unwrap_err();
        assert_eq!(err.code.as_deref(), Some("forbidden"));
    }

    #[test]
    fn hue_record_parses_without_choices() {
        let record: HueRecord = serde_json::from_value(json!({"name": "aki"})).unwrap();
        assert!(record.choice.is_empty());
    }
}
