use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body returned by the `/heartbeat` endpoint.
///
/// The endpoint answers `{"status": "alive", "data": <row>}` when its backing
/// store is reachable and `{"status": "error", "message": ...}` otherwise.
/// Fields are kept untyped: only `data.content` decides what the user sees,
/// everything else is there for the diagnostic log.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HeartbeatResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<Value>,
}

impl HeartbeatResponse {
    /// Whether `data` carries anything. `null`, `false`, `0`, `""` and a
    /// missing field all count as empty.
    pub fn has_data(&self) -> bool {
        match &self.data {
            None | Some(Value::Null) => false,
            Some(Value::Bool(b)) => *b,
            Some(Value::Number(n)) => n.as_f64().map_or(true, |f| f != 0.0 && !f.is_nan()),
            Some(Value::String(s)) => !s.is_empty(),
            Some(Value::Array(_)) | Some(Value::Object(_)) => true,
        }
    }

    /// `Ok(None)` when there is no data, the rendered `content` when there is.
    /// Non-empty data without a `content` member is an error.
    pub fn blog_content(&self) -> anyhow::Result<Option<String>> {
        if !self.has_data() {
            return Ok(None);
        }
        match self.data.as_ref().and_then(|data| data.get("content")) {
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(Value::Null) | None => anyhow::bail!("Heartbeat data has no content"),
            Some(other) => Ok(Some(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> HeartbeatResponse {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn parses_alive_response_with_row() {
        let resp = parse(
            r#"{
                "status": "alive",
                "data": {
                    "id": 7,
                    "title": "First post",
                    "content": "hello",
                    "createdById": 1,
                    "modifiedById": 2,
                    "createdAt": "2024-03-01T10:00:00"
                }
            }"#,
        );
        assert_eq!(resp.status, Some(Value::from("alive")));
        assert_eq!(resp.blog_content().unwrap().as_deref(), Some("hello"));
    }

    #[test]
    fn unexpected_types_outside_content_are_tolerated() {
        let resp = parse(r#"{"status": 1, "message": [], "data": {"content": "hi", "id": "x"}}"#);
        assert_eq!(resp.blog_content().unwrap().as_deref(), Some("hi"));
    }

    #[test]
    fn empty_data_means_no_content() {
        for body in [
            "{}",
            r#"{"data": null}"#,
            r#"{"data": false}"#,
            r#"{"data": 0}"#,
            r#"{"data": 0.0}"#,
            r#"{"data": ""}"#,
        ] {
            let resp = parse(body);
            assert!(!resp.has_data(), "{}", body);
            assert_eq!(resp.blog_content().unwrap(), None, "{}", body);
        }
    }

    #[test]
    fn error_status_carries_message() {
        let resp = parse(r#"{"status": "error", "message": "db down"}"#);
        assert_eq!(resp.message, Some(Value::from("db down")));
        assert_eq!(resp.blog_content().unwrap(), None);
    }

    #[test]
    fn non_string_content_is_rendered() {
        let resp = parse(r#"{"data": {"content": 42}}"#);
        assert_eq!(resp.blog_content().unwrap().as_deref(), Some("42"));
    }

    #[test]
    fn data_without_content_is_rejected() {
        for body in [
            r#"{"data": {"id": 1}}"#,
            r#"{"data": {"content": null}}"#,
            r#"{"data": "text"}"#,
            r#"{"data": true}"#,
        ] {
            assert!(parse(body).blog_content().is_err(), "{}", body);
        }
    }
}
