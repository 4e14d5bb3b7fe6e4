//! Wire envelope shapes for protocol traffic.
//!
//! Shapes only: request/response correlation, event routing, and the
//! transport itself live in the consuming client.

use crate::protocol::error::{CdpError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// Outbound command envelope.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    pub id: u64,
    /// Target session, omitted for browser-level commands.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    pub method: String,
    #[serde(skip_serializing_if = "Value::is_null")]
    pub params: Value,
}

/// Inbound reply envelope. Carries either a result or an error object.
#[derive(Debug, Clone, Deserialize)]
pub struct Response {
    pub id: u64,
    #[serde(default)]
    pub result: Value,
    #[serde(default)]
    pub error: Option<CdpError>,
}

impl Response {
    pub fn decode(raw: &[u8]) -> Result<Self> {
        let response: Response = serde_json::from_slice(raw)?;
        debug!(
            id = response.id,
            failed = response.error.is_some(),
            "Response decoded"
        );
        Ok(response)
    }

    /// Splits the reply into its domain result or failure. The returned
    /// [`CdpError`] preserves the peer's message verbatim so it can be
    /// matched against the catalog.
    pub fn into_result(self) -> std::result::Result<Value, CdpError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.result),
        }
    }
}

/// Inbound notification envelope.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(default)]
    pub session_id: Option<String>,
    pub method: String,
    #[serde(default)]
    pub params: Value,
}

impl Event {
    pub fn decode(raw: &[u8]) -> Result<Self> {
        let event: Event = serde_json::from_slice(raw)?;
        debug!(method = %event.method, "Event decoded");
        Ok(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::error::ERR_CTX_DESTROYED;

    #[test]
    fn test_response_with_error() {
        let raw =
            br#"{"id": 7, "error": {"code": -32000, "message": "Execution context was destroyed."}}"#;
        let response = Response::decode(raw).unwrap();
        let err = response.into_result().unwrap_err();
        assert_eq!(err, *ERR_CTX_DESTROYED);
    }

    #[test]
    fn test_response_with_result() {
        let raw = br#"{"id": 1, "result": {"value": 42}}"#;
        let response = Response::decode(raw).unwrap();
        assert_eq!(response.id, 1);
        let result = response.into_result().unwrap();
        assert_eq!(result, serde_json::json!({"value": 42}));
    }

    #[test]
    fn test_response_missing_result_defaults_to_null() {
        let response = Response::decode(br#"{"id": 2}"#).unwrap();
        assert_eq!(response.into_result().unwrap(), Value::Null);
    }

    #[test]
    fn test_event_decode() {
        let raw = br#"{"sessionId": "AB12", "method": "Target.detachedFromTarget", "params": {}}"#;
        let event = Event::decode(raw).unwrap();
        assert_eq!(event.session_id.as_deref(), Some("AB12"));
        assert_eq!(event.method, "Target.detachedFromTarget");
    }

    #[test]
    fn test_request_wire_shape() {
        let request = Request {
            id: 3,
            session_id: None,
            method: "Runtime.evaluate".into(),
            params: serde_json::json!({"expression": "1 + 1"}),
        };
        let text = serde_json::to_string(&request).unwrap();
        assert!(text.contains(r#""method":"Runtime.evaluate""#));
        assert!(!text.contains("sessionId"));
    }

    #[test]
    fn test_request_null_params_omitted() {
        let request = Request {
            id: 4,
            session_id: Some("AB12".into()),
            method: "Page.enable".into(),
            params: Value::Null,
        };
        let text = serde_json::to_string(&request).unwrap();
        assert!(text.contains(r#""sessionId":"AB12""#));
        assert!(!text.contains("params"));
    }
}
