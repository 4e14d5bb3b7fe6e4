//! Error object decoding and classification.
//!
//! A failed protocol response carries a JSON-RPC-style error object. Backends
//! disagree on the wire type of `code` (some send a JSON number, others a
//! digit string for the same semantic code), so decoding normalizes it to an
//! integer instead of failing on the mismatch.

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::sync::LazyLock;
use thiserror::Error;
use tracing::debug;

/// Structural decode failure: the payload is not well-formed JSON of the
/// expected envelope shape. Never raised for an odd `code` representation.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("malformed protocol payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DecodeError>;

/// Error object reported by the protocol peer.
///
/// Equality is structural over all three fields. Several well-known
/// conditions share code -32000 and are told apart by message text alone, so
/// callers match decoded errors against the catalog statics with `==`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Error)]
#[error("protocol error {code}: {message} (data: {data})")]
pub struct CdpError {
    /// JSON-RPC style code, normalized from either wire representation.
    #[serde(default, deserialize_with = "code_from_wire")]
    pub code: i64,
    #[serde(default)]
    pub message: String,
    /// Supplementary context, empty when the peer sent none.
    #[serde(default)]
    pub data: String,
}

impl CdpError {
    /// Decodes an error object from raw payload bytes.
    ///
    /// Structural JSON errors are surfaced as [`DecodeError`]; an
    /// unrecognized `code` shape silently falls back to 0.
    pub fn decode(raw: &[u8]) -> Result<Self> {
        let err: CdpError = serde_json::from_slice(raw)?;
        debug!(code = err.code, message = %err.message, "Protocol error decoded");
        Ok(err)
    }
}

/// Reads the raw `code` field and tries typed interpretations in priority
/// order: JSON integer first, then a base-10 (optionally signed) string.
/// Anything else defaults to 0 so that representational drift between
/// backends never fails the whole decode.
fn code_from_wire<'de, D>(deserializer: D) -> std::result::Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    let code = match &raw {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.parse::<i64>().ok(),
        _ => None,
    };
    Ok(code.unwrap_or_else(|| {
        debug!(raw = %raw, "Unrecognized error code shape, defaulting to 0");
        0
    }))
}

/// Execution context id no longer resolves, typically after a navigation.
pub static ERR_CTX_NOT_FOUND: LazyLock<CdpError> = LazyLock::new(|| CdpError {
    code: -32000,
    message: "Cannot find context with specified id".into(),
    data: String::new(),
});

/// Session id no longer resolves, typically after a target detach.
pub static ERR_SESSION_NOT_FOUND: LazyLock<CdpError> = LazyLock::new(|| CdpError {
    code: -32001,
    message: "Session with given id not found.".into(),
    data: String::new(),
});

/// DOM search session expired or was discarded.
pub static ERR_SEARCH_SESSION_NOT_FOUND: LazyLock<CdpError> = LazyLock::new(|| CdpError {
    code: -32000,
    message: "No search session with given id found".into(),
    data: String::new(),
});

/// Execution context was torn down while a command was in flight.
pub static ERR_CTX_DESTROYED: LazyLock<CdpError> = LazyLock::new(|| CdpError {
    code: -32000,
    message: "Execution context was destroyed.".into(),
    data: String::new(),
});

/// Remote object id no longer resolves.
pub static ERR_OBJ_NOT_FOUND: LazyLock<CdpError> = LazyLock::new(|| CdpError {
    code: -32000,
    message: "Could not find object with given id".into(),
    data: String::new(),
});

/// Hit test found no DOM node at the requested coordinates.
pub static ERR_NODE_NOT_FOUND_AT_POS: LazyLock<CdpError> = LazyLock::new(|| CdpError {
    code: -32000,
    message: "No node found at given location".into(),
    data: String::new(),
});

/// The debugging session lost its page attachment.
pub static ERR_NOT_ATTACHED_TO_ACTIVE_PAGE: LazyLock<CdpError> = LazyLock::new(|| CdpError {
    code: -32000,
    message: "Not attached to an active page".into(),
    data: String::new(),
});

/// Well-known failure categories paired with stable names, in catalog order.
///
/// Most entries share the generic server-error code -32000; the peer does not
/// allocate distinct codes per condition, so the message text stays
/// authoritative for matching.
pub static CATALOG: LazyLock<[(&'static str, &'static CdpError); 7]> = LazyLock::new(|| {
    [
        ("context not found", &*ERR_CTX_NOT_FOUND),
        ("session not found", &*ERR_SESSION_NOT_FOUND),
        ("search session not found", &*ERR_SEARCH_SESSION_NOT_FOUND),
        ("execution context destroyed", &*ERR_CTX_DESTROYED),
        ("object not found", &*ERR_OBJ_NOT_FOUND),
        ("node not found at position", &*ERR_NODE_NOT_FOUND_AT_POS),
        ("not attached to active page", &*ERR_NOT_ATTACHED_TO_ACTIVE_PAGE),
    ]
});

/// Looks a decoded error up in the catalog by structural equality and returns
/// its stable name, or `None` for an unrecognized failure.
pub fn classify(err: &CdpError) -> Option<&'static str> {
    CATALOG
        .iter()
        .find(|(_, known)| **known == *err)
        .map(|(name, _)| *name)
}
