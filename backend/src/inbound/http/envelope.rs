//! Uniform JSON envelope wrapping every contingent response.
//!
//! ```json
//! { "success": true, "message": "query succeeded", "count": 2, "data": [...] }
//! ```
//!
//! Failures add `code` and, when a request trace is in scope, `traceId`.

use serde::Serialize;

use crate::domain::{Error, ErrorCode};

/// Message for successful reads.
pub const QUERY_SUCCEEDED: &str = "query succeeded";
/// Message for successful creates.
pub const INSERT_SUCCEEDED: &str = "insert succeeded";
/// Message for successful updates.
pub const UPDATE_SUCCEEDED: &str = "update succeeded";
/// Message for successful deletes.
pub const DELETE_SUCCEEDED: &str = "delete succeeded";
/// Message when the addressed record does not exist.
pub const RECORD_NOT_FOUND: &str = "record not found";

/// Response envelope.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiEnvelope<T> {
    success: bool,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    count: Option<u64>,
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<ErrorCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    trace_id: Option<String>,
}

impl<T> ApiEnvelope<T> {
    /// Successful outcome carrying `data`.
    pub fn success(message: &str, data: T) -> Self {
        Self {
            success: true,
            message: message.to_owned(),
            count: None,
            data: Some(data),
            code: None,
            trace_id: None,
        }
    }

    /// Successful listing with the total number of matches.
    pub fn counted(data: T, count: u64) -> Self {
        Self {
            count: Some(count),
            ..Self::success(QUERY_SUCCEEDED, data)
        }
    }

    /// Absent record; still a success at the transport level.
    pub fn not_found(data: Option<T>) -> Self {
        Self {
            success: true,
            message: RECORD_NOT_FOUND.to_owned(),
            count: None,
            data,
            code: None,
            trace_id: None,
        }
    }

    /// Rejected payload echoed back to the caller.
    pub fn rejected(message: String, echoed: T) -> Self {
        Self {
            success: false,
            message,
            count: None,
            data: Some(echoed),
            code: Some(ErrorCode::InvalidRequest),
            trace_id: None,
        }
    }

    /// Whether the envelope reports success.
    pub const fn is_success(&self) -> bool {
        self.success
    }

    /// Human-readable outcome.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Attach the trace identifier of the current request.
    #[must_use]
    pub fn with_trace_id(mut self, trace_id: Option<String>) -> Self {
        self.trace_id = trace_id;
        self
    }
}

impl ApiEnvelope<serde_json::Value> {
    /// Failure envelope for an operational error.
    pub fn failure(error: &Error) -> Self {
        Self {
            success: false,
            message: error.message().to_owned(),
            count: None,
            data: error.details().cloned(),
            code: Some(error.code()),
            trace_id: error.trace_id().map(str::to_owned),
        }
    }
}
