//! OpenAPI schema definitions for response envelopes and domain types.
//!
//! Domain types and the serialised DTOs stay free of `ToSchema`; these
//! wrappers mirror their JSON shape for documentation only.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// No session principal.
    #[schema(rename = "unauthorized")]
    Unauthorized,
    /// The requested resource does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// The store or pool is unavailable.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// Contingent record. Attributes appear as extra top-level fields.
#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ContingentSchema {
    /// Store-assigned id.
    #[schema(example = 5)]
    id: i64,
    /// Contingent name, at most 64 characters.
    #[schema(example = "Alpha")]
    name: String,
    /// Creation timestamp.
    #[schema(format = "date-time", example = "2026-03-14T09:26:53Z")]
    create_time: String,
    /// Creating principal.
    #[schema(format = "uuid", example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    create_user_id: String,
}

/// Create or update payload. Extra fields are stored as attributes.
#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ContingentRequestSchema {
    /// Ignored.
    id: Option<serde_json::Value>,
    /// Required; non-blank, at most 64 characters.
    #[schema(example = "Alpha")]
    name: String,
    /// Ignored.
    create_time: Option<serde_json::Value>,
    /// Ignored.
    create_user_id: Option<serde_json::Value>,
}

/// Envelope carrying one record, or null when absent.
#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ContingentEnvelopeSchema {
    /// Always true for this envelope.
    success: bool,
    /// Outcome description, e.g. `record not found`.
    #[schema(example = "query succeeded")]
    message: String,
    /// Record, echoed payload, or null.
    data: Option<ContingentSchema>,
}

/// Envelope carrying a listing and the total match count.
#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ContingentListEnvelopeSchema {
    /// Always true for this envelope.
    success: bool,
    /// Outcome description.
    #[schema(example = "query succeeded")]
    message: String,
    /// Total records matching the filter.
    #[schema(example = 42)]
    count: u64,
    /// Records, newest first.
    data: Vec<ContingentSchema>,
}

/// Envelope carrying a deleted or missing id.
#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct DeletedEnvelopeSchema {
    /// Always true for this envelope.
    success: bool,
    /// `delete succeeded` or `record not found`.
    #[schema(example = "delete succeeded")]
    message: String,
    /// Addressed id.
    #[schema(example = 42)]
    data: i64,
}

/// Envelope for rejected payloads and operational failures.
#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct FailureEnvelopeSchema {
    /// Always false for this envelope.
    success: bool,
    /// Failure message text.
    #[schema(example = "name must not be null")]
    message: String,
    /// Echoed payload for rejections, error details otherwise.
    data: Option<serde_json::Value>,
    /// Stable machine-readable error code.
    code: ErrorCodeSchema,
    /// Correlation identifier of the request.
    #[schema(format = "uuid")]
    trace_id: Option<String>,
}
