//! Domain primitives, aggregates and services.
//!
//! Public surface:
//! - [`Error`] and [`ErrorCode`]: transport-agnostic failure payload.
//! - [`Contingent`] and its validation types: the roster aggregate.
//! - [`ContingentService`]: implementation of the contingent driving ports.
//! - [`ports`]: driving and driven port traits.

pub mod contingent;
mod contingent_service;
pub mod error;
pub mod ports;
mod trace_id;
pub mod user;

pub use self::contingent::{
    Attributes, CommandOutcome, Contingent, ContingentDraft, ContingentId, ContingentName,
    ContingentPage, ContingentParts, ContingentPayload, ContingentWrite, DeleteOutcome, FieldViolation,
    MUST_NOT_BE_NULL, NAME_MAX, NameFilter, NewContingent,
};
pub use self::contingent_service::ContingentService;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{UserId, UserIdValidationError};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use backend::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::unauthorized("login required"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
