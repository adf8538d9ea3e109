//! Driving port for contingent mutations.
//!
//! Business outcomes (rejected payload, missing record) travel in
//! [`CommandOutcome`]; only operational failures use `Err`.

use async_trait::async_trait;

use crate::domain::{
    CommandOutcome, Contingent, ContingentId, ContingentPayload, DeleteOutcome, Error, UserId,
};

/// Request to create a contingent on behalf of `created_by`.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateContingentRequest {
    /// Submitted fields. Any client id is dropped before this point.
    pub payload: ContingentPayload,
    /// Principal resolved from the caller's session.
    pub created_by: UserId,
}

/// Request to replace the mutable fields of contingent `id`.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateContingentRequest {
    /// Path identifier; wins over anything in the body.
    pub id: ContingentId,
    /// Submitted fields.
    pub payload: ContingentPayload,
}

/// Driving port for contingent write operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContingentCommand: Send + Sync {
    /// Validate and insert a contingent stamped with the current time.
    async fn create(
        &self,
        request: CreateContingentRequest,
    ) -> Result<CommandOutcome<Contingent>, Error>;

    /// Validate and replace an existing contingent.
    async fn update(
        &self,
        request: UpdateContingentRequest,
    ) -> Result<CommandOutcome<Contingent>, Error>;

    /// Remove a contingent, returning its id when it existed.
    async fn delete(&self, id: ContingentId) -> Result<DeleteOutcome, Error>;
}
