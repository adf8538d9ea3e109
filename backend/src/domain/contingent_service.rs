//! Contingent domain service.
//!
//! Implements both driving ports over a [`ContingentRepository`], stamping
//! audit fields from the injected clock and notifying the write hook after
//! each successful mutation.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;

use crate::domain::ports::{
    ContingentCommand, ContingentQuery, ContingentRepository, ContingentRepositoryError,
    ContingentWriteHook, CreateContingentRequest, PageContingentsRequest, UpdateContingentRequest,
};
use crate::domain::{
    CommandOutcome, Contingent, ContingentDraft, ContingentId, ContingentPage, ContingentWrite,
    DeleteOutcome, Error, NameFilter, NewContingent,
};

fn map_repository_error(error: ContingentRepositoryError) -> Error {
    match error {
        ContingentRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("contingent repository unavailable: {message}"))
        }
        ContingentRepositoryError::Query { message } => {
            Error::internal(format!("contingent repository error: {message}"))
        }
    }
}

/// Service backing the contingent command and query ports.
pub struct ContingentService<R> {
    repository: Arc<R>,
    write_hook: Arc<dyn ContingentWriteHook>,
    clock: Arc<dyn Clock>,
}

impl<R> Clone for ContingentService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            write_hook: Arc::clone(&self.write_hook),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R> ContingentService<R> {
    /// Create a service over `repository`.
    pub fn new(
        repository: Arc<R>,
        write_hook: Arc<dyn ContingentWriteHook>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repository,
            write_hook,
            clock,
        }
    }
}

#[async_trait]
impl<R> ContingentCommand for ContingentService<R>
where
    R: ContingentRepository,
{
    async fn create(
        &self,
        request: CreateContingentRequest,
    ) -> Result<CommandOutcome<Contingent>, Error> {
        let CreateContingentRequest {
            payload,
            created_by,
        } = request;
        let draft = match ContingentDraft::try_from(payload) {
            Ok(draft) => draft,
            Err(violation) => return Ok(CommandOutcome::Rejected(violation)),
        };
        let record = NewContingent {
            draft,
            created_at: self.clock.utc(),
            created_by,
        };
        let created = self
            .repository
            .insert(&record)
            .await
            .map_err(map_repository_error)?;
        self.write_hook
            .contingents_changed(&ContingentWrite::Created(created.id()))
            .await;
        Ok(CommandOutcome::Completed(created))
    }

    async fn update(
        &self,
        request: UpdateContingentRequest,
    ) -> Result<CommandOutcome<Contingent>, Error> {
        let UpdateContingentRequest { id, payload } = request;
        let changes = match ContingentDraft::try_from(payload) {
            Ok(draft) => draft,
            Err(violation) => return Ok(CommandOutcome::Rejected(violation)),
        };
        let Some(updated) = self
            .repository
            .update(id, &changes)
            .await
            .map_err(map_repository_error)?
        else {
            return Ok(CommandOutcome::NotFound);
        };
        self.write_hook
            .contingents_changed(&ContingentWrite::Updated(id))
            .await;
        Ok(CommandOutcome::Completed(updated))
    }

    async fn delete(&self, id: ContingentId) -> Result<DeleteOutcome, Error> {
        let existed = self
            .repository
            .delete(id)
            .await
            .map_err(map_repository_error)?;
        if !existed {
            return Ok(DeleteOutcome::NotFound);
        }
        self.write_hook
            .contingents_changed(&ContingentWrite::Deleted(id))
            .await;
        Ok(DeleteOutcome::Deleted(id))
    }
}

#[async_trait]
impl<R> ContingentQuery for ContingentService<R>
where
    R: ContingentRepository,
{
    async fn page(&self, request: PageContingentsRequest) -> Result<ContingentPage, Error> {
        let PageContingentsRequest { filter, pager } = request;
        let items = self
            .repository
            .page(&filter, pager)
            .await
            .map_err(map_repository_error)?;
        let total = self
            .repository
            .count(&filter)
            .await
            .map_err(map_repository_error)?;
        Ok(ContingentPage { items, total })
    }

    async fn list(&self, filter: NameFilter) -> Result<Vec<Contingent>, Error> {
        self.repository
            .list(&filter)
            .await
            .map_err(map_repository_error)
    }

    async fn get(&self, id: ContingentId) -> Result<Option<Contingent>, Error> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(map_repository_error)
    }
}

#[cfg(test)]
#[path = "contingent_service_tests.rs"]
mod tests;
