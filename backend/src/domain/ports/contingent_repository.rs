//! Driven port for contingent persistence.

use async_trait::async_trait;
use pagination::Pager;

use crate::domain::{Contingent, ContingentDraft, ContingentId, NameFilter, NewContingent};

use super::define_port_error;

define_port_error! {
    /// Errors raised by contingent repository adapters.
    pub enum ContingentRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "contingent repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "contingent repository query failed: {message}",
    }
}

/// Port for reading and writing contingents.
///
/// Listings are ordered by id, newest first. `update` and `delete` are
/// conditional on the row existing and must not be split into a lookup
/// followed by a write.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContingentRepository: Send + Sync {
    /// Read one window of records matching `filter`.
    async fn page(
        &self,
        filter: &NameFilter,
        pager: Pager,
    ) -> Result<Vec<Contingent>, ContingentRepositoryError>;

    /// Count every record matching `filter`.
    async fn count(&self, filter: &NameFilter) -> Result<u64, ContingentRepositoryError>;

    /// Read every record matching `filter`.
    async fn list(&self, filter: &NameFilter) -> Result<Vec<Contingent>, ContingentRepositoryError>;

    /// Look up one record.
    async fn find_by_id(
        &self,
        id: ContingentId,
    ) -> Result<Option<Contingent>, ContingentRepositoryError>;

    /// Insert a record and return it with its assigned id.
    async fn insert(&self, record: &NewContingent) -> Result<Contingent, ContingentRepositoryError>;

    /// Replace name and attributes of an existing record.
    ///
    /// Returns `None` when no record has `id`.
    async fn update(
        &self,
        id: ContingentId,
        changes: &ContingentDraft,
    ) -> Result<Option<Contingent>, ContingentRepositoryError>;

    /// Remove a record, reporting whether one existed.
    async fn delete(&self, id: ContingentId) -> Result<bool, ContingentRepositoryError>;
}

/// Fixture implementation for tests that never reach the store.
///
/// Reads are empty and conditional writes report a missing row. `insert`
/// fails, since there is no id to hand out.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureContingentRepository;

#[async_trait]
impl ContingentRepository for FixtureContingentRepository {
    async fn page(
        &self,
        _filter: &NameFilter,
        _pager: Pager,
    ) -> Result<Vec<Contingent>, ContingentRepositoryError> {
        Ok(Vec::new())
    }

    async fn count(&self, _filter: &NameFilter) -> Result<u64, ContingentRepositoryError> {
        Ok(0)
    }

    async fn list(&self, _filter: &NameFilter) -> Result<Vec<Contingent>, ContingentRepositoryError> {
        Ok(Vec::new())
    }

    async fn find_by_id(
        &self,
        _id: ContingentId,
    ) -> Result<Option<Contingent>, ContingentRepositoryError> {
        Ok(None)
    }

    async fn insert(&self, _record: &NewContingent) -> Result<Contingent, ContingentRepositoryError> {
        Err(ContingentRepositoryError::query(
            "fixture repository does not persist records",
        ))
    }

    async fn update(
        &self,
        _id: ContingentId,
        _changes: &ContingentDraft,
    ) -> Result<Option<Contingent>, ContingentRepositoryError> {
        Ok(None)
    }

    async fn delete(&self, _id: ContingentId) -> Result<bool, ContingentRepositoryError> {
        Ok(false)
    }
}
