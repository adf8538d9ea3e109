//! Contingent (team roster) aggregate.
//!
//! A contingent has a store-assigned integer id, a searchable name, a bag of
//! opaque attributes that pass through untouched, and a write-once audit
//! stamp (`created_at`, `created_by`) applied when the record is created.

mod filter;
mod outcome;
mod validation;

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::UserId;

pub use filter::NameFilter;
pub use outcome::{CommandOutcome, ContingentWrite, DeleteOutcome};
pub use validation::{
    ContingentDraft, ContingentName, ContingentPayload, FieldViolation, MUST_NOT_BE_NULL,
    NAME_MAX, RESERVED_ATTRIBUTE_KEYS,
};

/// Opaque attributes carried alongside the modelled fields.
pub type Attributes = Map<String, Value>;

/// Store-assigned contingent identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContingentId(i64);

impl ContingentId {
    /// Wrap a raw identifier.
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Raw identifier value.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ContingentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ContingentId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

/// Persisted contingent record.
#[derive(Debug, Clone, PartialEq)]
pub struct Contingent {
    id: ContingentId,
    name: ContingentName,
    attributes: Attributes,
    created_at: DateTime<Utc>,
    created_by: UserId,
}

/// Field bundle used to rebuild a [`Contingent`] from storage.
#[derive(Debug, Clone)]
pub struct ContingentParts {
    /// Store-assigned identifier.
    pub id: ContingentId,
    /// Validated name.
    pub name: ContingentName,
    /// Opaque attributes.
    pub attributes: Attributes,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Creating principal.
    pub created_by: UserId,
}

impl Contingent {
    /// Assemble a record from already validated parts.
    pub fn from_parts(parts: ContingentParts) -> Self {
        let ContingentParts {
            id,
            name,
            attributes,
            created_at,
            created_by,
        } = parts;
        Self {
            id,
            name,
            attributes,
            created_at,
            created_by,
        }
    }

    /// Store-assigned identifier.
    pub const fn id(&self) -> ContingentId {
        self.id
    }

    /// Current name.
    pub const fn name(&self) -> &ContingentName {
        &self.name
    }

    /// Opaque attributes stored alongside the name.
    pub const fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// When the record was created. Never changes after insert.
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Principal that created the record. Never changes after insert.
    pub const fn created_by(&self) -> UserId {
        self.created_by
    }

    /// Replace the mutable fields, keeping id and audit stamp intact.
    pub fn apply(&mut self, changes: ContingentDraft) {
        let ContingentDraft { name, attributes } = changes;
        self.name = name;
        self.attributes = attributes;
    }
}

/// Insert command for the repository: a validated draft plus the audit stamp.
#[derive(Debug, Clone, PartialEq)]
pub struct NewContingent {
    /// Validated name and attributes.
    pub draft: ContingentDraft,
    /// Creation timestamp taken from the service clock.
    pub created_at: DateTime<Utc>,
    /// Principal resolved from the caller's session.
    pub created_by: UserId,
}

/// One page of contingents together with the total matching count.
#[derive(Debug, Clone, PartialEq)]
pub struct ContingentPage {
    /// Records in the requested window, newest id first.
    pub items: Vec<Contingent>,
    /// Number of records matching the filter across all pages.
    pub total: u64,
}

#[cfg(test)]
mod tests;
