//! Results of contingent commands.

use super::{ContingentId, FieldViolation};

/// Business outcome of a command that did not fail operationally.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutcome<T> {
    /// The command took effect.
    Completed(T),
    /// No record exists under the requested id.
    NotFound,
    /// The payload broke a validation rule; nothing was written.
    Rejected(FieldViolation),
}

impl<T> CommandOutcome<T> {
    /// Whether the command took effect.
    pub const fn is_completed(&self) -> bool {
        matches!(self, Self::Completed(_))
    }

    /// Map the completed value.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> CommandOutcome<U> {
        match self {
            Self::Completed(value) => CommandOutcome::Completed(f(value)),
            Self::NotFound => CommandOutcome::NotFound,
            Self::Rejected(violation) => CommandOutcome::Rejected(violation),
        }
    }
}

/// Outcome of a delete; there is no payload to reject.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The record existed and is gone.
    Deleted(ContingentId),
    /// No record exists under the requested id.
    NotFound,
}

/// Mutation reported to the write hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContingentWrite {
    /// A record was inserted.
    Created(ContingentId),
    /// A record was replaced.
    Updated(ContingentId),
    /// A record was removed.
    Deleted(ContingentId),
}

impl ContingentWrite {
    /// Affected record.
    pub const fn id(&self) -> ContingentId {
        match self {
            Self::Created(id) | Self::Updated(id) | Self::Deleted(id) => *id,
        }
    }

    /// Short label used in logs.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Created(_) => "created",
            Self::Updated(_) => "updated",
            Self::Deleted(_) => "deleted",
        }
    }
}
