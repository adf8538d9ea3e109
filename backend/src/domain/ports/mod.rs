//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod contingent_command;
mod contingent_query;
mod contingent_repository;
mod contingent_write_hook;

#[cfg(test)]
pub use contingent_command::MockContingentCommand;
pub use contingent_command::{
    ContingentCommand, CreateContingentRequest, UpdateContingentRequest,
};
#[cfg(test)]
pub use contingent_query::MockContingentQuery;
pub use contingent_query::{ContingentQuery, PageContingentsRequest};
#[cfg(test)]
pub use contingent_repository::MockContingentRepository;
pub use contingent_repository::{
    ContingentRepository, ContingentRepositoryError, FixtureContingentRepository,
};
#[cfg(test)]
pub use contingent_write_hook::MockContingentWriteHook;
pub use contingent_write_hook::{ContingentWriteHook, NoOpContingentWriteHook};
