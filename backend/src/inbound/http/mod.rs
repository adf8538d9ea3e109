//! HTTP inbound adapter exposing the contingent REST endpoints.

pub mod contingents;
pub mod envelope;
pub mod error;
pub mod health;
pub mod schemas;
pub mod session;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub(crate) mod validation;

pub use error::ApiResult;
