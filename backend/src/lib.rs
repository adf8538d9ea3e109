//! Roster backend library: the contingent resource behind a hexagonal
//! boundary.
//!
//! - [`domain`]: aggregate, validation, ports and the service.
//! - [`inbound`]: HTTP adapter.
//! - [`outbound`]: Diesel, in-memory and roster refresh adapters.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
