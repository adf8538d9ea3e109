//! Inbound adapters translating external requests into domain port calls.
//!
//! Framework details stay at this edge; see [`http`].

pub mod http;
