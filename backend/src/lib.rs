//! Journaling backend.
//!
//! A hexagonal HTTP service for personal journals: one journal per user,
//! at most one entry per UTC calendar day (same-day writes merge into the
//! existing entry), plus shared inspiration prompts.
//!
//! - [`domain`] holds entities, ports, and the services behind them.
//! - [`inbound`] adapts HTTP requests onto the driving ports.
//! - [`outbound`] implements the driven ports against PostgreSQL.
//! - [`server`] is the composition root; [`doc`] the OpenAPI document.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;

#[cfg(test)]
pub mod test_support;

pub use middleware::Trace;
