//! Outbound adapters implementing the domain's driven ports against
//! concrete infrastructure.

pub mod persistence;
