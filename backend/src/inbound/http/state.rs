//! Shared application state injected into HTTP handlers.

use std::sync::Arc;

use crate::domain::ports::{
    InspirationsCommand, InspirationsQuery, JournalsCommand, JournalsQuery, TokenVerifier,
};

/// Handler-facing bundle of the driving ports.
///
/// Handlers depend on the port traits only, so tests can swap in
/// in-memory implementations without touching the routing table.
#[derive(Clone)]
pub struct HttpState {
    pub journals_command: Arc<dyn JournalsCommand>,
    pub journals_query: Arc<dyn JournalsQuery>,
    pub inspirations_command: Arc<dyn InspirationsCommand>,
    pub inspirations_query: Arc<dyn InspirationsQuery>,
    pub token_verifier: Arc<dyn TokenVerifier>,
}

impl HttpState {
    pub fn new(
        journals_command: Arc<dyn JournalsCommand>,
        journals_query: Arc<dyn JournalsQuery>,
        inspirations_command: Arc<dyn InspirationsCommand>,
        inspirations_query: Arc<dyn InspirationsQuery>,
        token_verifier: Arc<dyn TokenVerifier>,
    ) -> Self {
        Self {
            journals_command,
            journals_query,
            inspirations_command,
            inspirations_query,
            token_verifier,
        }
    }
}
