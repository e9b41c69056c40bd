//! Composition root: builds the port implementations and registers the
//! HTTP routes.

pub mod config;

use std::sync::Arc;

use actix_web::web;
use mockable::Clock;

use crate::domain::ports::TokenVerifier;
use crate::domain::{InspirationsService, JournalsService};
use crate::inbound::http::{inspirations, journals, state::HttpState};
use crate::outbound::persistence::{
    DbPool, DieselEntryRepository, DieselInspirationRepository, DieselJournalRepository,
    DieselUserRepository,
};

pub use config::{ConfigError, Settings};

/// Wire the Diesel-backed services behind the HTTP state.
pub fn build_http_state(
    pool: DbPool,
    clock: Arc<dyn Clock>,
    token_verifier: Arc<dyn TokenVerifier>,
) -> HttpState {
    let journals = Arc::new(JournalsService::new(
        Arc::new(DieselUserRepository::new(pool.clone())),
        Arc::new(DieselJournalRepository::new(pool.clone())),
        Arc::new(DieselEntryRepository::new(pool.clone())),
        clock,
    ));
    let inspirations = Arc::new(InspirationsService::new(Arc::new(
        DieselInspirationRepository::new(pool),
    )));

    HttpState::new(
        journals.clone(),
        journals,
        inspirations.clone(),
        inspirations,
        token_verifier,
    )
}

/// Register every authenticated API route.
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    journals::configure(cfg);
    inspirations::configure(cfg);
}
