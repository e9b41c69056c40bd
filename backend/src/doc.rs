//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] generates the OpenAPI specification consumed by Swagger UI
//! (debug builds only). It registers the journal, inspiration, and health
//! paths, the request/response schemas, and the bearer security scheme.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::domain::{Error, ErrorCode};
use crate::inbound::http::error::ApiError;
use crate::inbound::http::inspirations::{CreateInspirationRequest, InspirationBody};
use crate::inbound::http::journals::{
    CreateJournalRequest, EntryBody, JournalBody, UpdateEntryRequest, WriteEntryRequest,
};

/// Enrich the generated document with the bearer token security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "BearerToken",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .description(Some(
                        "Opaque bearer token resolved to the caller's subject id.",
                    ))
                    .build(),
            ),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Journaling backend API",
        description = "HTTP interface for day-keyed journal entries and shared inspirations."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("BearerToken" = [])),
    paths(
        crate::inbound::http::journals::create_journal,
        crate::inbound::http::journals::write_entry,
        crate::inbound::http::journals::update_entry,
        crate::inbound::http::journals::list_entries,
        crate::inbound::http::inspirations::create_inspiration,
        crate::inbound::http::inspirations::list_inspirations,
        crate::inbound::http::inspirations::delete_inspiration,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        CreateJournalRequest,
        WriteEntryRequest,
        UpdateEntryRequest,
        CreateInspirationRequest,
        JournalBody,
        EntryBody,
        InspirationBody,
        ApiError,
        Error,
        ErrorCode,
    )),
    tags(
        (name = "journals", description = "Journals and their dated entries"),
        (name = "inspirations", description = "Shared writing prompts"),
        (name = "health", description = "Liveness and readiness probes")
    )
)]
pub struct ApiDoc;
