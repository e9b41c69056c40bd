//! Journal API handlers: journal creation, the day-keyed entry write,
//! explicit entry edits, and filtered, ordered entry listings.
//!
//! The `orderBy` query parameter is validated at this boundary against a
//! strict anchored pattern before the lenient parser runs, so nothing a
//! caller types can reach the store as raw order-by text. Array-shaped
//! parameters (`orderBy[]` or a repeated `orderBy`) are rejected outright
//! rather than coerced.

use actix_web::{HttpRequest, HttpResponse, get, patch, post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    ENTRY_ORDER_BY_PATTERN, EntryFilter, EntryPatch, Error, Journal, JournalEntry, OrderClause,
    entry_order_by_regex, to_order_by,
};
use crate::inbound::http::auth::AuthContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{optional_string, require_string};
use crate::inbound::http::{ApiError, ApiResult};

/// Register the journal routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(create_journal)
        .service(write_entry)
        .service(update_entry)
        .service(list_entries);
}

/// Body for `POST /journals`. Fields are optional so absence produces a
/// validation message instead of a deserialization failure.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateJournalRequest {
    #[schema(example = "Morning pages")]
    pub title: Option<String>,
}

/// Body for `POST /journals/entries`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct WriteEntryRequest {
    #[schema(example = "Saturday")]
    pub title: Option<String>,
    #[schema(example = "Slept in, then walked the coast path.")]
    pub text: Option<String>,
}

/// Body for `PATCH /journals/entries/{entryId}`. Absent fields are left
/// untouched; present fields must be non-empty.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateEntryRequest {
    pub title: Option<String>,
    pub text: Option<String>,
}

/// A journal as returned to clients.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JournalBody {
    id: String,
    user_id: String,
    title: String,
    created_at: String,
    updated_at: String,
}

impl From<Journal> for JournalBody {
    fn from(journal: Journal) -> Self {
        Self {
            id: journal.id.to_string(),
            user_id: journal.user_id.to_string(),
            title: journal.title,
            created_at: journal.created_at.to_rfc3339(),
            updated_at: journal.updated_at.to_rfc3339(),
        }
    }
}

/// A journal entry as returned to clients.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EntryBody {
    id: String,
    journal_id: String,
    title: String,
    text: String,
    created_at: String,
    updated_at: String,
}

impl From<JournalEntry> for EntryBody {
    fn from(entry: JournalEntry) -> Self {
        Self {
            id: entry.id.to_string(),
            journal_id: entry.journal_id.to_string(),
            title: entry.title,
            text: entry.text,
            created_at: entry.created_at.to_rfc3339(),
            updated_at: entry.updated_at.to_rfc3339(),
        }
    }
}

/// Create the caller's journal.
#[utoipa::path(
    post,
    path = "/journals",
    request_body = CreateJournalRequest,
    responses(
        (status = 201, description = "Journal created", body = JournalBody),
        (status = 200, description = "Journal already existed", body = JournalBody),
        (status = 400, description = "Validation failure", body = ApiError),
        (status = 401, description = "Missing or invalid bearer token", body = ApiError)
    ),
    tags = ["journals"],
    operation_id = "createJournal"
)]
#[post("/journals")]
pub async fn create_journal(
    state: web::Data<HttpState>,
    auth: AuthContext,
    body: web::Json<CreateJournalRequest>,
) -> ApiResult<HttpResponse> {
    let title = require_string("title", body.into_inner().title)?;
    let created = state
        .journals_command
        .create_journal(auth.into_user_id(), title)
        .await?;

    let body = JournalBody::from(created.journal);
    if created.created {
        Ok(HttpResponse::Created().json(body))
    } else {
        Ok(HttpResponse::Ok().json(body))
    }
}

/// Write today's entry: creates it, or merges into the existing row when
/// one already exists for the current UTC calendar date.
#[utoipa::path(
    post,
    path = "/journals/entries",
    request_body = WriteEntryRequest,
    responses(
        (status = 201, description = "Entry written", body = EntryBody),
        (status = 400, description = "Validation failure", body = ApiError),
        (status = 401, description = "Missing or invalid bearer token", body = ApiError),
        (status = 404, description = "User or journal not found", body = ApiError)
    ),
    tags = ["journals"],
    operation_id = "writeEntry"
)]
#[post("/journals/entries")]
pub async fn write_entry(
    state: web::Data<HttpState>,
    auth: AuthContext,
    body: web::Json<WriteEntryRequest>,
) -> ApiResult<HttpResponse> {
    let body = body.into_inner();
    let title = require_string("title", body.title)?;
    let text = require_string("text", body.text)?;

    let entry = state
        .journals_command
        .create_or_update_entry(auth.into_user_id(), title, text)
        .await?;
    Ok(HttpResponse::Created().json(EntryBody::from(entry)))
}

/// Edit a specific entry of the caller's journal.
#[utoipa::path(
    patch,
    path = "/journals/entries/{entryId}",
    request_body = UpdateEntryRequest,
    params(("entryId" = String, Path, description = "Entry identifier")),
    responses(
        (status = 200, description = "Entry updated", body = EntryBody),
        (status = 400, description = "Validation failure", body = ApiError),
        (status = 401, description = "Missing or invalid bearer token", body = ApiError),
        (status = 404, description = "User, journal, or entry not found", body = ApiError)
    ),
    tags = ["journals"],
    operation_id = "updateEntry"
)]
#[patch("/journals/entries/{entry_id}")]
pub async fn update_entry(
    state: web::Data<HttpState>,
    auth: AuthContext,
    path: web::Path<String>,
    body: web::Json<UpdateEntryRequest>,
) -> ApiResult<web::Json<EntryBody>> {
    let raw_id = path.into_inner();
    // An id that is not a UUID cannot name an existing entry.
    let entry_id = Uuid::parse_str(&raw_id)
        .map_err(|_| Error::not_found(format!("Journal entry {raw_id} not found")))?;

    let body = body.into_inner();
    let patch = EntryPatch {
        title: optional_string("title", body.title)?,
        text: optional_string("text", body.text)?,
    };

    let entry = state
        .journals_command
        .update_entry(auth.into_user_id(), entry_id, patch)
        .await?;
    Ok(web::Json(EntryBody::from(entry)))
}

/// List the caller's entries with optional filters and ordering.
#[utoipa::path(
    get,
    path = "/journals/entries",
    params(
        ("title" = Option<String>, Query, description = "Exact-match title filter"),
        ("text" = Option<String>, Query, description = "Exact-match text filter"),
        (
            "orderBy" = Option<String>,
            Query,
            description = "Slash-separated ordering, e.g. `created_at desc/title`"
        )
    ),
    responses(
        (status = 200, description = "Entries", body = [EntryBody]),
        (status = 400, description = "Malformed orderBy", body = ApiError),
        (status = 401, description = "Missing or invalid bearer token", body = ApiError),
        (status = 404, description = "User or journal not found", body = ApiError)
    ),
    tags = ["journals"],
    operation_id = "listEntries"
)]
#[get("/journals/entries")]
pub async fn list_entries(
    req: HttpRequest,
    state: web::Data<HttpState>,
    auth: AuthContext,
) -> ApiResult<web::Json<Vec<EntryBody>>> {
    let params = parse_list_params(req.query_string())?;
    let entries = state
        .journals_query
        .list_entries(auth.into_user_id(), params.filter, params.order_by)
        .await?;
    Ok(web::Json(entries.into_iter().map(EntryBody::from).collect()))
}

#[derive(Debug)]
struct ListParams {
    filter: EntryFilter,
    order_by: Vec<OrderClause>,
}

/// Parse the listing query string by hand. `serde_urlencoded` would fold
/// `orderBy[]` and repeated keys into shapes we must reject explicitly.
fn parse_list_params(query: &str) -> Result<ListParams, Error> {
    let mut filter = EntryFilter::default();
    let mut order_by_raw: Option<String> = None;

    for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
        match key.as_ref() {
            "orderBy" => {
                if order_by_raw.replace(value.into_owned()).is_some() {
                    return Err(order_by_must_be_a_string());
                }
            }
            "title" => filter.title = Some(value.into_owned()),
            "text" => filter.text = Some(value.into_owned()),
            other if other.starts_with("orderBy[") => {
                return Err(order_by_must_be_a_string());
            }
            _ => {}
        }
    }

    let order_by = match order_by_raw {
        None => Vec::new(),
        Some(raw) => parse_order_by(&raw)?,
    };
    Ok(ListParams { filter, order_by })
}

fn order_by_must_be_a_string() -> Error {
    Error::invalid_request("\"orderBy\" must be a string")
}

/// Boundary validation for the raw `orderBy` value: trim, treat empty as
/// "no ordering", and require the anchored pattern before handing the
/// value to the lenient parser.
fn parse_order_by(raw: &str) -> Result<Vec<OrderClause>, Error> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }
    if !entry_order_by_regex().is_match(trimmed) {
        return Err(Error::invalid_request(format!(
            "\"orderBy\" with value \"{raw}\" fails to match the required pattern"
        ))
        .with_details(json!({
            "field": "orderBy",
            "value": raw,
            "pattern": ENTRY_ORDER_BY_PATTERN,
        })));
    }
    Ok(to_order_by(trimmed))
}

#[cfg(test)]
#[path = "journals_tests.rs"]
mod tests;
