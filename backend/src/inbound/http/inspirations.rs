//! Inspiration API handlers: shared writing prompts. Unlike the journal
//! surface these carry no caller identity; prompts are global.

use actix_web::{HttpResponse, delete, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{Error, Inspiration};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::require_string;
use crate::inbound::http::{ApiError, ApiResult};

/// Register the inspiration routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(create_inspiration)
        .service(list_inspirations)
        .service(delete_inspiration);
}

/// Body for `POST /inspirations`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateInspirationRequest {
    #[schema(example = "Write about a place you have never been.")]
    pub text: Option<String>,
}

/// An inspiration prompt as returned to clients.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InspirationBody {
    id: String,
    text: String,
    created_at: String,
    updated_at: String,
}

impl From<Inspiration> for InspirationBody {
    fn from(inspiration: Inspiration) -> Self {
        Self {
            id: inspiration.id.to_string(),
            text: inspiration.text,
            created_at: inspiration.created_at.to_rfc3339(),
            updated_at: inspiration.updated_at.to_rfc3339(),
        }
    }
}

/// Record a new inspiration prompt.
#[utoipa::path(
    post,
    path = "/inspirations",
    request_body = CreateInspirationRequest,
    security([]),
    responses(
        (status = 201, description = "Inspiration recorded", body = InspirationBody),
        (status = 400, description = "Validation failure", body = ApiError)
    ),
    tags = ["inspirations"],
    operation_id = "createInspiration"
)]
#[post("/inspirations")]
pub async fn create_inspiration(
    state: web::Data<HttpState>,
    body: web::Json<CreateInspirationRequest>,
) -> ApiResult<HttpResponse> {
    let text = require_string("text", body.into_inner().text)?;
    let inspiration = state.inspirations_command.create_inspiration(text).await?;
    Ok(HttpResponse::Created().json(InspirationBody::from(inspiration)))
}

/// List every inspiration prompt.
#[utoipa::path(
    get,
    path = "/inspirations",
    security([]),
    responses(
        (status = 200, description = "Inspirations", body = [InspirationBody])
    ),
    tags = ["inspirations"],
    operation_id = "listInspirations"
)]
#[get("/inspirations")]
pub async fn list_inspirations(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<InspirationBody>>> {
    let inspirations = state.inspirations_query.list_inspirations().await?;
    Ok(web::Json(
        inspirations.into_iter().map(InspirationBody::from).collect(),
    ))
}

/// Delete an inspiration prompt.
#[utoipa::path(
    delete,
    path = "/inspirations/{inspirationId}",
    params(("inspirationId" = String, Path, description = "Inspiration identifier")),
    security([]),
    responses(
        (status = 204, description = "Inspiration deleted"),
        (status = 404, description = "Inspiration not found", body = ApiError)
    ),
    tags = ["inspirations"],
    operation_id = "deleteInspiration"
)]
#[delete("/inspirations/{inspiration_id}")]
pub async fn delete_inspiration(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let raw_id = path.into_inner();
    let id = Uuid::parse_str(&raw_id)
        .map_err(|_| Error::not_found(format!("Inspiration id {raw_id} not found")))?;
    state.inspirations_command.delete_inspiration(id).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
#[path = "inspirations_tests.rs"]
mod tests;
