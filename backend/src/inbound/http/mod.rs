//! HTTP adapter: actix-web handlers, request/response DTOs, the error
//! envelope, and bearer-token authentication.

pub mod auth;
pub mod error;
pub mod health;
pub mod inspirations;
pub mod journals;
pub mod state;
pub(crate) mod validation;

pub use error::{ApiError, ApiResult};
