//! Bearer-token authentication extractor.
//!
//! Every journaling and inspiration endpoint requires an
//! `Authorization: Bearer <token>` header. The token is resolved to a
//! stable subject identifier by the [`TokenVerifier`] port; handlers
//! receive the verified subject and never see the raw credential.

use actix_web::http::header::AUTHORIZATION;
use actix_web::{FromRequest, HttpRequest, dev::Payload, web};
use futures_util::future::LocalBoxFuture;

use crate::domain::{Error, UserId, ports::TokenVerifier};
use crate::inbound::http::{ApiError, state::HttpState};

const BEARER_PREFIX: &str = "Bearer ";

/// Verified caller identity extracted from the request headers.
#[derive(Debug, Clone)]
pub struct AuthContext {
    subject: UserId,
}

impl AuthContext {
    /// Stable identifier of the authenticated user.
    pub fn user_id(&self) -> &UserId {
        &self.subject
    }

    pub fn into_user_id(self) -> UserId {
        self.subject
    }
}

fn bearer_token(req: &HttpRequest) -> Result<String, Error> {
    let header = req
        .headers()
        .get(AUTHORIZATION)
        .ok_or_else(|| Error::unauthorized("Missing Authorization header"))?;
    let value = header
        .to_str()
        .map_err(|_| Error::unauthorized("Malformed Authorization header"))?;
    let token = value
        .strip_prefix(BEARER_PREFIX)
        .ok_or_else(|| Error::unauthorized("Authorization header must use the Bearer scheme"))?;
    if token.trim().is_empty() {
        return Err(Error::unauthorized("Bearer token is empty"));
    }
    Ok(token.to_owned())
}

impl FromRequest for AuthContext {
    type Error = ApiError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();
        Box::pin(async move {
            let state = req
                .app_data::<web::Data<HttpState>>()
                .cloned()
                .ok_or_else(|| ApiError::from(Error::internal("HTTP state is not configured")))?;
            let token = bearer_token(&req)?;
            let subject = verify(state.token_verifier.as_ref(), &token).await?;
            Ok(Self { subject })
        })
    }
}

async fn verify(verifier: &dyn TokenVerifier, token: &str) -> Result<UserId, ApiError> {
    verifier.verify(token).await.map_err(ApiError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;
    use rstest::rstest;

    #[rstest]
    #[case(TestRequest::get(), "Missing Authorization header")]
    #[case(
        TestRequest::get().insert_header((AUTHORIZATION, "Basic YWxpY2U=")),
        "Authorization header must use the Bearer scheme"
    )]
    #[case(
        TestRequest::get().insert_header((AUTHORIZATION, "Bearer  ")),
        "Bearer token is empty"
    )]
    fn rejects_missing_or_malformed_headers(
        #[case] request: TestRequest,
        #[case] expected: &str,
    ) {
        let req = request.to_http_request();
        let error = bearer_token(&req).expect_err("header should be rejected");
        assert_eq!(error.message(), expected);
    }

    #[test]
    fn accepts_a_bearer_token() {
        let req = TestRequest::get()
            .insert_header((AUTHORIZATION, "Bearer token-alice"))
            .to_http_request();
        assert_eq!(bearer_token(&req).expect("token"), "token-alice");
    }
}
