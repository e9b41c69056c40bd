//! Driven port for bearer-token verification.
//!
//! JWT/JWKS validation is a deployment concern: the backend only needs an
//! authenticated subject id per request and trusts whatever implementation
//! of this port the composition root wires in.

use async_trait::async_trait;

use crate::domain::{Error, UserId};

/// Resolves a bearer token to the authenticated subject.
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    /// Verify the token and return the subject id it asserts.
    async fn verify(&self, token: &str) -> Result<UserId, Error>;
}

/// Development and test verifier that treats the bearer token itself as
/// the subject id. Useful behind a gateway that has already verified the
/// JWT, and in integration tests that need to pick the caller directly.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureTokenVerifier;

#[async_trait]
impl TokenVerifier for FixtureTokenVerifier {
    async fn verify(&self, token: &str) -> Result<UserId, Error> {
        UserId::new(token).map_err(|err| Error::unauthorized(format!("invalid bearer token: {err}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fixture_verifier_maps_token_to_subject() {
        let subject = FixtureTokenVerifier
            .verify("auth0|abc123")
            .await
            .expect("valid token");
        assert_eq!(subject.as_ref(), "auth0|abc123");
    }

    #[tokio::test]
    async fn fixture_verifier_rejects_empty_tokens() {
        let err = FixtureTokenVerifier
            .verify("")
            .await
            .expect_err("empty token must fail");
        assert_eq!(err.code(), crate::domain::ErrorCode::Unauthorized);
    }
}
