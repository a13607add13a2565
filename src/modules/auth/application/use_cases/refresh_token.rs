use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use crate::auth::application::ports::outgoing::{
    TokenDenylist, TokenError, TokenProvider, TokenType,
};

//
// ──────────────────────────────────────────────────────────
// Request
// ──────────────────────────────────────────────────────────
//

/// Validated refresh token request.
#[derive(Debug, Clone, ToSchema)]
pub struct RefreshTokenRequest {
    refresh_token: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum RefreshTokenRequestError {
    #[error("Refresh token cannot be empty")]
    EmptyToken,
}

impl RefreshTokenRequest {
    pub fn new(refresh_token: String) -> Result<Self, RefreshTokenRequestError> {
        if refresh_token.trim().is_empty() {
            return Err(RefreshTokenRequestError::EmptyToken);
        }

        Ok(Self {
            refresh_token: refresh_token.trim().to_string(),
        })
    }

    pub fn refresh_token(&self) -> &str {
        &self.refresh_token
    }
}

impl<'de> Deserialize<'de> for RefreshTokenRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct RefreshTokenRequestHelper {
            refresh_token: String,
        }

        let helper = RefreshTokenRequestHelper::deserialize(deserializer)?;
        RefreshTokenRequest::new(helper.refresh_token).map_err(serde::de::Error::custom)
    }
}

//
// ──────────────────────────────────────────────────────────
// Errors / Response
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum RefreshTokenError {
    #[error("Refresh token has expired")]
    TokenExpired,

    #[error("Invalid refresh token")]
    TokenInvalid,

    /// Token was explicitly revoked by a logout.
    #[error("Refresh token has been revoked")]
    TokenRevoked,

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Denylist backend error: {0}")]
    DenylistError(String),
}

impl From<TokenError> for RefreshTokenError {
    fn from(error: TokenError) -> Self {
        match error {
            TokenError::TokenExpired => RefreshTokenError::TokenExpired,
            TokenError::EncodingError(msg) => RefreshTokenError::TokenGenerationFailed(msg),
            _ => RefreshTokenError::TokenInvalid,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RefreshTokenResponse {
    pub access_token: String,
    /// Rotated on every refresh; the old token stays usable until it
    /// expires or a logout revokes it.
    pub refresh_token: String,
    pub expires_in: i64,
}

//
// ──────────────────────────────────────────────────────────
// Use Case
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait IRefreshTokenUseCase: Send + Sync {
    async fn execute(
        &self,
        request: RefreshTokenRequest,
    ) -> Result<RefreshTokenResponse, RefreshTokenError>;
}

#[derive(Clone)]
pub struct RefreshTokenUseCase<D>
where
    D: TokenDenylist + Send + Sync,
{
    denylist: D,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl<D> RefreshTokenUseCase<D>
where
    D: TokenDenylist + Send + Sync,
{
    pub fn new(denylist: D, token_provider: Arc<dyn TokenProvider + Send + Sync>) -> Self {
        Self {
            denylist,
            token_provider,
        }
    }
}

#[async_trait]
impl<D> IRefreshTokenUseCase for RefreshTokenUseCase<D>
where
    D: TokenDenylist + Send + Sync,
{
    async fn execute(
        &self,
        request: RefreshTokenRequest,
    ) -> Result<RefreshTokenResponse, RefreshTokenError> {
        let claims = self
            .token_provider
            .validate(request.refresh_token(), TokenType::Refresh)
            .map_err(RefreshTokenError::from)?;

        let revoked = self
            .denylist
            .is_revoked(request.refresh_token())
            .await
            .map_err(|e| RefreshTokenError::DenylistError(e.to_string()))?;

        if revoked {
            return Err(RefreshTokenError::TokenRevoked);
        }

        // Roles travel inside the token, so no database round trip here.
        let pair = self
            .token_provider
            .issue_pair(claims.sub, &claims.role_set())
            .map_err(|e| RefreshTokenError::TokenGenerationFailed(e.to_string()))?;

        Ok(RefreshTokenResponse {
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
            expires_in: pair.expires_in,
        })
    }
}
