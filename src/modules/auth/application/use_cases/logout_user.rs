use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use utoipa::ToSchema;

use crate::auth::application::ports::outgoing::{
    TokenDenylist, TokenDenylistError, TokenProvider, TokenType,
};

//
// ──────────────────────────────────────────────────────────
// Request / Response
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct LogoutRequest {
    #[serde(default)]
    refresh_token: Option<String>,
}

impl LogoutRequest {
    pub fn new(refresh_token: Option<String>) -> Self {
        Self { refresh_token }
    }

    pub fn refresh_token(&self) -> Option<&str> {
        self.refresh_token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LogoutResponse {
    pub message: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum LogoutError {
    #[error("Token revocation failed: {0}")]
    RevocationFailed(String),
}

impl From<TokenDenylistError> for LogoutError {
    fn from(error: TokenDenylistError) -> Self {
        LogoutError::RevocationFailed(error.to_string())
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ILogoutUserUseCase: Send + Sync {
    async fn execute(&self, request: LogoutRequest) -> Result<LogoutResponse, LogoutError>;
}

/// Revokes the presented refresh token. A token that no longer validates
/// cannot be replayed anyway, so logout still reports success for it.
#[derive(Clone)]
pub struct LogoutUserUseCase<D>
where
    D: TokenDenylist + Send + Sync,
{
    denylist: D,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl<D> LogoutUserUseCase<D>
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
impl<D> ILogoutUserUseCase for LogoutUserUseCase<D>
where
    D: TokenDenylist + Send + Sync,
{
    async fn execute(&self, request: LogoutRequest) -> Result<LogoutResponse, LogoutError> {
        if let Some(refresh_token) = request.refresh_token() {
            match self
                .token_provider
                .validate(refresh_token, TokenType::Refresh)
            {
                Ok(claims) => {
                    // The denylist entry only needs to outlive the token.
                    let expires_at = chrono::DateTime::from_timestamp(claims.exp, 0)
                        .unwrap_or_else(|| chrono::Utc::now() + chrono::Duration::days(7));

                    self.denylist.revoke(refresh_token, expires_at).await?;

                    info!("Refresh token revoked for user {}", claims.sub);
                }
                Err(e) => {
                    warn!("Refresh token rejected during logout: {}", e);
                }
            }
        }

        Ok(LogoutResponse {
            message: "Logged out successfully".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};
    use std::sync::Mutex;
    use uuid::Uuid;

    use crate::auth::application::domain::role::Role;
    use crate::auth::application::ports::outgoing::{TokenClaims, TokenError, TokenPair};

    #[derive(Default)]
    struct MockDenylist {
        revoked: Arc<Mutex<Vec<String>>>,
        should_fail: bool,
    }

    #[async_trait]
    impl TokenDenylist for MockDenylist {
        async fn revoke(
            &self,
            token: &str,
            _expires_at: DateTime<Utc>,
        ) -> Result<(), TokenDenylistError> {
            if self.should_fail {
                return Err(TokenDenylistError::Backend("connection refused".to_string()));
            }
            self.revoked.lock().unwrap().push(token.to_string());
            Ok(())
        }

        async fn is_revoked(&self, _token: &str) -> Result<bool, TokenDenylistError> {
            unimplemented!()
        }
    }

    struct StubTokenProvider {
        accepts: Option<String>,
    }

    impl TokenProvider for StubTokenProvider {
        fn issue_pair(&self, _user_id: Uuid, _roles: &[Role]) -> Result<TokenPair, TokenError> {
            unimplemented!()
        }

        fn issue_activation_token(
            &self,
            _user_id: Uuid,
            _credential_fingerprint: &str,
        ) -> Result<String, TokenError> {
            unimplemented!()
        }

        fn issue_password_reset_token(
            &self,
            _user_id: Uuid,
            _jti: &str,
        ) -> Result<String, TokenError> {
            unimplemented!()
        }

        fn validate(&self, token: &str, _expected: TokenType) -> Result<TokenClaims, TokenError> {
            if self.accepts.as_deref() == Some(token) {
                Ok(TokenClaims {
                    sub: Uuid::new_v4(),
                    exp: Utc::now().timestamp() + 86_400,
                    iat: Utc::now().timestamp(),
                    nbf: Utc::now().timestamp(),
                    token_type: "refresh".to_string(),
                    roles: Vec::new(),
                    jti: None,
                    cred_fp: None,
                })
            } else {
                Err(TokenError::InvalidSignature)
            }
        }
    }

    #[tokio::test]
    async fn valid_refresh_token_lands_on_the_denylist() {
        let revoked = Arc::new(Mutex::new(Vec::new()));
        let use_case = LogoutUserUseCase::new(
            MockDenylist {
                revoked: Arc::clone(&revoked),
                should_fail: false,
            },
            Arc::new(StubTokenProvider {
                accepts: Some("refresh-jwt".to_string()),
            }),
        );

        let result = use_case
            .execute(LogoutRequest::new(Some("refresh-jwt".to_string())))
            .await;

        assert!(result.is_ok());
        assert_eq!(*revoked.lock().unwrap(), vec!["refresh-jwt".to_string()]);
    }

    #[tokio::test]
    async fn logout_without_token_succeeds() {
        let use_case = LogoutUserUseCase::new(
            MockDenylist::default(),
            Arc::new(StubTokenProvider { accepts: None }),
        );

        let result = use_case.execute(LogoutRequest::new(None)).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn invalid_token_is_ignored_not_revoked() {
        let revoked = Arc::new(Mutex::new(Vec::new()));
        let use_case = LogoutUserUseCase::new(
            MockDenylist {
                revoked: Arc::clone(&revoked),
                should_fail: false,
            },
            Arc::new(StubTokenProvider { accepts: None }),
        );

        let result = use_case
            .execute(LogoutRequest::new(Some("garbage.token".to_string())))
            .await;

        assert!(result.is_ok());
        assert!(revoked.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn denylist_backend_failure_surfaces() {
        let use_case = LogoutUserUseCase::new(
            MockDenylist {
                revoked: Arc::new(Mutex::new(Vec::new())),
                should_fail: true,
            },
            Arc::new(StubTokenProvider {
                accepts: Some("refresh-jwt".to_string()),
            }),
        );

        let result = use_case
            .execute(LogoutRequest::new(Some("refresh-jwt".to_string())))
            .await;

        assert!(matches!(result, Err(LogoutError::RevocationFailed(_))));
    }
}
