use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::auth::application::domain::role::Role;

#[derive(Debug, Clone, thiserror::Error)]
pub enum TokenError {
    #[error("Token has expired")]
    TokenExpired,

    #[error("Token is not yet valid")]
    TokenNotYetValid,

    #[error("Invalid token type, expected: {0}")]
    InvalidTokenType(String),

    #[error("Invalid token signature")]
    InvalidSignature,

    #[error("Malformed token")]
    MalformedToken,

    #[error("Token encoding error: {0}")]
    EncodingError(String),
}

/// The four token kinds this service mints. The string form is what lands
/// in the `token_type` claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenType {
    Access,
    Refresh,
    Activation,
    PasswordReset,
}

impl TokenType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenType::Access => "access",
            TokenType::Refresh => "refresh",
            TokenType::Activation => "activation",
            TokenType::PasswordReset => "password_reset",
        }
    }
}

/// Structure for JWT Claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: Uuid,
    pub exp: i64,
    pub iat: i64,
    pub nbf: i64,
    pub token_type: String,
    /// Role names, lowercase; present on access/refresh tokens.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<String>,
    /// Single-use marker on password-reset tokens.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jti: Option<String>,
    /// Credential fingerprint on activation tokens.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cred_fp: Option<String>,
}

impl TokenClaims {
    /// Parsed role set; unknown names from older tokens are skipped.
    pub fn role_set(&self) -> Vec<Role> {
        self.roles.iter().filter_map(|r| Role::parse(r)).collect()
    }
}

#[derive(Debug, Clone)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    /// Access-token lifetime in seconds.
    pub expires_in: i64,
}

/// SHA-256 hex of the stored password hash. Activation links embed this, so
/// a password change invalidates every link minted before it.
pub fn credential_fingerprint(password_hash: &str) -> String {
    format!("{:x}", Sha256::digest(password_hash.as_bytes()))
}

pub trait TokenProvider: Send + Sync {
    fn issue_pair(&self, user_id: Uuid, roles: &[Role]) -> Result<TokenPair, TokenError>;

    fn issue_activation_token(
        &self,
        user_id: Uuid,
        credential_fingerprint: &str,
    ) -> Result<String, TokenError>;

    fn issue_password_reset_token(&self, user_id: Uuid, jti: &str) -> Result<String, TokenError>;

    /// Decodes and checks signature, expiry, `nbf` and the `token_type`
    /// claim against `expected`.
    fn validate(&self, token: &str, expected: TokenType) -> Result<TokenClaims, TokenError>;
}
