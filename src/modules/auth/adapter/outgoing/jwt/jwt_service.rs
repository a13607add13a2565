use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use std::fmt;
use tracing;
use uuid::Uuid;

use crate::auth::application::domain::role::Role;
use crate::auth::application::ports::outgoing::token_provider::{
    TokenClaims, TokenError, TokenPair, TokenProvider, TokenType,
};

use super::jwt_config::JwtConfig;

#[derive(Clone)]
pub struct JwtTokenService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

#[cfg(not(tarpaulin_include))]
impl fmt::Debug for JwtTokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtTokenService")
            .field("config", &"JwtConfig")
            .finish()
    }
}

impl JwtTokenService {
    /// Initialize the service with config
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret_key.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret_key.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    fn base_claims(&self, user_id: Uuid, token_type: TokenType, expiry_seconds: i64) -> TokenClaims {
        let now = Utc::now();
        let expiration = now + Duration::seconds(expiry_seconds);

        TokenClaims {
            sub: user_id,
            exp: expiration.timestamp(),
            iat: now.timestamp(),
            nbf: now.timestamp(),
            token_type: token_type.as_str().to_string(),
            roles: Vec::new(),
            jti: None,
            cred_fp: None,
        }
    }

    fn encode_claims(&self, claims: &TokenClaims) -> Result<String, TokenError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingError(e.to_string()))
    }
}

impl TokenProvider for JwtTokenService {
    /// Mint matching access and refresh tokens carrying the role set.
    fn issue_pair(&self, user_id: Uuid, roles: &[Role]) -> Result<TokenPair, TokenError> {
        let role_names: Vec<String> = roles.iter().map(|r| r.as_str().to_string()).collect();

        let mut access =
            self.base_claims(user_id, TokenType::Access, self.config.access_token_expiry);
        access.roles = role_names.clone();

        let mut refresh =
            self.base_claims(user_id, TokenType::Refresh, self.config.refresh_token_expiry);
        refresh.roles = role_names;

        Ok(TokenPair {
            access_token: self.encode_claims(&access)?,
            refresh_token: self.encode_claims(&refresh)?,
            expires_in: self.config.access_token_expiry,
        })
    }

    fn issue_activation_token(
        &self,
        user_id: Uuid,
        credential_fingerprint: &str,
    ) -> Result<String, TokenError> {
        let mut claims = self.base_claims(
            user_id,
            TokenType::Activation,
            self.config.activation_token_expiry,
        );
        claims.cred_fp = Some(credential_fingerprint.to_string());

        self.encode_claims(&claims)
    }

    fn issue_password_reset_token(&self, user_id: Uuid, jti: &str) -> Result<String, TokenError> {
        let mut claims =
            self.base_claims(user_id, TokenType::PasswordReset, self.config.reset_token_expiry);
        claims.jti = Some(jti.to_string());

        self.encode_claims(&claims)
    }

    /// Verify and decode a token, checking it is of the expected kind
    fn validate(&self, token: &str, expected: TokenType) -> Result<TokenClaims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 30;
        validation.validate_nbf = true;

        let decoded =
            decode::<TokenClaims>(token, &self.decoding_key, &validation).map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;

                match e.kind() {
                    ErrorKind::ExpiredSignature => {
                        tracing::debug!("Token verification failed: Token expired");
                        TokenError::TokenExpired
                    }
                    ErrorKind::ImmatureSignature => {
                        tracing::warn!("Token verification failed: Token not yet valid");
                        TokenError::TokenNotYetValid
                    }
                    ErrorKind::InvalidSignature => {
                        tracing::error!("Security alert: Invalid token signature detected");
                        TokenError::InvalidSignature
                    }
                    ErrorKind::InvalidToken | ErrorKind::InvalidAlgorithm => {
                        tracing::error!("Security alert: Malformed or invalid algorithm token");
                        TokenError::MalformedToken
                    }
                    ErrorKind::Base64(_) | ErrorKind::Json(_) | ErrorKind::Utf8(_) => {
                        tracing::warn!("Token verification failed: Malformed token");
                        TokenError::MalformedToken
                    }
                    _ => {
                        tracing::warn!("Token verification failed: Unknown error");
                        TokenError::MalformedToken
                    }
                }
            })?;

        let claims = decoded.claims;

        if claims.token_type != expected.as_str() {
            tracing::warn!(
                "Token type mismatch: expected '{}', got '{}'",
                expected.as_str(),
                claims.token_type
            );
            return Err(TokenError::InvalidTokenType(expected.as_str().to_string()));
        }

        Ok(claims)
    }
}
