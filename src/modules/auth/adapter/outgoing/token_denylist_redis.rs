use async_trait::async_trait;
use chrono::{DateTime, Utc};
use deadpool_redis::{redis::AsyncCommands, Pool};
use sha2::{Digest, Sha256};
use std::sync::Arc;

use crate::auth::application::ports::outgoing::token_denylist::{
    TokenDenylist, TokenDenylistError,
};

/// Redis-backed implementation of `TokenDenylist`.
///
/// Revoked refresh tokens are stored under per-token keys:
///
/// ```text
/// auth:denylist:token:{sha256(token)} -> "1"
/// ```
///
/// - Key exists => token is revoked
/// - TTL = the token's own expiry, so Redis cleans up by itself
///
/// Raw tokens never reach Redis; only their SHA-256 digest does.
#[derive(Clone)]
pub struct RedisTokenDenylist {
    pool: Arc<Pool>,
}

impl RedisTokenDenylist {
    /// The pool must already be initialized and ready to use.
    pub fn new(pool: Arc<Pool>) -> Self {
        Self { pool }
    }

    fn token_key(token: &str) -> String {
        let digest = Sha256::digest(token.as_bytes());
        format!("auth:denylist:token:{:x}", digest)
    }

    async fn get_conn(&self) -> Result<deadpool_redis::Connection, TokenDenylistError> {
        self.pool
            .get()
            .await
            .map_err(|e| TokenDenylistError::Backend(format!("Pool error: {}", e)))
    }
}

#[async_trait]
impl TokenDenylist for RedisTokenDenylist {
    /// Revoke a single refresh token.
    ///
    /// The entry lives exactly as long as the token would have; a token
    /// already past `expires_at` needs no entry at all, so that case is
    /// a successful no-op.
    async fn revoke(
        &self,
        token: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<(), TokenDenylistError> {
        let ttl = (expires_at - Utc::now()).num_seconds();
        if ttl <= 0 {
            return Ok(());
        }

        let key = Self::token_key(token);
        let mut conn = self.get_conn().await?;

        conn.set_ex::<_, _, ()>(key, "1", ttl as u64)
            .await
            .map_err(|e| TokenDenylistError::Backend(e.to_string()))?;

        Ok(())
    }

    /// O(1) membership check.
    ///
    /// - `true`  => token was revoked and has not yet expired
    /// - `false` => token was never revoked, or its entry already lapsed
    async fn is_revoked(&self, token: &str) -> Result<bool, TokenDenylistError> {
        let key = Self::token_key(token);
        let mut conn = self.get_conn().await?;

        let exists: bool = conn
            .exists(key)
            .await
            .map_err(|e| TokenDenylistError::Backend(e.to_string()))?;

        Ok(exists)
    }
}
