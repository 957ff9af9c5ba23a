//! Refresh token storage in Redis.
//!
//! Tokens expire automatically through Redis TTL; logout revokes a single
//! token or every token recorded for a user.

use crate::pool::{RedisPool, RedisResult};
use bmg_core::Snowflake;
use redis::AsyncCommands;
use serde::{Deserialize, Serialize};

/// Key prefix for refresh tokens
const REFRESH_TOKEN_PREFIX: &str = "refresh_token:";

/// Default TTL for refresh tokens (7 days)
const DEFAULT_REFRESH_TOKEN_TTL: u64 = 7 * 24 * 60 * 60;

/// Stored refresh token data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshTokenData {
    /// User ID this token belongs to
    pub user_id: Snowflake,
    /// Session ID (for tracking multiple sessions per user)
    pub session_id: String,
    /// Token creation timestamp (Unix epoch seconds)
    pub created_at: i64,
}

impl RefreshTokenData {
    /// Create new refresh token data
    #[must_use]
    pub fn new(user_id: Snowflake, session_id: String) -> Self {
        Self {
            user_id,
            session_id,
            created_at: chrono::Utc::now().timestamp(),
        }
    }
}

/// Refresh token store for managing authentication sessions
#[derive(Clone)]
pub struct RefreshTokenStore {
    pool: RedisPool,
    ttl_seconds: u64,
}

impl RefreshTokenStore {
    /// Create a new refresh token store
    #[must_use]
    pub fn new(pool: RedisPool) -> Self {
        Self {
            pool,
            ttl_seconds: DEFAULT_REFRESH_TOKEN_TTL,
        }
    }

    /// Create with custom TTL
    #[must_use]
    pub fn with_ttl(pool: RedisPool, ttl_seconds: u64) -> Self {
        Self { pool, ttl_seconds }
    }

    /// Generate Redis key for a refresh token
    fn key(token_id: &str) -> String {
        format!("{REFRESH_TOKEN_PREFIX}{token_id}")
    }

    fn user_set_key(user_id: Snowflake) -> String {
        format!("user_tokens:{user_id}")
    }

    /// Store a refresh token
    pub async fn store(&self, token_id: &str, data: &RefreshTokenData) -> RedisResult<()> {
        let key = Self::key(token_id);
        self.pool.set(&key, data, Some(self.ttl_seconds)).await?;

        // Also add to user's token set so revoke_all_for_user can find it
        let user_set_key = Self::user_set_key(data.user_id);
        let mut conn = self.pool.get().await?;
        conn.sadd::<_, _, ()>(&user_set_key, token_id).await?;
        conn.expire::<_, ()>(&user_set_key, self.ttl_seconds as i64)
            .await?;

        tracing::debug!(
            user_id = %data.user_id,
            session_id = %data.session_id,
            "Stored refresh token"
        );

        Ok(())
    }

    /// Validate and return token data (None if expired, revoked, or unknown)
    pub async fn validate(&self, token_id: &str) -> RedisResult<Option<RefreshTokenData>> {
        self.pool.get_value(&Self::key(token_id)).await
    }

    /// Revoke (delete) a refresh token
    pub async fn revoke(&self, token_id: &str) -> RedisResult<bool> {
        // First get the token to find user_id
        if let Some(data) = self.validate(token_id).await? {
            let user_set_key = Self::user_set_key(data.user_id);
            let mut conn = self.pool.get().await?;
            conn.srem::<_, _, ()>(&user_set_key, token_id).await?;
        }

        let deleted = self.pool.delete(&Self::key(token_id)).await?;

        if deleted {
            tracing::debug!("Revoked refresh token");
        }

        Ok(deleted)
    }

    /// Revoke all tokens for a user (logout from all devices)
    pub async fn revoke_all_for_user(&self, user_id: Snowflake) -> RedisResult<u32> {
        let user_set_key = Self::user_set_key(user_id);
        let mut conn = self.pool.get().await?;

        let token_ids: Vec<String> = conn.smembers(&user_set_key).await?;
        let count = token_ids.len() as u32;

        if !token_ids.is_empty() {
            let keys: Vec<String> = token_ids.iter().map(|id| Self::key(id)).collect();
            let keys_refs: Vec<&str> = keys.iter().map(String::as_str).collect();
            self.pool.delete_many(&keys_refs).await?;
        }

        conn.del::<_, ()>(&user_set_key).await?;

        tracing::info!(
            user_id = %user_id,
            count = count,
            "Revoked all refresh tokens for user"
        );

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_token_data_creation() {
        let user_id = Snowflake::from(12345i64);
        let data = RefreshTokenData::new(user_id, "session123".to_string());

        assert_eq!(data.user_id, user_id);
        assert_eq!(data.session_id, "session123");
        assert!(data.created_at > 0);
    }

    #[test]
    fn test_key_generation() {
        assert_eq!(RefreshTokenStore::key("abc123"), "refresh_token:abc123");
        assert_eq!(
            RefreshTokenStore::user_set_key(Snowflake::new(7)),
            "user_tokens:7"
        );
    }
}
