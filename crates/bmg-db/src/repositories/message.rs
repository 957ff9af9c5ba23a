//! PostgreSQL implementation of MessageRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use bmg_core::entities::Message;
use bmg_core::traits::{MessageRepository, RepoResult};
use bmg_core::value_objects::Snowflake;

use crate::models::MessageModel;

use super::error::map_db_error;

/// PostgreSQL implementation of MessageRepository
#[derive(Clone)]
pub struct PgMessageRepository {
    pool: PgPool,
}

impl PgMessageRepository {
    /// Create a new PgMessageRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MessageRepository for PgMessageRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Message>> {
        let result = sqlx::query_as::<_, MessageModel>(
            r#"
            SELECT id, sender_id, recipient_id, body, read, created_at
            FROM messages
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Message::from))
    }

    #[instrument(skip(self))]
    async fn conversation(&self, a: Snowflake, b: Snowflake) -> RepoResult<Vec<Message>> {
        let results = sqlx::query_as::<_, MessageModel>(
            r#"
            SELECT id, sender_id, recipient_id, body, read, created_at
            FROM messages
            WHERE (sender_id = $1 AND recipient_id = $2)
               OR (sender_id = $2 AND recipient_id = $1)
            ORDER BY created_at ASC
            "#,
        )
        .bind(a.into_inner())
        .bind(b.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Message::from).collect())
    }

    #[instrument(skip(self, message))]
    async fn create(&self, message: &Message) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO messages (id, sender_id, recipient_id, body, read, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(message.id.into_inner())
        .bind(message.sender_id.into_inner())
        .bind(message.recipient_id.into_inner())
        .bind(&message.body)
        .bind(message.read)
        .bind(message.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn mark_read(&self, id: Snowflake, recipient_id: Snowflake) -> RepoResult<bool> {
        // Only the recipient may mark a message read
        let result = sqlx::query(
            r#"
            UPDATE messages SET read = TRUE WHERE id = $1 AND recipient_id = $2
            "#,
        )
        .bind(id.into_inner())
        .bind(recipient_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgMessageRepository>();
    }
}
