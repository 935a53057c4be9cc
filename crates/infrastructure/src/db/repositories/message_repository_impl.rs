//! 私信Repository实现

use crate::db::DbPool;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use domain::{Message, MessageRepository, RepositoryError};
use sqlx::{query, query_as, FromRow};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow)]
struct DbMessage {
    pub id: Uuid,
    pub username_who_sends: String,
    pub username_who_gets: String,
    pub message: String,
    pub unread_message: bool,
    pub created_at: DateTime<Utc>,
}

impl From<DbMessage> for Message {
    fn from(row: DbMessage) -> Self {
        Message {
            id: row.id,
            username_who_sends: row.username_who_sends,
            username_who_gets: row.username_who_gets,
            message: row.message,
            unread_message: row.unread_message,
            created_at: row.created_at,
        }
    }
}

pub struct PgMessageRepository {
    pool: Arc<DbPool>,
}

impl PgMessageRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MessageRepository for PgMessageRepository {
    async fn insert(&self, message: Message) -> Result<Message, RepositoryError> {
        let result = query_as::<_, DbMessage>(
            r#"
            INSERT INTO messages (id, username_who_sends, username_who_gets, message, unread_message, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, username_who_sends, username_who_gets, message, unread_message, created_at
            "#,
        )
        .bind(message.id)
        .bind(&message.username_who_sends)
        .bind(&message.username_who_gets)
        .bind(&message.message)
        .bind(message.unread_message)
        .bind(message.created_at)
        .fetch_one(&*self.pool)
        .await
        .map_err(|e| RepositoryError::storage(e.to_string()))?;

        Ok(result.into())
    }

    async fn list_unread(
        &self,
        sender: &str,
        recipient: &str,
    ) -> Result<Vec<Message>, RepositoryError> {
        let rows = query_as::<_, DbMessage>(
            r#"
            SELECT id, username_who_sends, username_who_gets, message, unread_message, created_at
            FROM messages
            WHERE username_who_sends = $1 AND username_who_gets = $2 AND unread_message = TRUE
            "#,
        )
        .bind(sender)
        .bind(recipient)
        .fetch_all(&*self.pool)
        .await
        .map_err(|e| RepositoryError::storage(e.to_string()))?;

        Ok(rows.into_iter().map(|m| m.into()).collect())
    }

    async fn mark_read(&self, id: Uuid) -> Result<(), RepositoryError> {
        query("UPDATE messages SET unread_message = FALSE WHERE id = $1")
            .bind(id)
            .execute(&*self.pool)
            .await
            .map_err(|e| RepositoryError::storage(e.to_string()))?;

        Ok(())
    }

    async fn list_conversation(
        &self,
        user_a: &str,
        user_b: &str,
    ) -> Result<Vec<Message>, RepositoryError> {
        let rows = query_as::<_, DbMessage>(
            r#"
            SELECT id, username_who_sends, username_who_gets, message, unread_message, created_at
            FROM messages
            WHERE (username_who_sends = $1 AND username_who_gets = $2)
               OR (username_who_sends = $2 AND username_who_gets = $1)
            ORDER BY created_at ASC
            "#,
        )
        .bind(user_a)
        .bind(user_b)
        .fetch_all(&*self.pool)
        .await
        .map_err(|e| RepositoryError::storage(e.to_string()))?;

        Ok(rows.into_iter().map(|m| m.into()).collect())
    }

    async fn list_all(&self) -> Result<Vec<Message>, RepositoryError> {
        let rows = query_as::<_, DbMessage>(
            r#"
            SELECT id, username_who_sends, username_who_gets, message, unread_message, created_at
            FROM messages
            "#,
        )
        .fetch_all(&*self.pool)
        .await
        .map_err(|e| RepositoryError::storage(e.to_string()))?;

        Ok(rows.into_iter().map(|m| m.into()).collect())
    }
}
