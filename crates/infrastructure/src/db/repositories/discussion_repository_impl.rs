//! 讨论Repository实现

use crate::db::DbPool;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use domain::{Discussion, DiscussionRepository, RepositoryError};
use sqlx::{query_as, FromRow};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow)]
struct DbDiscussion {
    pub id: Uuid,
    pub main_topic: String,
    pub username: String,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl From<DbDiscussion> for Discussion {
    fn from(row: DbDiscussion) -> Self {
        Discussion {
            id: row.id,
            main_topic: row.main_topic,
            username: row.username,
            title: row.title,
            description: row.description,
            created_at: row.created_at,
        }
    }
}

pub struct PgDiscussionRepository {
    pool: Arc<DbPool>,
}

impl PgDiscussionRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DiscussionRepository for PgDiscussionRepository {
    async fn insert(&self, discussion: Discussion) -> Result<Discussion, RepositoryError> {
        let result = query_as::<_, DbDiscussion>(
            r#"
            INSERT INTO discussions (id, main_topic, username, title, description, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, main_topic, username, title, description, created_at
            "#,
        )
        .bind(discussion.id)
        .bind(&discussion.main_topic)
        .bind(&discussion.username)
        .bind(&discussion.title)
        .bind(&discussion.description)
        .bind(discussion.created_at)
        .fetch_one(&*self.pool)
        .await
        .map_err(|e| RepositoryError::storage(e.to_string()))?;

        Ok(result.into())
    }

    async fn find_by_title(&self, title: &str) -> Result<Option<Discussion>, RepositoryError> {
        let result = query_as::<_, DbDiscussion>(
            r#"
            SELECT id, main_topic, username, title, description, created_at
            FROM discussions
            WHERE title = $1
            "#,
        )
        .bind(title)
        .fetch_optional(&*self.pool)
        .await
        .map_err(|e| RepositoryError::storage(e.to_string()))?;

        Ok(result.map(|d| d.into()))
    }

    async fn list_by_main_topic(&self, title: &str) -> Result<Vec<Discussion>, RepositoryError> {
        let rows = query_as::<_, DbDiscussion>(
            r#"
            SELECT id, main_topic, username, title, description, created_at
            FROM discussions
            WHERE main_topic = $1
            "#,
        )
        .bind(title)
        .fetch_all(&*self.pool)
        .await
        .map_err(|e| RepositoryError::storage(e.to_string()))?;

        Ok(rows.into_iter().map(|d| d.into()).collect())
    }

    async fn list_all(&self) -> Result<Vec<Discussion>, RepositoryError> {
        let rows = query_as::<_, DbDiscussion>(
            r#"
            SELECT id, main_topic, username, title, description, created_at
            FROM discussions
            "#,
        )
        .fetch_all(&*self.pool)
        .await
        .map_err(|e| RepositoryError::storage(e.to_string()))?;

        Ok(rows.into_iter().map(|d| d.into()).collect())
    }
}
