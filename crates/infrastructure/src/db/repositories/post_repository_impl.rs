//! 回帖Repository实现

use crate::db::DbPool;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use domain::{Post, PostRepository, RepositoryError};
use sqlx::{query_as, FromRow};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow)]
struct DbPost {
    pub id: Uuid,
    pub discussion_id: Uuid,
    pub username: String,
    pub comment: String,
    pub image: Option<String>,
    pub video: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<DbPost> for Post {
    fn from(row: DbPost) -> Self {
        Post {
            id: row.id,
            discussion_id: row.discussion_id,
            username: row.username,
            comment: row.comment,
            image: row.image,
            video: row.video,
            created_at: row.created_at,
        }
    }
}

pub struct PgPostRepository {
    pool: Arc<DbPool>,
}

impl PgPostRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostRepository for PgPostRepository {
    async fn insert(&self, post: Post) -> Result<Post, RepositoryError> {
        let result = query_as::<_, DbPost>(
            r#"
            INSERT INTO posts (id, discussion_id, username, comment, image, video, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, discussion_id, username, comment, image, video, created_at
            "#,
        )
        .bind(post.id)
        .bind(post.discussion_id)
        .bind(&post.username)
        .bind(&post.comment)
        .bind(&post.image)
        .bind(&post.video)
        .bind(post.created_at)
        .fetch_one(&*self.pool)
        .await
        .map_err(|e| RepositoryError::storage(e.to_string()))?;

        Ok(result.into())
    }

    async fn list_by_discussion(
        &self,
        discussion_id: Uuid,
    ) -> Result<Vec<Post>, RepositoryError> {
        let rows = query_as::<_, DbPost>(
            r#"
            SELECT id, discussion_id, username, comment, image, video, created_at
            FROM posts
            WHERE discussion_id = $1
            "#,
        )
        .bind(discussion_id)
        .fetch_all(&*self.pool)
        .await
        .map_err(|e| RepositoryError::storage(e.to_string()))?;

        Ok(rows.into_iter().map(|p| p.into()).collect())
    }

    async fn list_all(&self) -> Result<Vec<Post>, RepositoryError> {
        let rows = query_as::<_, DbPost>(
            r#"
            SELECT id, discussion_id, username, comment, image, video, created_at
            FROM posts
            "#,
        )
        .fetch_all(&*self.pool)
        .await
        .map_err(|e| RepositoryError::storage(e.to_string()))?;

        Ok(rows.into_iter().map(|p| p.into()).collect())
    }
}
