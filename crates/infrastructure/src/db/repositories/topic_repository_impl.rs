//! 主题Repository实现

use crate::db::DbPool;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use domain::{MainTopic, MainTopicRepository, RepositoryError, TopicWithDiscussionCount};
use sqlx::{query_as, FromRow};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow)]
struct DbMainTopic {
    pub id: Uuid,
    pub username: String,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

impl From<DbMainTopic> for MainTopic {
    fn from(row: DbMainTopic) -> Self {
        MainTopic {
            id: row.id,
            username: row.username,
            title: row.title,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, Clone, FromRow)]
struct DbTopicWithCount {
    pub id: Uuid,
    pub username: String,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub discussions_count: i64,
}

impl From<DbTopicWithCount> for TopicWithDiscussionCount {
    fn from(row: DbTopicWithCount) -> Self {
        TopicWithDiscussionCount {
            id: row.id,
            username: row.username,
            title: row.title,
            created_at: row.created_at,
            discussions_count: row.discussions_count,
        }
    }
}

pub struct PgMainTopicRepository {
    pool: Arc<DbPool>,
}

impl PgMainTopicRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MainTopicRepository for PgMainTopicRepository {
    async fn insert(&self, topic: MainTopic) -> Result<MainTopic, RepositoryError> {
        let result = query_as::<_, DbMainTopic>(
            r#"
            INSERT INTO main_topics (id, username, title, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, username, title, created_at
            "#,
        )
        .bind(topic.id)
        .bind(&topic.username)
        .bind(&topic.title)
        .bind(topic.created_at)
        .fetch_one(&*self.pool)
        .await
        .map_err(|e| RepositoryError::storage(e.to_string()))?;

        Ok(result.into())
    }

    async fn find_by_title(&self, title: &str) -> Result<Option<MainTopic>, RepositoryError> {
        let result = query_as::<_, DbMainTopic>(
            r#"
            SELECT id, username, title, created_at
            FROM main_topics
            WHERE title = $1
            "#,
        )
        .bind(title)
        .fetch_optional(&*self.pool)
        .await
        .map_err(|e| RepositoryError::storage(e.to_string()))?;

        Ok(result.map(|t| t.into()))
    }

    async fn list_with_discussion_counts(
        &self,
    ) -> Result<Vec<TopicWithDiscussionCount>, RepositoryError> {
        // 分组计数聚合，讨论按标题关联到主题
        let rows = query_as::<_, DbTopicWithCount>(
            r#"
            SELECT t.id, t.username, t.title, t.created_at,
                   COUNT(d.id) AS discussions_count
            FROM main_topics t
            LEFT JOIN discussions d ON d.main_topic = t.title
            GROUP BY t.id, t.username, t.title, t.created_at
            ORDER BY t.created_at
            "#,
        )
        .fetch_all(&*self.pool)
        .await
        .map_err(|e| RepositoryError::storage(e.to_string()))?;

        Ok(rows.into_iter().map(|t| t.into()).collect())
    }
}
