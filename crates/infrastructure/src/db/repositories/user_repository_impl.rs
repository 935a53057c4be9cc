//! 用户Repository实现

use crate::db::DbPool;
use async_trait::async_trait;
use domain::{RepositoryError, User, UserRepository};
use sqlx::{query_as, FromRow};
use std::sync::Arc;
use uuid::Uuid;

/// 数据库用户模型
#[derive(Debug, Clone, FromRow)]
struct DbUser {
    pub id: Uuid,
    pub username: String,
    pub password: String,
    pub image: String,
    pub role: String,
}

impl From<DbUser> for User {
    fn from(db_user: DbUser) -> Self {
        User {
            id: db_user.id,
            username: db_user.username,
            password: db_user.password,
            image: db_user.image,
            role: db_user.role,
        }
    }
}

pub struct PgUserRepository {
    pool: Arc<DbPool>,
}

impl PgUserRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn insert(&self, user: User) -> Result<User, RepositoryError> {
        let result = query_as::<_, DbUser>(
            r#"
            INSERT INTO users (id, username, password, image, role)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, username, password, image, role
            "#,
        )
        .bind(user.id)
        .bind(&user.username)
        .bind(&user.password)
        .bind(&user.image)
        .bind(&user.role)
        .fetch_one(&*self.pool)
        .await
        .map_err(|e| RepositoryError::storage(e.to_string()))?;

        Ok(result.into())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError> {
        let result = query_as::<_, DbUser>(
            r#"
            SELECT id, username, password, image, role
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&*self.pool)
        .await
        .map_err(|e| RepositoryError::storage(e.to_string()))?;

        Ok(result.map(|u| u.into()))
    }

    async fn update_image(
        &self,
        username: &str,
        image: &str,
    ) -> Result<Option<User>, RepositoryError> {
        let result = query_as::<_, DbUser>(
            r#"
            UPDATE users
            SET image = $2
            WHERE username = $1
            RETURNING id, username, password, image, role
            "#,
        )
        .bind(username)
        .bind(image)
        .fetch_optional(&*self.pool)
        .await
        .map_err(|e| RepositoryError::storage(e.to_string()))?;

        Ok(result.map(|u| u.into()))
    }

    async fn list_all(&self) -> Result<Vec<User>, RepositoryError> {
        let users = query_as::<_, DbUser>(
            r#"
            SELECT id, username, password, image, role
            FROM users
            "#,
        )
        .fetch_all(&*self.pool)
        .await
        .map_err(|e| RepositoryError::storage(e.to_string()))?;

        Ok(users.into_iter().map(|u| u.into()).collect())
    }
}
