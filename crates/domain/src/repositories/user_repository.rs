use async_trait::async_trait;

use crate::{RepositoryError, User};

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn insert(&self, user: User) -> Result<User, RepositoryError>;
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError>;
    /// 按用户名定位并更新头像，返回更新后的记录；用户不存在时返回 None。
    async fn update_image(
        &self,
        username: &str,
        image: &str,
    ) -> Result<Option<User>, RepositoryError>;
    async fn list_all(&self) -> Result<Vec<User>, RepositoryError>;
}
