use async_trait::async_trait;
use uuid::Uuid;

use crate::{Post, RepositoryError};

#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn insert(&self, post: Post) -> Result<Post, RepositoryError>;
    async fn list_by_discussion(&self, discussion_id: Uuid) -> Result<Vec<Post>, RepositoryError>;
    async fn list_all(&self) -> Result<Vec<Post>, RepositoryError>;
}
