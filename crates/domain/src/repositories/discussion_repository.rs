use async_trait::async_trait;

use crate::{Discussion, RepositoryError};

#[async_trait]
pub trait DiscussionRepository: Send + Sync {
    async fn insert(&self, discussion: Discussion) -> Result<Discussion, RepositoryError>;
    async fn find_by_title(&self, title: &str) -> Result<Option<Discussion>, RepositoryError>;
    async fn list_by_main_topic(&self, title: &str) -> Result<Vec<Discussion>, RepositoryError>;
    async fn list_all(&self) -> Result<Vec<Discussion>, RepositoryError>;
}
