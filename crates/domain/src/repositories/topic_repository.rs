use async_trait::async_trait;

use crate::{MainTopic, RepositoryError, TopicWithDiscussionCount};

#[async_trait]
pub trait MainTopicRepository: Send + Sync {
    async fn insert(&self, topic: MainTopic) -> Result<MainTopic, RepositoryError>;
    async fn find_by_title(&self, title: &str) -> Result<Option<MainTopic>, RepositoryError>;
    /// 聚合查询：每个主题附带其下讨论数量（按标题关联的分组计数）。
    async fn list_with_discussion_counts(
        &self,
    ) -> Result<Vec<TopicWithDiscussionCount>, RepositoryError>;
}
