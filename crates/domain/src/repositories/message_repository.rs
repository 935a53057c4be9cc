use async_trait::async_trait;
use uuid::Uuid;

use crate::{Message, RepositoryError};

#[async_trait]
pub trait MessageRepository: Send + Sync {
    async fn insert(&self, message: Message) -> Result<Message, RepositoryError>;

    /// sender 发给 recipient 且仍未读的私信。
    async fn list_unread(
        &self,
        sender: &str,
        recipient: &str,
    ) -> Result<Vec<Message>, RepositoryError>;

    /// 单条记录的已读落盘。批量标记由调用方逐条发起，互相独立。
    async fn mark_read(&self, id: Uuid) -> Result<(), RepositoryError>;

    /// 两个用户之间的完整双向会话，按创建时间升序。
    async fn list_conversation(
        &self,
        user_a: &str,
        user_b: &str,
    ) -> Result<Vec<Message>, RepositoryError>;

    async fn list_all(&self) -> Result<Vec<Message>, RepositoryError>;
}
