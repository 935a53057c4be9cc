use std::sync::Arc;

use domain::{Message, MessageRepository};
use futures_util::future::join_all;
use uuid::Uuid;

use crate::{clock::Clock, error::ApplicationError};

#[derive(Debug, Clone)]
pub struct SendMessageRequest {
    pub username_who_sends: String,
    pub username_who_gets: String,
    pub message: String,
}

pub struct MessageServiceDependencies {
    pub message_repository: Arc<dyn MessageRepository>,
    pub clock: Arc<dyn Clock>,
}

pub struct MessageService {
    deps: MessageServiceDependencies,
}

impl MessageService {
    pub fn new(deps: MessageServiceDependencies) -> Self {
        Self { deps }
    }

    pub async fn send(&self, request: SendMessageRequest) -> Result<Message, ApplicationError> {
        let message = Message::send(
            Uuid::new_v4(),
            request.username_who_sends,
            request.username_who_gets,
            request.message,
            self.deps.clock.now(),
        );
        Ok(self.deps.message_repository.insert(message).await?)
    }

    /// 拉取与 other_user 的会话，副作用在前：把对方发来的未读逐条置为已读。
    /// 每条更新独立落盘、无序等待，部分成功不回滚；全部完成后才报告
    /// 首个错误。重复拉取是幂等的（没有未读时无事发生）。
    pub async fn conversation(
        &self,
        other_user: &str,
        logged_in_user: &str,
    ) -> Result<Vec<Message>, ApplicationError> {
        let unread = self
            .deps
            .message_repository
            .list_unread(other_user, logged_in_user)
            .await?;

        let updates = unread
            .iter()
            .map(|message| self.deps.message_repository.mark_read(message.id));
        for outcome in join_all(updates).await {
            outcome?;
        }

        Ok(self
            .deps
            .message_repository
            .list_conversation(logged_in_user, other_user)
            .await?)
    }

    pub async fn list_all(&self) -> Result<Vec<Message>, ApplicationError> {
        Ok(self.deps.message_repository.list_all().await?)
    }
}
