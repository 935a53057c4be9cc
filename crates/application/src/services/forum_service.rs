use std::sync::Arc;

use domain::{
    Discussion, DiscussionRepository, MainTopic, MainTopicRepository, Post, PostRepository,
    TopicWithDiscussionCount,
};
use futures_util::future::join_all;
use uuid::Uuid;

use crate::{clock::Clock, dto::DiscussionWithAnswers, error::ApplicationError};

#[derive(Debug, Clone)]
pub struct CreateTopicRequest {
    pub username: String,
    pub title: String,
}

#[derive(Debug, Clone)]
pub struct CreateDiscussionRequest {
    pub main_topic: String,
    pub username: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone)]
pub struct CreatePostRequest {
    pub discussion_id: Uuid,
    pub username: String,
    pub comment: String,
    pub image: Option<String>,
    pub video: Option<String>,
}

pub struct ForumServiceDependencies {
    pub topic_repository: Arc<dyn MainTopicRepository>,
    pub discussion_repository: Arc<dyn DiscussionRepository>,
    pub post_repository: Arc<dyn PostRepository>,
    pub clock: Arc<dyn Clock>,
}

pub struct ForumService {
    deps: ForumServiceDependencies,
}

impl ForumService {
    pub fn new(deps: ForumServiceDependencies) -> Self {
        Self { deps }
    }

    /// 主题标题唯一性靠写入前检查，存储层无约束（保留的已知竞态）。
    pub async fn create_topic(
        &self,
        request: CreateTopicRequest,
    ) -> Result<MainTopic, ApplicationError> {
        if self
            .deps
            .topic_repository
            .find_by_title(&request.title)
            .await?
            .is_some()
        {
            return Err(ApplicationError::TopicAlreadyExists);
        }

        let topic = MainTopic::create(
            Uuid::new_v4(),
            request.username,
            request.title,
            self.deps.clock.now(),
        );
        Ok(self.deps.topic_repository.insert(topic).await?)
    }

    pub async fn topics_with_counts(
        &self,
    ) -> Result<Vec<TopicWithDiscussionCount>, ApplicationError> {
        Ok(self
            .deps
            .topic_repository
            .list_with_discussion_counts()
            .await?)
    }

    pub async fn create_discussion(
        &self,
        request: CreateDiscussionRequest,
    ) -> Result<Discussion, ApplicationError> {
        if self
            .deps
            .discussion_repository
            .find_by_title(&request.title)
            .await?
            .is_some()
        {
            return Err(ApplicationError::DiscussionAlreadyExists);
        }

        let discussion = Discussion::create(
            Uuid::new_v4(),
            request.main_topic,
            request.username,
            request.title,
            request.description,
            self.deps.clock.now(),
        );
        Ok(self.deps.discussion_repository.insert(discussion).await?)
    }

    /// 主题下的讨论列表，每条讨论再单独拉取自己的回帖。
    /// 回帖查询逐条发起、无序等待，成员之间没有顺序或原子性保证。
    pub async fn discussions_with_answers(
        &self,
        topic_title: &str,
    ) -> Result<Vec<DiscussionWithAnswers>, ApplicationError> {
        let discussions = self
            .deps
            .discussion_repository
            .list_by_main_topic(topic_title)
            .await?;

        let lookups = discussions
            .iter()
            .map(|discussion| self.deps.post_repository.list_by_discussion(discussion.id));
        let answer_lists = join_all(lookups).await;

        let mut result = Vec::with_capacity(discussions.len());
        for (discussion, answers) in discussions.into_iter().zip(answer_lists) {
            result.push(DiscussionWithAnswers {
                discussion,
                answers: answers?,
            });
        }
        Ok(result)
    }

    /// 追加回帖。所属讨论是否存在不做校验（写入时约定）。
    pub async fn create_post(&self, request: CreatePostRequest) -> Result<Post, ApplicationError> {
        let post = Post::create(
            Uuid::new_v4(),
            request.discussion_id,
            request.username,
            request.comment,
            request.image,
            request.video,
            self.deps.clock.now(),
        );
        Ok(self.deps.post_repository.insert(post).await?)
    }

    pub async fn posts_for_discussion(
        &self,
        discussion_id: Uuid,
    ) -> Result<Vec<Post>, ApplicationError> {
        Ok(self
            .deps
            .post_repository
            .list_by_discussion(discussion_id)
            .await?)
    }

    pub async fn list_all_discussions(&self) -> Result<Vec<Discussion>, ApplicationError> {
        Ok(self.deps.discussion_repository.list_all().await?)
    }

    pub async fn list_all_posts(&self) -> Result<Vec<Post>, ApplicationError> {
        Ok(self.deps.post_repository.list_all().await?)
    }
}
