use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::Timestamp;

/// 论坛顶层主题。标题的唯一性由写入前检查保证，存储层不设约束。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MainTopic {
    pub id: Uuid,
    pub username: String,
    pub title: String,
    pub created_at: Timestamp,
}

impl MainTopic {
    pub fn create(id: Uuid, username: String, title: String, now: Timestamp) -> Self {
        Self {
            id,
            username,
            title,
            created_at: now,
        }
    }
}

/// 主题列表的读模型：附带其下讨论数量（分组计数聚合结果）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicWithDiscussionCount {
    pub id: Uuid,
    pub username: String,
    pub title: String,
    pub created_at: Timestamp,
    #[serde(rename = "discussionsCount")]
    pub discussions_count: i64,
}
