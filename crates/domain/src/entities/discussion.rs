use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::Timestamp;

/// 主题下的讨论帖。`main_topic` 按标题引用所属主题，写入时不校验其存在。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discussion {
    pub id: Uuid,
    #[serde(rename = "mainTopic")]
    pub main_topic: String,
    pub username: String,
    pub title: String,
    pub description: String,
    pub created_at: Timestamp,
}

impl Discussion {
    pub fn create(
        id: Uuid,
        main_topic: String,
        username: String,
        title: String,
        description: String,
        now: Timestamp,
    ) -> Self {
        Self {
            id,
            main_topic,
            username,
            title,
            description,
            created_at: now,
        }
    }
}
