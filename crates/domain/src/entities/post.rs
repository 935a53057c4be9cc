use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::Timestamp;

/// 讨论内的回帖（answer）。只追加，不修改，不删除。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    #[serde(rename = "discussionTheme")]
    pub discussion_id: Uuid,
    pub username: String,
    pub comment: String,
    pub image: Option<String>,
    pub video: Option<String>,
    pub created_at: Timestamp,
}

impl Post {
    pub fn create(
        id: Uuid,
        discussion_id: Uuid,
        username: String,
        comment: String,
        image: Option<String>,
        video: Option<String>,
        now: Timestamp,
    ) -> Self {
        Self {
            id,
            discussion_id,
            username,
            comment,
            image,
            video,
            created_at: now,
        }
    }
}
