use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::Timestamp;

/// 用户间私信。`unread_message` 在收件人首次拉取会话时翻转为 false，
/// 之后记录不再变化。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    #[serde(rename = "usernameWhoSends")]
    pub username_who_sends: String,
    #[serde(rename = "usernameWhoGets")]
    pub username_who_gets: String,
    pub message: String,
    #[serde(rename = "unreadMessage")]
    pub unread_message: bool,
    pub created_at: Timestamp,
}

impl Message {
    /// 新私信默认未读。
    pub fn send(
        id: Uuid,
        username_who_sends: String,
        username_who_gets: String,
        message: String,
        now: Timestamp,
    ) -> Self {
        Self {
            id,
            username_who_sends,
            username_who_gets,
            message,
            unread_message: true,
            created_at: now,
        }
    }

    pub fn mark_read(&mut self) {
        self.unread_message = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_message_starts_unread() {
        let msg = Message::send(
            Uuid::new_v4(),
            "alice".into(),
            "bob".into(),
            "hi".into(),
            chrono::Utc::now(),
        );
        assert!(msg.unread_message);
    }

    #[test]
    fn wire_field_names_match_api_contract() {
        let msg = Message::send(
            Uuid::new_v4(),
            "alice".into(),
            "bob".into(),
            "hi".into(),
            chrono::Utc::now(),
        );
        let value = serde_json::to_value(&msg).unwrap();
        assert_eq!(value["usernameWhoSends"], "alice");
        assert_eq!(value["usernameWhoGets"], "bob");
        assert_eq!(value["unreadMessage"], true);
        assert!(value.get("created_at").is_some());
    }
}
