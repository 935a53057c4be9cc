use std::sync::Arc;

use application::{ForumService, MessageService, UserService};

use crate::JwtService;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService>,
    pub forum_service: Arc<ForumService>,
    pub message_service: Arc<MessageService>,
    pub jwt_service: Arc<JwtService>,
}

impl AppState {
    pub fn new(
        user_service: Arc<UserService>,
        forum_service: Arc<ForumService>,
        message_service: Arc<MessageService>,
        jwt_service: Arc<JwtService>,
    ) -> Self {
        Self {
            user_service,
            forum_service,
            message_service,
            jwt_service,
        }
    }
}
