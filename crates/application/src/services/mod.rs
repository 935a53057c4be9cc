mod forum_service;
mod message_service;
mod user_service;

pub use forum_service::{
    CreateDiscussionRequest, CreatePostRequest, CreateTopicRequest, ForumService,
    ForumServiceDependencies,
};
pub use message_service::{MessageService, MessageServiceDependencies, SendMessageRequest};
pub use user_service::{
    AuthenticateUserRequest, RegisterUserRequest, UserService, UserServiceDependencies,
};
