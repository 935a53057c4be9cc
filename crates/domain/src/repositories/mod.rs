pub mod discussion_repository;
pub mod message_repository;
pub mod post_repository;
pub mod topic_repository;
pub mod user_repository;

pub use discussion_repository::DiscussionRepository;
pub use message_repository::MessageRepository;
pub use post_repository::PostRepository;
pub use topic_repository::MainTopicRepository;
pub use user_repository::UserRepository;
