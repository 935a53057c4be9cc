pub mod discussion_repository_impl;
pub mod message_repository_impl;
pub mod post_repository_impl;
pub mod topic_repository_impl;
pub mod user_repository_impl;

pub use discussion_repository_impl::PgDiscussionRepository;
pub use message_repository_impl::PgMessageRepository;
pub use post_repository_impl::PgPostRepository;
pub use topic_repository_impl::PgMainTopicRepository;
pub use user_repository_impl::PgUserRepository;
