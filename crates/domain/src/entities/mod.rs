pub mod discussion;
pub mod message;
pub mod post;
pub mod topic;
pub mod user;

pub use discussion::Discussion;
pub use message::Message;
pub use post::Post;
pub use topic::{MainTopic, TopicWithDiscussionCount};
pub use user::{User, DEFAULT_AVATAR_URL};
