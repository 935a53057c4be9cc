//! 应用层实现。
//!
//! 这里提供围绕领域模型的用例服务，处理唯一性预检查、时间戳来源、
//! 以及对外部适配器（例如密码哈希）的抽象。

pub mod clock;
pub mod dto;
pub mod error;
pub mod password;
pub mod services;

pub use clock::{Clock, SystemClock};
pub use dto::DiscussionWithAnswers;
pub use error::ApplicationError;
pub use password::{PasswordHasher, PasswordHasherError};
pub use services::{
    ForumService, ForumServiceDependencies, MessageService, MessageServiceDependencies,
    UserService, UserServiceDependencies,
};
