//! 基础设施层：PostgreSQL 仓储实现与密码哈希适配器。

pub mod db;
pub mod password;

pub use db::repositories::{
    PgDiscussionRepository, PgMainTopicRepository, PgMessageRepository, PgPostRepository,
    PgUserRepository,
};
pub use db::{Db, DbPool};
pub use password::BcryptPasswordHasher;
