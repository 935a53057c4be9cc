//! 论坛与私信系统核心领域模型
//!
//! 包含用户、主题、讨论、回帖、私信等核心实体，以及仓储接口定义。

pub mod entities;
pub mod errors;
pub mod repositories;

// 重新导出常用类型
pub use entities::*;
pub use errors::*;
pub use repositories::*;

/// 统一的时间戳类型。
pub type Timestamp = chrono::DateTime<chrono::Utc>;
