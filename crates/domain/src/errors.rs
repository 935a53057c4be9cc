//! 仓储层错误定义

use thiserror::Error;

/// 仓储操作错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// 底层存储故障（连接、查询、反序列化）
    #[error("storage error: {message}")]
    Storage { message: String },
}

impl RepositoryError {
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }
}
