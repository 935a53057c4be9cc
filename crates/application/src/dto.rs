use domain::{Discussion, Post};
use serde::Serialize;

/// 讨论及其全部回帖，序列化时讨论字段平铺、回帖挂在 `answers` 键下
/// （对外的展开形式）。
#[derive(Debug, Clone, Serialize)]
pub struct DiscussionWithAnswers {
    #[serde(flatten)]
    pub discussion: Discussion,
    pub answers: Vec<Post>,
}
