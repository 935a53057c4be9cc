use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 未设置头像时使用的默认图片。
pub const DEFAULT_AVATAR_URL: &str =
    "https://upload.wikimedia.org/wikipedia/commons/9/99/Sample_User_Icon.png";

/// 注册用户。
///
/// `password` 保存的是 bcrypt 摘要，不是明文。全量导出接口会原样
/// 序列化该字段。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub password: String,
    pub image: String,
    pub role: String,
}

impl User {
    /// 以默认头像注册新用户。
    pub fn register(id: Uuid, username: String, password: String, role: String) -> Self {
        Self {
            id,
            username,
            password,
            image: DEFAULT_AVATAR_URL.to_string(),
            role,
        }
    }

    pub fn set_image(&mut self, image: String) {
        self.image = image;
    }
}
