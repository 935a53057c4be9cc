use std::sync::Arc;

use domain::{User, UserRepository};
use uuid::Uuid;

use crate::{error::ApplicationError, password::PasswordHasher};

#[derive(Debug, Clone)]
pub struct RegisterUserRequest {
    pub username: String,
    pub password: String,
    pub role: String,
}

#[derive(Debug, Clone)]
pub struct AuthenticateUserRequest {
    pub username: String,
    pub password: String,
}

pub struct UserServiceDependencies {
    pub user_repository: Arc<dyn UserRepository>,
    pub password_hasher: Arc<dyn PasswordHasher>,
}

pub struct UserService {
    deps: UserServiceDependencies,
}

impl UserService {
    pub fn new(deps: UserServiceDependencies) -> Self {
        Self { deps }
    }

    /// 注册新用户。用户名唯一性靠写入前检查，并发重复注册存在已知窗口。
    pub async fn register(&self, request: RegisterUserRequest) -> Result<(), ApplicationError> {
        if self
            .deps
            .user_repository
            .find_by_username(&request.username)
            .await?
            .is_some()
        {
            return Err(ApplicationError::UsernameTaken);
        }

        let digest = self.deps.password_hasher.hash(&request.password).await?;
        let user = User::register(Uuid::new_v4(), request.username, digest, request.role);
        self.deps.user_repository.insert(user).await?;
        Ok(())
    }

    /// 未知用户与密码不匹配折叠为同一个认证失败，避免泄露用户是否存在。
    pub async fn authenticate(
        &self,
        request: AuthenticateUserRequest,
    ) -> Result<User, ApplicationError> {
        let user = self
            .deps
            .user_repository
            .find_by_username(&request.username)
            .await?
            .ok_or(ApplicationError::Authentication)?;

        let password_ok = self
            .deps
            .password_hasher
            .verify(&request.password, &user.password)
            .await?;
        if !password_ok {
            return Err(ApplicationError::Authentication);
        }

        Ok(user)
    }

    /// 自动登录时确认令牌中的用户仍然存在。
    pub async fn profile(&self, username: &str) -> Result<User, ApplicationError> {
        self.deps
            .user_repository
            .find_by_username(username)
            .await?
            .ok_or(ApplicationError::UserNotFound)
    }

    pub async fn update_image(
        &self,
        username: &str,
        image: &str,
    ) -> Result<User, ApplicationError> {
        self.deps
            .user_repository
            .update_image(username, image)
            .await?
            .ok_or(ApplicationError::UserNotFound)
    }

    /// 全量导出，不做投影，密码摘要随记录一起返回。
    pub async fn list_all(&self) -> Result<Vec<User>, ApplicationError> {
        Ok(self.deps.user_repository.list_all().await?)
    }
}
