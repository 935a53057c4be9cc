//! Web API 层。
//!
//! 提供 Axum 路由，把 HTTP 请求经校验链送入应用层的用例服务，
//! 所有响应统一包装为 {success, data, message}。

mod auth;
mod envelope;
mod routes;
mod state;
mod validation;

pub use auth::{AuthUser, Claims, JwtService, LoginData, TokenError};
pub use config::JwtConfig;
pub use envelope::Envelope;
pub use routes::router;
pub use state::AppState;
