//! JWT 认证模块
//!
//! 提供 JWT token 生成、验证，以及基于 Authorization 头的请求身份提取。

use axum::{
    extract::FromRequestParts,
    http::request::Parts,
    response::{IntoResponse, Response},
    Json,
};
use config::JwtConfig;
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{envelope::Envelope, state::AppState};

/// JWT Claims 结构
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub username: String,
    pub exp: i64, // 过期时间 (Unix timestamp)
}

/// 令牌校验失败的两种形态，对应不同的用户文案。
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("token expired")]
    Expired,
    #[error("invalid token")]
    Invalid,
}

/// JWT Token 服务
#[derive(Clone)]
pub struct JwtService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_ref());
        let decoding_key = DecodingKey::from_secret(config.secret.as_ref());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    /// 生成 JWT token
    pub fn generate_token(&self, username: &str) -> Result<String, jsonwebtoken::errors::Error> {
        let now = chrono::Utc::now();
        let exp = now + chrono::Duration::hours(self.config.expiration_hours);

        let claims = Claims {
            username: username.to_owned(),
            exp: exp.timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
    }

    /// 验证并解析 JWT token，过期与其他失败分开上报
    pub fn verify_token(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .map(|token_data| token_data.claims)
            .map_err(|err| match err.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid,
            })
    }
}

/// 登录响应结构
#[derive(Debug, Serialize)]
pub struct LoginData {
    pub token: String,
    pub username: String,
    pub image: String,
    pub role: String,
}

/// 已通过令牌校验的请求身份。
///
/// Authorization 头原样携带裸令牌（无 Bearer 前缀），校验失败时
/// 短路整条处理链，返回统一的失败包装。
#[derive(Debug)]
pub struct AuthUser {
    pub username: String,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = TokenRejection;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|header| header.to_str().ok())
            .ok_or(TokenRejection)?;

        let claims = state
            .jwt_service
            .verify_token(token)
            .map_err(|_| TokenRejection)?;

        Ok(AuthUser {
            username: claims.username,
        })
    }
}

/// 令牌校验失败仍然回 200，只在包装里报失败。
#[derive(Debug)]
pub struct TokenRejection;

impl IntoResponse for TokenRejection {
    fn into_response(self) -> Response {
        Json(Envelope::<()>::fail("Wrong validation token.")).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(expiration_hours: i64) -> JwtService {
        JwtService::new(JwtConfig {
            secret: "unit-test-secret-key-not-for-production".to_string(),
            expiration_hours,
        })
    }

    #[test]
    fn token_roundtrip_preserves_username() {
        let jwt = service(1);
        let token = jwt.generate_token("alice").unwrap();
        let claims = jwt.verify_token(&token).unwrap();
        assert_eq!(claims.username, "alice");
    }

    #[test]
    fn expired_token_reports_expired() {
        // 负的有效期直接生成已过期的令牌
        let jwt = service(-2);
        let token = jwt.generate_token("alice").unwrap();
        assert_eq!(jwt.verify_token(&token).unwrap_err(), TokenError::Expired);
    }

    #[test]
    fn garbage_token_reports_invalid() {
        let jwt = service(1);
        assert_eq!(
            jwt.verify_token("not-a-token").unwrap_err(),
            TokenError::Invalid
        );
    }

    #[test]
    fn wrong_secret_reports_invalid() {
        let token = service(1).generate_token("alice").unwrap();
        let other = JwtService::new(JwtConfig {
            secret: "a-different-secret-key-entirely-here".to_string(),
            expiration_hours: 1,
        });
        assert_eq!(other.verify_token(&token).unwrap_err(), TokenError::Invalid);
    }
}
