use serde::{Deserialize, Serialize};

pub mod endpoints;
pub mod position;
pub mod protocol;
pub mod translation;

pub use endpoints::{ApiConfig, Endpoint};
pub use position::{Position, Slot, available_slots, can_play_slot};
pub use translation::{Translations, translate_position, translate_team};

// =========================================================
// 常量定义 (Constants)
// =========================================================

/// 会话凭据在客户端持久化存储中的键
pub const STORAGE_TOKEN_KEY: &str = "token";
pub const HEADER_AUTHORIZATION: &str = "Authorization";
pub const BEARER_PREFIX: &str = "Bearer ";

/// 构造 `Authorization` 头的值
pub fn bearer(token: &str) -> String {
    format!("{}{}", BEARER_PREFIX, token)
}

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

/// 后端返回的用户信息 (`/api/auth/me`, 登录/注册响应中的 `user`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub confirm_password: String,
}

/// 登录与注册共用的成功响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub message: String,
    pub user: User,
    pub token: String,
}

/// 后端错误响应体 `{"error": "..."}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_header_value() {
        assert_eq!(bearer("abc.def"), "Bearer abc.def");
    }

    #[test]
    fn user_tolerates_missing_optional_fields() {
        let user: User = serde_json::from_str(r#"{"id": 7, "username": "yao"}"#).unwrap();
        assert_eq!(user.id, 7);
        assert_eq!(user.username, "yao");
        assert!(user.created_at.is_none());
    }

    #[test]
    fn auth_response_parses_backend_payload() {
        let body = r#"{"message":"登录成功","user":{"id":1,"username":"a"},"token":"t"}"#;
        let resp: AuthResponse = serde_json::from_str(body).unwrap();
        assert_eq!(resp.token, "t");
        assert_eq!(resp.user.username, "a");
    }
}
