//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use crate::config::Role;

/// 사용자 엔티티
///
/// 가입 시 생성되고 로그인/토큰 갱신/로그아웃 시 수정되며, 삭제되지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 사용자 이메일 (unique, 소문자로 저장)
    pub email: String,
    /// 사용자 이름
    pub username: String,
    /// bcrypt로 해시된 비밀번호
    pub password_hash: String,
    /// 사용자 역할 (`user`, `admin`)
    pub roles: Vec<String>,
    /// 현재 발급된 리프레시 토큰의 SHA-256 지문 (로그아웃 시 None)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token_hash: Option<String>,
    /// 계정 활성화 여부
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_login_at: Option<DateTime>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl User {
    /// 새 로컬 사용자를 생성합니다.
    ///
    /// 모든 사용자는 `user` 역할을 가지며, `is_admin`이면 `admin` 역할이 추가됩니다.
    pub fn new_local(email: String, username: String, password_hash: String, is_admin: bool) -> Self {
        let now = DateTime::now();

        let mut roles = vec![Role::User.as_str().to_string()];
        if is_admin {
            roles.push(Role::Admin.as_str().to_string());
        }

        Self {
            id: None,
            email: email.trim().to_lowercase(),
            username,
            password_hash,
            roles,
            refresh_token_hash: None,
            is_active: true,
            last_login_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.roles.iter().any(|r| r == role.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_local_user_defaults() {
        let user = User::new_local(
            " Buyer@Shop.Example ".to_string(),
            "buyer".to_string(),
            "hash".to_string(),
            false,
        );

        assert_eq!(user.email, "buyer@shop.example");
        assert!(user.is_active);
        assert!(user.id.is_none());
        assert!(user.refresh_token_hash.is_none());
        assert!(user.has_role(Role::User));
        assert!(!user.has_role(Role::Admin));
    }

    #[test]
    fn test_admin_user_has_both_roles() {
        let user = User::new_local("admin@shop.example".to_string(), "admin".to_string(), "hash".to_string(), true);

        assert_eq!(user.roles, vec!["user", "admin"]);
    }
}
