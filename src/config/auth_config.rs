//! 인증 관련 설정 모듈
//!
//! JWT 액세스/리프레시 토큰, 사용자 역할, 관리자 계정 설정을 관리합니다.
//!
//! # 환경 변수
//!
//! ```bash
//! JWT_ACCESS_SECRET=change-me-access
//! JWT_REFRESH_SECRET=change-me-refresh
//! JWT_ACCESS_EXPIRATION_MINUTES=15
//! JWT_REFRESH_EXPIRATION_DAYS=7
//! ADMIN_EMAILS=admin@shop.example,owner@shop.example
//! ```

use std::env;
use serde::{Deserialize, Serialize};

/// JWT 토큰 설정
///
/// 액세스 토큰과 리프레시 토큰은 서로 다른 비밀키로 서명되므로
/// 한 종류의 토큰을 다른 용도로 재사용할 수 없습니다.
pub struct JwtConfig;

impl JwtConfig {
    pub fn access_secret() -> String {
        env::var("JWT_ACCESS_SECRET")
            .unwrap_or_else(|_| {
                log::warn!("JWT_ACCESS_SECRET not set, using default (not secure for production!)");
                "shop-access-secret".to_string()
            })
    }

    pub fn refresh_secret() -> String {
        env::var("JWT_REFRESH_SECRET")
            .unwrap_or_else(|_| {
                log::warn!("JWT_REFRESH_SECRET not set, using default (not secure for production!)");
                "shop-refresh-secret".to_string()
            })
    }

    pub fn access_expiration_minutes() -> i64 {
        env::var("JWT_ACCESS_EXPIRATION_MINUTES")
            .ok()
            .and_then(|minutes| minutes.parse().ok())
            .unwrap_or(15)
    }

    pub fn refresh_expiration_days() -> i64 {
        env::var("JWT_REFRESH_EXPIRATION_DAYS")
            .ok()
            .and_then(|days| days.parse().ok())
            .unwrap_or(7)
    }
}

/// 관리자 계정 설정
pub struct AdminConfig;

impl AdminConfig {
    /// 가입 시 `admin` 역할을 부여할 이메일 목록 (`ADMIN_EMAILS`, 쉼표 구분)
    pub fn emails() -> Vec<String> {
        env::var("ADMIN_EMAILS")
            .map(|raw| Self::parse_emails(&raw))
            .unwrap_or_default()
    }

    pub fn parse_emails(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(|email| email.trim().to_lowercase())
            .filter(|email| !email.is_empty())
            .collect()
    }

    pub fn is_admin_email(email: &str) -> bool {
        let email = email.trim().to_lowercase();
        Self::emails().iter().any(|admin| *admin == email)
    }
}

/// 사용자 역할
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// 일반 구매자
    User,
    /// 상품 카탈로그 관리자
    Admin,
}

impl Role {
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "user" => Ok(Role::User),
            "admin" => Ok(Role::Admin),
            _ => Err(format!("Unsupported role: {}", s)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }
}
