//! 인증 관련 서비스
//!
//! - [`TokenService`]: JWT 발급/검증, 리프레시 토큰 지문
//! - [`AuthService`]: 가입, 로그인, 토큰 갱신, 로그아웃

pub mod token_service;
pub mod auth_service;

pub use token_service::*;
pub use auth_service::*;
