//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! Spring Framework의 `@Configuration` 클래스와 유사한 역할을 수행하며,
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 데이터베이스, 서버, 환경, 비밀번호 해싱 설정
//! - [`auth_config`] - JWT, 역할, 관리자 계정 설정
//! - [`app_config`] - 라우트 접두사, Rate Limiting, CORS 설정
//!
//! ## 설정 파일 로드
//!
//! `main`에서 `PROFILE` 환경 변수에 따라 `.env.dev` / `.env.prod` / `.env`를 로드한 뒤
//! 각 설정 구조체가 필요한 시점에 환경 변수를 읽습니다.
//!
//! ```rust,ignore
//! use crate::config::{AppConfig, JwtConfig, ServerConfig};
//!
//! let bind = ServerConfig::bind_address();
//! let cart_scope = AppConfig::scoped("/cart");
//! let ttl = JwtConfig::access_expiration_minutes();
//! ```

pub mod data_config;
pub mod auth_config;
pub mod app_config;

pub use data_config::*;
pub use auth_config::*;
pub use app_config::*;
