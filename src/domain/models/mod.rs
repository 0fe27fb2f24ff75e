//! # Domain Models Module
//!
//! 영속화되지 않는 도메인 모델을 정의합니다.
//!
//! - [`auth`]: 미들웨어가 요청 확장(extensions)에 저장하는 인증 주체와 인증 모드
//! - [`token`]: JWT 클레임과 발급된 토큰 쌍
//!
//! 엔티티와 달리 MongoDB 문서와 매핑되지 않으며, 요청 단위로 생성되고 사라집니다.

pub mod auth;
pub mod token;

pub use auth::*;
pub use token::*;
