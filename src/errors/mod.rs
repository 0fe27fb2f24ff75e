//! 에러 처리 모듈
//!
//! [`AppError`](errors::AppError)와 모듈 라벨 기반 에러 로깅 헬퍼를 제공합니다.

pub mod errors;

pub use errors::*;
