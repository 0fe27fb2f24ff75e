//! 미들웨어 모듈
//!
//! ActixWeb 애플리케이션의 요청 처리 파이프라인에서 사용되는 미들웨어들을 제공합니다.
//!
//! # 제공 미들웨어
//!
//! ### 인증 미들웨어 (AuthMiddleware)
//! - `Authorization: Bearer <token>` 헤더의 액세스 토큰 검증
//! - 사용자 정보를 request extension에 저장
//! - 선택적/강제 인증 모드, 단일/복수 역할 요구 지원
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::post;
//! use crate::middlewares::AuthMiddleware;
//!
//! #[post("/products", wrap = "AuthMiddleware::admin()")]
//! async fn create_product(/* ... */) -> Result<HttpResponse, AppError> { /* ... */ }
//! ```
//!
//! 리프레시 토큰은 이 미들웨어로 검증하지 않습니다. 갱신 핸들러가 직접
//! 리프레시 비밀키로 검증합니다.

pub mod auth_middleware;
mod auth_inner;

pub use auth_middleware::AuthMiddleware;
