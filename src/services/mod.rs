//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! `#[service]` 매크로를 사용하여 싱글톤으로 관리되는 서비스들을 제공합니다.
//! 서비스는 [`stores`](crate::repositories::stores)의 trait 핸들에만 의존하므로
//! 테스트에서는 메모리 저장소를 주입해 MongoDB 없이 검증합니다.
//!
//! # Features
//!
//! - 상품 카탈로그 관리 (생성, 조회, 수정, 삭제)
//! - 사용자별 장바구니와 결제
//! - 이메일/비밀번호 인증과 JWT 토큰 회전
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::{carts::CartService, products::ProductService};
//!
//! let product_service = ProductService::instance();
//! let cart_service = CartService::instance();
//! ```

pub mod auth;
pub mod products;
pub mod carts;
