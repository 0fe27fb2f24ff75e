//! 쇼핑몰 서비스 백엔드
//!
//! Rust 기반의 상품 카탈로그, 장바구니, 결제 서비스입니다.
//! JWT 토큰 기반 인증과 역할(user/admin) 기반 인가,
//! 그리고 싱글톤 매크로를 활용한 의존성 주입을 제공합니다.
//!
//! # Features
//!
//! - **상품 관리**: 공개 조회, 관리자 전용 등록/수정/삭제
//! - **장바구니**: 사용자별 장바구니 담기/수량 변경/삭제
//! - **결제**: 장바구니 합계 계산, 주문 기록, 거스름돈 반환
//! - **JWT 인증**: 액세스/리프레시 토큰, 리프레시 토큰 회전
//! - **싱글톤 DI**: 매크로 기반 자동 의존성 주입
//! - **MongoDB**: 데이터 영구 저장
//! - **Redis**: ID 기반 조회 캐싱
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리 (AuthMiddleware)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Store traits   │ ← 저장소 추상화
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← MongoDB + Redis
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use shop_service_backend::services::carts::CartService;
//!
//! let cart_service = CartService::instance();
//! let cart = cart_service.list_products_in_cart(&user_id).await?;
//! let order = cart_service.pay_products_in_cart(&user_id, 100.0).await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;
