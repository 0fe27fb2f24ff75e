//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 핵심 모듈로, 비즈니스 데이터와 도메인 규칙을 담당합니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities     - MongoDB 문서 (User, Product, Cart, Order)
//! ├── DTOs         - 데이터 전송 객체 (Request/Response)
//! └── Models       - 인증 주체, JWT 클레임
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB, Cache)
//! ```
//!
//! 도메인 계층은 서비스/리포지토리에 의존하지 않습니다.
//! 엔티티는 자신의 상태를 바꾸는 작은 메서드(예: [`Cart::add_quantity`](entities::carts::cart::Cart::add_quantity))만
//! 가지며, 저장과 조회는 리포지토리의 몫입니다.

pub mod entities;
pub mod dto;
pub mod models;
