//! # Domain Entities Module
//!
//! MongoDB 컬렉션과 1:1로 매핑되는 문서 구조체들을 정의합니다.
//!
//! ```text
//! Domain Layer
//! ├── entities/     ← 이 모듈 (컬렉션 문서)
//! ├── models/       ← 인증 주체, 토큰 클레임
//! └── dto/          ← 요청/응답 데이터 전송 객체
//! ```
//!
//! | 엔티티 | 컬렉션 | 유니크 키 |
//! |--------|--------|-----------|
//! | [`User`](users::user::User) | `users` | `email` |
//! | [`Product`](products::product::Product) | `products` | `title` |
//! | [`Cart`](carts::cart::Cart) | `carts` | `user_id` |
//! | [`Order`](orders::order::Order) | `orders` | `order_number` |
//!
//! 엔티티 간 불변식(재고 차감 등)은 원자적으로 보장되지 않으며,
//! 각 변경은 독립적인 단일 문서 쓰기입니다.

pub mod users;
pub mod products;
pub mod carts;
pub mod orders;
