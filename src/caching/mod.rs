//! 캐싱 계층 모듈
//!
//! Redis를 백엔드로 하는 read-through 캐시를 제공합니다.
//! 리포지토리는 ID 기반 조회 결과를 캐시하고, 쓰기 후 해당 키를 무효화합니다.
//!
//! # 캐시 키 규칙
//!
//! | 키 | 값 | TTL |
//! |----|----|-----|
//! | `product_repository:{id}` | 상품 문서 | 600초 |
//! | `user_repository:{id}` | 사용자 문서 | 600초 |
//!
//! # 환경 설정
//!
//! ```bash
//! REDIS_URL=redis://localhost:6379  # 기본값
//! ```

pub mod redis;
