//! HTTP Request Handlers
//!
//! 각 핸들러는 요청 DTO를 검증하고 [`inject::Inject`]로 받은 서비스에 위임한 뒤,
//! 결과를 `{ "data": ... }` 봉투에 담아 반환합니다.
//! 실패는 [`AppError`](crate::errors::AppError)가 상태 코드와 JSON 본문으로 변환합니다.
//!
//! # Modules
//!
//! - [`inject`] - 서비스 추출자 (앱 데이터 우선, 없으면 싱글톤)
//! - [`auth`] - 가입, 로그인, 토큰 갱신, 로그아웃, 내 정보
//! - [`products`] - 상품 카탈로그 (조회 공개, 변경은 관리자)
//! - [`carts`] - 장바구니와 결제

pub mod inject;
pub mod auth;
pub mod products;
pub mod carts;
