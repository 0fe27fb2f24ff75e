//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 데이터를 전송하기 위한 객체들을 정의하는 모듈입니다.
//!
//! | 구분 | 역할 |
//! |------|------|
//! | `request` | HTTP 요청 본문 매핑 + `validator` 검증 |
//! | `response` | HTTP 응답 본문 매핑 (ObjectId → hex, 시간 → RFC 3339) |
//!
//! ## 모듈 구조
//!
//! ```text
//! dto/
//! ├── auth/       # 가입, 로그인, 토큰 응답
//! ├── products/   # 상품 생성/수정, 상품 응답
//! └── carts/      # 장바구니 수량/결제 요청, 장바구니/주문 응답
//! ```
//!
//! ## 응답 봉투
//!
//! 문서를 반환하는 모든 성공 응답은 [`DataResponse`]로 감싸집니다.
//!
//! ```json
//! { "data": { "id": "64f0c2...", "title": "Keyboard", ... } }
//! ```

pub mod auth;
pub mod products;
pub mod carts;

pub use auth::*;
pub use products::*;
pub use carts::*;

use mongodb::bson::DateTime;
use serde::Serialize;

/// 성공 응답 봉투 `{ "data": ... }`
#[derive(Debug, Clone, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// BSON 시간을 RFC 3339 문자열로 변환합니다. 표현 범위를 벗어나면 빈 문자열입니다.
pub(crate) fn format_datetime(value: &DateTime) -> String {
    value.try_to_rfc3339_string().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_data_envelope_shape() {
        let body = serde_json::to_value(DataResponse::new(vec![1, 2])).unwrap();

        assert_eq!(body, json!({ "data": [1, 2] }));
    }

    #[test]
    fn test_format_datetime_is_rfc3339() {
        let formatted = format_datetime(&DateTime::from_millis(0));

        assert!(formatted.starts_with("1970-01-01T00:00:00"));
    }
}
