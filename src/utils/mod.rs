//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`string_utils`] - 필수 문자열 검증
//! - [`id_utils`] - 경로 파라미터의 ObjectId 파싱
//! - [`money_utils`] - 센트 단위 금액 변환
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::{id_utils::parse_object_id, string_utils::validate_required_string};
//!
//! let title = validate_required_string("  Keyboard  ", "title")?;
//! let product_id = parse_object_id("64f0c2a1b2c3d4e5f6a7b8c9", "product")?;
//! ```

pub mod string_utils;
pub mod id_utils;
pub mod money_utils;
