//! ObjectId 파싱 유틸리티

use mongodb::bson::oid::ObjectId;
use crate::errors::AppError;

/// 24자리 hex 문자열을 `ObjectId`로 변환합니다.
///
/// 형식이 잘못된 경우 조회를 시도하지 않고 400(`ValidationError`)으로 응답합니다.
pub fn parse_object_id(value: &str, field_name: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(value.trim()).map_err(|_| {
        AppError::ValidationError(format!("Invalid {} ID: {}", field_name, value))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_object_id() {
        let id = ObjectId::new();

        assert_eq!(parse_object_id(&id.to_hex(), "product").unwrap(), id);
    }

    #[test]
    fn test_parse_invalid_object_id() {
        let result = parse_object_id("not-an-id", "product");

        match result {
            Err(AppError::ValidationError(message)) => assert!(message.contains("product")),
            other => panic!("expected validation error, got {:?}", other),
        }
    }
}
