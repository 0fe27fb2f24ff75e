//! # 문자열 유틸리티
//!
//! 요청 값의 공백 정리와 필수 값 검증을 담당합니다.

use crate::errors::AppError;

/// 앞뒤 공백을 제거하고, 비어 있으면 `ValidationError`를 반환합니다.
pub fn validate_required_string(value: &str, field_name: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::ValidationError(
            format!("{}은(는) 필수입니다", field_name)
        ));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_required_string() {
        assert_eq!(validate_required_string("Keyboard", "title").unwrap(), "Keyboard");
        assert_eq!(validate_required_string("  Mouse  ", "title").unwrap(), "Mouse");

        assert!(validate_required_string("", "title").is_err());
        assert!(validate_required_string("\t\n", "title").is_err());
    }
}
