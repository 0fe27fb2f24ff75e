use serde::{Deserialize, Serialize};
use validator::Validate;

/// 상품 생성 요청
///
/// `title`은 서비스 계층에서 앞뒤 공백이 제거된 뒤 중복 검사에 사용됩니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, max = 200, message = "상품명은 1-200자 사이여야 합니다"))]
    pub title: String,

    #[serde(default)]
    #[validate(length(max = 2000, message = "상품 설명은 2000자 이하여야 합니다"))]
    pub description: String,

    #[validate(range(min = 0.0, message = "가격은 0 이상이어야 합니다"))]
    pub price: f64,

    #[validate(range(min = 0, message = "재고 수량은 0 이상이어야 합니다"))]
    pub quantity: i64,
}

/// 상품 부분 수정 요청
///
/// 값이 있는 필드만 기존 문서에 덮어씁니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateProductRequest {
    #[validate(length(min = 1, max = 200, message = "상품명은 1-200자 사이여야 합니다"))]
    pub title: Option<String>,

    #[validate(length(max = 2000, message = "상품 설명은 2000자 이하여야 합니다"))]
    pub description: Option<String>,

    #[validate(range(min = 0.0, message = "가격은 0 이상이어야 합니다"))]
    pub price: Option<f64>,

    #[validate(range(min = 0, message = "재고 수량은 0 이상이어야 합니다"))]
    pub quantity: Option<i64>,
}
