use serde::{Deserialize, Serialize};
use validator::Validate;

/// 장바구니 상품 추가/수량 변경 요청
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CartQuantityRequest {
    #[validate(range(min = 1, max = 10000, message = "수량은 1 이상 10000 이하여야 합니다"))]
    pub quantity: i64,
}

/// 장바구니 결제 요청
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PaymentRequest {
    /// 사용자가 지불하는 금액
    #[validate(range(min = 0.0, message = "지불 금액은 0 이상이어야 합니다"))]
    pub money: f64,
}
