//! Order Entity Implementation
//!
//! 금액 필드는 소수로 저장되지만 항상 센트 단위 정수 계산 결과에서 만들어집니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::utils::money_utils::{from_cents, to_cents};

/// 결제 시점의 상품 스냅샷
///
/// 이후 상품이 수정/삭제되어도 주문 내역은 변하지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: ObjectId,
    pub title: String,
    pub unit_price: f64,
    pub quantity: i64,
    /// `unit_price * quantity`
    pub subtotal: f64,
}

impl OrderItem {
    /// 소계가 `i64` 센트 범위를 넘으면 `None`을 반환합니다.
    pub fn new(product_id: ObjectId, title: String, unit_price: f64, quantity: i64) -> Option<Self> {
        let subtotal = to_cents(unit_price).checked_mul(quantity)?;

        Some(Self {
            product_id,
            title,
            unit_price,
            quantity,
            subtotal: from_cents(subtotal),
        })
    }

    fn subtotal_cents(&self) -> i64 {
        to_cents(self.subtotal)
    }
}

/// 주문 엔티티
///
/// 결제가 성공할 때마다 하나씩 생성되며 이후 수정되지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 외부 노출용 주문 번호 (UUID v4)
    pub order_number: String,
    pub user_id: ObjectId,
    pub items: Vec<OrderItem>,
    pub total: f64,
    /// 사용자가 지불한 금액
    pub paid: f64,
    /// 거스름돈 (`paid - total`). 지불 금액이 부족하면 음수입니다.
    pub change: f64,
    pub created_at: DateTime,
}

impl Order {
    /// 합계나 거스름돈이 `i64` 센트 범위를 넘으면 `None`을 반환합니다.
    pub fn new(user_id: ObjectId, items: Vec<OrderItem>, paid: f64) -> Option<Self> {
        let total = items
            .iter()
            .try_fold(0i64, |sum, item| sum.checked_add(item.subtotal_cents()))?;
        let paid = to_cents(paid);
        let change = paid.checked_sub(total)?;

        Some(Self {
            id: None,
            order_number: Uuid::new_v4().to_string(),
            user_id,
            items,
            total: from_cents(total),
            paid: from_cents(paid),
            change: from_cents(change),
            created_at: DateTime::now(),
        })
    }

    pub fn is_fully_paid(&self) -> bool {
        to_cents(self.change) >= 0
    }
}
