//! Cart Entity Implementation

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 장바구니 항목 하나에 담을 수 있는 최대 수량
pub const MAX_ITEM_QUANTITY: i64 = 10_000;

/// 장바구니 항목
///
/// 상품 정보는 복사하지 않고 ID만 보관하며, 결제 시점에 최신 상품 정보를 조회합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub product_id: ObjectId,
    pub quantity: i64,
}

/// 사용자 장바구니 엔티티
///
/// 사용자당 최대 하나이며, 결제가 끝나면 항목이 비워집니다.
/// 같은 `product_id`를 가진 항목은 두 개 이상 존재하지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub user_id: ObjectId,
    #[serde(default)]
    pub items: Vec<CartItem>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl Cart {
    pub fn new(user_id: ObjectId) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            user_id,
            items: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// 상품 수량을 더하고 합산된 수량을 반환합니다. 항목이 없으면 새로 추가합니다.
    ///
    /// 합계가 [`MAX_ITEM_QUANTITY`]를 넘으면 장바구니를 바꾸지 않고 `None`을 반환합니다.
    pub fn add_quantity(&mut self, product_id: ObjectId, quantity: i64) -> Option<i64> {
        let existing = self.items.iter_mut().find(|item| item.product_id == product_id);
        let current = existing.as_ref().map_or(0, |item| item.quantity);

        let total = current
            .checked_add(quantity)
            .filter(|total| (1..=MAX_ITEM_QUANTITY).contains(total))?;

        match existing {
            Some(item) => item.quantity = total,
            None => self.items.push(CartItem { product_id, quantity: total }),
        }
        self.touch();
        Some(total)
    }

    /// 기존 항목의 수량을 교체합니다. 항목이 없으면 `false`를 반환합니다.
    pub fn set_quantity(&mut self, product_id: &ObjectId, quantity: i64) -> bool {
        let Some(item) = self.items.iter_mut().find(|item| &item.product_id == product_id) else {
            return false;
        };

        item.quantity = quantity;
        self.touch();
        true
    }

    /// 항목을 제거합니다. 항목이 없으면 `false`를 반환합니다.
    pub fn remove_item(&mut self, product_id: &ObjectId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| &item.product_id != product_id);

        let removed = self.items.len() != before;
        if removed {
            self.touch();
        }
        removed
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.touch();
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn touch(&mut self) {
        self.updated_at = DateTime::now();
    }
}
