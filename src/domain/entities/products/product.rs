//! Product Entity Implementation

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 상품 엔티티
///
/// 관리자가 생성하고, 수정 시 문서가 그대로 갱신되며, 삭제 시 제거됩니다.
/// `title`은 카탈로그 전체에서 유일해야 합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    pub description: String,
    /// 단가
    pub price: f64,
    /// 재고 수량 (결제 시 차감되지 않음)
    pub quantity: i64,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl Product {
    pub fn new(title: String, description: String, price: f64, quantity: i64) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            title,
            description,
            price,
            quantity,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}
