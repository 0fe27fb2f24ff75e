//! # 주문 리포지토리 구현

use std::sync::Arc;
use async_trait::async_trait;
use mongodb::{bson::doc, options::IndexOptions, IndexModel};
use singleton_macro::repository;
use crate::{
    core::registry::Repository,
    db::Database,
    domain::entities::orders::order::Order,
    errors::{AppError, AppResult},
    repositories::stores::OrderStore,
};

/// 주문 데이터 액세스 리포지토리
///
/// - **컬렉션명**: `orders`
/// - **인덱스**: order_number(unique)
#[repository(name = "order", collection = "orders")]
pub struct OrderRepository {
    db: Arc<Database>,
}

impl OrderRepository {
    pub async fn create_indexes(&self) -> AppResult<()> {
        let order_number_index = IndexModel::builder()
            .keys(doc! { "order_number": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("order_number_unique".to_string())
                .build())
            .build();

        self.collection::<Order>()
            .create_index(order_number_index)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl OrderStore for OrderRepository {
    async fn insert(&self, mut order: Order) -> AppResult<Order> {
        let result = self.collection::<Order>()
            .insert_one(&order)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        order.id = result.inserted_id.as_object_id();

        Ok(order)
    }
}
