//! # 장바구니 리포지토리 구현
//!
//! 장바구니는 사용자 요청마다 바뀌므로 캐싱하지 않습니다.

use std::sync::Arc;
use async_trait::async_trait;
use mongodb::{bson::{doc, oid::ObjectId}, options::IndexOptions, IndexModel};
use singleton_macro::repository;
use crate::{
    core::registry::Repository,
    db::Database,
    domain::entities::carts::cart::Cart,
    errors::{AppError, AppResult},
    repositories::stores::CartStore,
};

/// 장바구니 데이터 액세스 리포지토리
///
/// - **컬렉션명**: `carts`
/// - **인덱스**: user_id(unique)
#[repository(name = "cart", collection = "carts")]
pub struct CartRepository {
    db: Arc<Database>,
}

impl CartRepository {
    pub async fn create_indexes(&self) -> AppResult<()> {
        let user_index = IndexModel::builder()
            .keys(doc! { "user_id": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("user_id_unique".to_string())
                .build())
            .build();

        self.collection::<Cart>()
            .create_index(user_index)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl CartStore for CartRepository {
    async fn find_by_user(&self, user_id: &ObjectId) -> AppResult<Option<Cart>> {
        self.collection::<Cart>()
            .find_one(doc! { "user_id": *user_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn save(&self, mut cart: Cart) -> AppResult<Cart> {
        let result = self.collection::<Cart>()
            .replace_one(doc! { "user_id": cart.user_id }, &cart)
            .upsert(true)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if cart.id.is_none() {
            cart.id = result.upserted_id.as_ref().and_then(|id| id.as_object_id());
        }

        Ok(cart)
    }
}
