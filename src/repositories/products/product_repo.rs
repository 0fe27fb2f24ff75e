//! # 상품 리포지토리 구현
//!
//! 상품 엔티티의 데이터 액세스 계층을 담당하는 리포지토리입니다.
//! MongoDB를 주 저장소로 사용하고, ID 기반 조회 결과를 Redis에 캐싱합니다.
//!
//! ## 캐싱 전략
//!
//! - **키 패턴**: `product_repository:{id}`
//! - **TTL**: 10분 (600초)
//! - **무효화**: 교체/삭제 성공 시 해당 키 삭제
//!
//! 상품 목록과 상품명 조회는 캐싱하지 않습니다.

use std::sync::Arc;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{bson::{doc, oid::ObjectId}, options::IndexOptions, IndexModel};
use singleton_macro::repository;
use crate::{
    caching::redis::RedisClient,
    core::registry::Repository,
    db::Database,
    domain::entities::products::product::Product,
    errors::{AppError, AppResult},
    repositories::{is_duplicate_key, stores::ProductStore},
};

const CACHE_TTL_SECONDS: u64 = 600;

/// 상품 데이터 액세스 리포지토리
///
/// - **컬렉션명**: `products`
/// - **인덱스**: title(unique), created_at(desc)
#[repository(name = "product", collection = "products")]
pub struct ProductRepository {
    db: Arc<Database>,
    redis: Arc<RedisClient>,
}

impl ProductRepository {
    /// 데이터베이스 인덱스 생성
    ///
    /// 상품명 유니크 인덱스는 "조회 후 삽입" 사이의 경쟁 상태에서도
    /// 중복 문서가 생기지 않도록 막아 줍니다. 위반 시 삽입은 `ConflictError`가 됩니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let collection = self.collection::<Product>();

        let title_index = IndexModel::builder()
            .keys(doc! { "title": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("title_unique".to_string())
                .build())
            .build();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(IndexOptions::builder()
                .name("created_at_desc".to_string())
                .build())
            .build();

        collection
            .create_indexes([title_index, created_at_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    fn conflict_or_database_error(error: mongodb::error::Error) -> AppError {
        if is_duplicate_key(&error) {
            AppError::ConflictError("Product already exists".to_string())
        } else {
            AppError::DatabaseError(error.to_string())
        }
    }
}

#[async_trait]
impl ProductStore for ProductRepository {
    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<Product>> {
        let cache_key = self.cache_key(&id.to_hex());

        if let Ok(Some(cached)) = self.redis.get::<Product>(&cache_key).await {
            return Ok(Some(cached));
        }

        let product = self.collection::<Product>()
            .find_one(doc! { "_id": *id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if let Some(ref product) = product {
            let _ = self.redis
                .set_with_expiry(&cache_key, product, CACHE_TTL_SECONDS)
                .await;
        }

        Ok(product)
    }

    async fn find_by_title(&self, title: &str) -> AppResult<Option<Product>> {
        self.collection::<Product>()
            .find_one(doc! { "title": title })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_all(&self) -> AppResult<Vec<Product>> {
        let cursor = self.collection::<Product>()
            .find(doc! {})
            .sort(doc! { "created_at": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn insert(&self, mut product: Product) -> AppResult<Product> {
        let result = self.collection::<Product>()
            .insert_one(&product)
            .await
            .map_err(Self::conflict_or_database_error)?;

        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::InternalError("inserted product id is not an ObjectId".to_string())
        })?;
        product.id = Some(id);

        Ok(product)
    }

    async fn replace(&self, product: &Product) -> AppResult<bool> {
        let id = product.id.ok_or_else(|| {
            AppError::InternalError("cannot replace a product without an id".to_string())
        })?;

        let result = self.collection::<Product>()
            .replace_one(doc! { "_id": id }, product)
            .await
            .map_err(Self::conflict_or_database_error)?;

        let _ = self.invalidate_cache(&id.to_hex()).await;

        Ok(result.matched_count > 0)
    }

    async fn delete(&self, id: &ObjectId) -> AppResult<Option<Product>> {
        let deleted = self.collection::<Product>()
            .find_one_and_delete(doc! { "_id": *id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if deleted.is_some() {
            let _ = self.invalidate_cache(&id.to_hex()).await;
        }

        Ok(deleted)
    }
}
