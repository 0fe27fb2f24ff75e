//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 데이터 액세스 계층을 담당하는 리포지토리입니다.
//! MongoDB를 주 저장소로 사용하고, Redis를 통한 캐싱을 지원합니다.
//!
//! ## 특징
//!
//! - **하이브리드 스토리지**: MongoDB + Redis 캐싱
//! - **자동 의존성 주입**: 싱글톤 매크로를 통한 DI
//! - **데이터 무결성**: 이메일 유니크 인덱스

use std::sync::Arc;
use async_trait::async_trait;
use mongodb::{bson::{doc, oid::ObjectId, DateTime}, options::IndexOptions, IndexModel};
use singleton_macro::repository;
use crate::{
    caching::redis::RedisClient,
    core::registry::Repository,
    db::Database,
    domain::entities::users::user::User,
    errors::{AppError, AppResult},
    repositories::{is_duplicate_key, stores::UserStore},
};

const CACHE_TTL_SECONDS: u64 = 600;

/// 사용자 데이터 액세스 리포지토리
///
/// ## 캐싱 전략
///
/// - **TTL**: 10분 (600초)
/// - **키 패턴**: `user_repository:{user_id}`
/// - **쓰기 후 캐시 무효화**: 로그인 기록, 토큰 지문 변경 시 해당 키 삭제
///
/// 이메일 조회는 로그인/가입 경로에서만 쓰이므로 캐싱하지 않습니다.
///
/// ## 저장소
///
/// - **컬렉션명**: `users`
/// - **인덱스**: email(unique), created_at(desc)
#[repository(name = "user", collection = "users")]
pub struct UserRepository {
    /// MongoDB 데이터베이스 연결
    db: Arc<Database>,

    /// Redis 캐시 클라이언트
    redis: Arc<RedisClient>,
}

impl UserRepository {
    /// 데이터베이스 인덱스 생성
    ///
    /// 1. **이메일 유니크 인덱스**: 동시 가입 시에도 중복 계정 방지
    /// 2. **생성일 인덱스**: 최근 가입자 정렬
    ///
    /// 이미 중복 데이터가 있는 경우 유니크 인덱스 생성이 실패합니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let collection = self.collection::<User>();

        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(IndexOptions::builder()
                .name("created_at_desc".to_string())
                .build())
            .build();

        collection
            .create_indexes([email_index, created_at_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn update_fields(&self, id: &ObjectId, update: mongodb::bson::Document) -> AppResult<()> {
        let result = self.collection::<User>()
            .update_one(doc! { "_id": *id }, update)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let _ = self.invalidate_cache(&id.to_hex()).await;

        if result.matched_count == 0 {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        Ok(())
    }
}

#[async_trait]
impl UserStore for UserRepository {
    /// ID로 사용자 조회
    ///
    /// 가장 빈번한 조회 패턴(토큰 갱신, 프로필 조회)이므로 캐시를 먼저 확인합니다.
    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<User>> {
        let cache_key = self.cache_key(&id.to_hex());

        if let Ok(Some(cached)) = self.redis.get::<User>(&cache_key).await {
            return Ok(Some(cached));
        }

        let user = self.collection::<User>()
            .find_one(doc! { "_id": *id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if let Some(ref user) = user {
            let _ = self.redis
                .set_with_expiry(&cache_key, user, CACHE_TTL_SECONDS)
                .await;
        }

        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.collection::<User>()
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 새 사용자 생성
    ///
    /// 서비스 계층의 중복 확인과 별개로, 유니크 인덱스 위반도 `ConflictError`로 변환합니다.
    async fn insert(&self, mut user: User) -> AppResult<User> {
        let result = self.collection::<User>()
            .insert_one(&user)
            .await
            .map_err(|e| {
                if is_duplicate_key(&e) {
                    AppError::ConflictError("Email already registered".to_string())
                } else {
                    AppError::DatabaseError(e.to_string())
                }
            })?;

        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::InternalError("inserted user id is not an ObjectId".to_string())
        })?;
        user.id = Some(id);

        Ok(user)
    }

    async fn record_login(&self, id: &ObjectId, refresh_token_hash: &str) -> AppResult<()> {
        let now = DateTime::now();

        self.update_fields(id, doc! {
            "$set": {
                "refresh_token_hash": refresh_token_hash,
                "last_login_at": now,
                "updated_at": now,
            }
        }).await
    }

    async fn set_refresh_token_hash(&self, id: &ObjectId, refresh_token_hash: Option<&str>) -> AppResult<()> {
        let now = DateTime::now();

        let update = match refresh_token_hash {
            Some(hash) => doc! {
                "$set": { "refresh_token_hash": hash, "updated_at": now }
            },
            None => doc! {
                "$unset": { "refresh_token_hash": "" },
                "$set": { "updated_at": now },
            },
        };

        self.update_fields(id, update).await
    }
}
