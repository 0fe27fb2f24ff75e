//! # 저장소 추상화
//!
//! 서비스 계층이 의존하는 저장소 trait과, 싱글톤 매크로가 주입할 수 있는 핸들 타입입니다.
//!
//! 핸들은 `Default`로 MongoDB 리포지토리 싱글톤을 가리키고,
//! `new`로 임의의 구현체(테스트용 메모리 저장소 등)를 감쌀 수 있습니다.
//!
//! ```rust,ignore
//! #[service(name = "product")]
//! pub struct ProductService {
//!     products: ProductStoreHandle, // Default → ProductRepository::instance()
//! }
//! ```

use std::ops::Deref;
use std::sync::Arc;
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use crate::domain::entities::{
    carts::cart::Cart,
    orders::order::Order,
    products::product::Product,
    users::user::User,
};
use crate::errors::AppResult;
use crate::repositories::{
    carts::cart_repo::CartRepository,
    orders::order_repo::OrderRepository,
    products::product_repo::ProductRepository,
    users::user_repo::UserRepository,
};

#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<Product>>;

    async fn find_by_title(&self, title: &str) -> AppResult<Option<Product>>;

    async fn find_all(&self) -> AppResult<Vec<Product>>;

    /// 새 상품을 저장하고 ID가 채워진 문서를 반환합니다.
    /// 상품명이 이미 있으면 `ConflictError`입니다.
    async fn insert(&self, product: Product) -> AppResult<Product>;

    /// 문서 전체를 교체합니다. 대상이 없으면 `false`를 반환합니다.
    async fn replace(&self, product: &Product) -> AppResult<bool>;

    /// 삭제된 문서를 반환합니다.
    async fn delete(&self, id: &ObjectId) -> AppResult<Option<Product>>;
}

#[async_trait]
pub trait CartStore: Send + Sync {
    async fn find_by_user(&self, user_id: &ObjectId) -> AppResult<Option<Cart>>;

    /// `user_id` 기준으로 upsert 하고 저장된 장바구니를 반환합니다.
    async fn save(&self, cart: Cart) -> AppResult<Cart>;
}

#[async_trait]
pub trait OrderStore: Send + Sync {
    async fn insert(&self, order: Order) -> AppResult<Order>;
}

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<User>>;

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// 이메일이 이미 있으면 `ConflictError`입니다.
    async fn insert(&self, user: User) -> AppResult<User>;

    /// 로그인 성공 기록: 리프레시 토큰 지문과 `last_login_at`을 갱신합니다.
    async fn record_login(&self, id: &ObjectId, refresh_token_hash: &str) -> AppResult<()>;

    /// 리프레시 토큰 지문을 교체하거나(`Some`) 제거합니다(`None`).
    async fn set_refresh_token_hash(&self, id: &ObjectId, refresh_token_hash: Option<&str>) -> AppResult<()>;
}

macro_rules! store_handle {
    ($(#[$meta:meta])* $handle:ident, $store:ident, $repository:ty) => {
        $(#[$meta])*
        #[derive(Clone)]
        pub struct $handle(Arc<dyn $store>);

        impl $handle {
            pub fn new(store: Arc<dyn $store>) -> Self {
                Self(store)
            }
        }

        impl Default for $handle {
            fn default() -> Self {
                Self(<$repository>::instance())
            }
        }

        impl Deref for $handle {
            type Target = dyn $store;

            fn deref(&self) -> &Self::Target {
                self.0.as_ref()
            }
        }
    };
}

store_handle!(
    /// 상품 저장소 핸들
    ProductStoreHandle, ProductStore, ProductRepository
);
store_handle!(
    /// 장바구니 저장소 핸들
    CartStoreHandle, CartStore, CartRepository
);
store_handle!(
    /// 주문 저장소 핸들
    OrderStoreHandle, OrderStore, OrderRepository
);
store_handle!(
    /// 사용자 저장소 핸들
    UserStoreHandle, UserStore, UserRepository
);
