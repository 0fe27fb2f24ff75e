//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! `#[repository]` 매크로를 사용하여 싱글톤으로 관리되는 리포지토리들을 제공합니다.
//! MongoDB를 주 저장소로 사용하고, ID 기반 조회는 Redis로 캐싱합니다.
//!
//! 서비스는 리포지토리 구조체가 아니라 [`stores`]의 trait에 의존합니다.
//! 운영 환경에서는 MongoDB 리포지토리가, 테스트에서는 메모리 저장소가 주입됩니다.
//!
//! | 리포지토리 | 컬렉션 | Store trait | 캐시 |
//! |------------|--------|-------------|------|
//! | [`UserRepository`](users::user_repo::UserRepository) | `users` | [`UserStore`](stores::UserStore) | ID |
//! | [`ProductRepository`](products::product_repo::ProductRepository) | `products` | [`ProductStore`](stores::ProductStore) | ID |
//! | [`CartRepository`](carts::cart_repo::CartRepository) | `carts` | [`CartStore`](stores::CartStore) | - |
//! | [`OrderRepository`](orders::order_repo::OrderRepository) | `orders` | [`OrderStore`](stores::OrderStore) | - |
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::products::product_repo::ProductRepository;
//!
//! let product_repo = ProductRepository::instance();
//! let product = product_repo.find_by_title("Keyboard").await?;
//! ```

pub mod stores;
pub mod users;
pub mod products;
pub mod carts;
pub mod orders;

#[cfg(test)]
pub mod memory;

use log::info;
use mongodb::error::{ErrorKind, WriteFailure};
use crate::errors::AppResult;

const DUPLICATE_KEY_CODE: i32 = 11000;

/// 유니크 인덱스 위반(E11000) 여부를 확인합니다.
pub(crate) fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
    match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(e)) => e.code == DUPLICATE_KEY_CODE,
        ErrorKind::Command(e) => e.code == DUPLICATE_KEY_CODE,
        _ => false,
    }
}

/// 모든 컬렉션의 인덱스를 생성합니다. 서버 시작 시 한 번 호출됩니다.
pub async fn create_all_indexes() -> AppResult<()> {
    users::user_repo::UserRepository::instance().create_indexes().await?;
    products::product_repo::ProductRepository::instance().create_indexes().await?;
    carts::cart_repo::CartRepository::instance().create_indexes().await?;
    orders::order_repo::OrderRepository::instance().create_indexes().await?;

    info!("✅ MongoDB 인덱스 생성 완료");
    Ok(())
}
