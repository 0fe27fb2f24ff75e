//! # Core Framework Module
//!
//! 싱글톤 서비스/리포지토리를 보관하는 [`registry`]를 제공합니다.
//!
//! `#[service]` / `#[repository]` 매크로가 `inventory`로 등록한 생성자는
//! `main`에서 `Database`와 `RedisClient`를 [`ServiceLocator::set`]으로 넣은 뒤
//! [`ServiceLocator::initialize_all`]을 호출할 때 한 번에 실행됩니다.
//!
//! | 매크로 | 등록 이름 | 예 |
//! |--------|-----------|----|
//! | `#[repository(name = "product", collection = "products")]` | `product_repository` | `ProductRepository` |
//! | `#[service(name = "cart")]` | `cart_service` | `CartService` |
//!
//! 서비스의 저장소 필드는 `Arc<Repository>`가 아니라 store 핸들이며,
//! 핸들의 `Default`가 해당 리포지토리 싱글톤을 가리킵니다.
//!
//! ```rust,ignore
//! #[service(name = "cart")]
//! pub struct CartService {
//!     carts: CartStoreHandle,       // CartRepository::instance()
//!     products: ProductStoreHandle, // ProductRepository::instance()
//!     orders: OrderStoreHandle,     // OrderRepository::instance()
//! }
//! ```

pub mod registry;

pub use registry::*;
