//! 핸들러용 서비스 추출자
//!
//! 앱 데이터(`web::Data<S>`)로 등록된 서비스가 있으면 그것을, 없으면 싱글톤 인스턴스를 사용합니다.
//! 운영 서버는 아무것도 등록하지 않으므로 항상 `S::instance()`가 사용됩니다.
//!
//! ```rust,ignore
//! #[get("")]
//! pub async fn list_products(products: Inject<ProductService>) -> Result<HttpResponse, AppError> {
//!     let products = products.list_products().await?;
//!     Ok(HttpResponse::Ok().json(DataResponse::new(products)))
//! }
//! ```

use std::future::{ready, Ready};
use std::ops::Deref;
use std::sync::Arc;
use actix_web::{web, FromRequest, HttpRequest};
use crate::errors::AppError;
use crate::services::{
    auth::{AuthService, TokenService},
    carts::CartService,
    products::ProductService,
};

/// 싱글톤 매크로로 생성된 서비스
pub trait Singleton: Send + Sync + 'static {
    fn singleton() -> Arc<Self>;
}

macro_rules! impl_singleton {
    ($($service:ty),* $(,)?) => {
        $(
            impl Singleton for $service {
                fn singleton() -> Arc<Self> {
                    <$service>::instance()
                }
            }
        )*
    };
}

impl_singleton!(ProductService, CartService, AuthService, TokenService);

pub struct Inject<S>(Arc<S>);

impl<S> Deref for Inject<S> {
    type Target = S;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S: Singleton> FromRequest for Inject<S> {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let service = req
            .app_data::<web::Data<S>>()
            .map(|data| data.clone().into_inner())
            .unwrap_or_else(S::singleton);

        ready(Ok(Inject(service)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;
    use crate::repositories::memory::MemoryProductStore;

    #[actix_web::test]
    async fn test_registered_service_is_preferred() {
        let (_, handle) = MemoryProductStore::handle();
        let data = web::Data::new(ProductService::with_store(handle));
        let (req, mut payload) = TestRequest::default()
            .app_data(data.clone())
            .to_http_parts();

        let injected = Inject::<ProductService>::from_request(&req, &mut payload).await.unwrap();

        assert!(Arc::ptr_eq(&injected.0, &data.into_inner()));
    }
}
