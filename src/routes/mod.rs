//! 라우트 설정 모듈
//!
//! 기능별 핸들러를 `APP_ROUTE_PREFIX`(기본값 `/api/v1`) 아래에 등록합니다.
//! 헬스체크만 접두사 없이 `/health`에 노출됩니다.

use crate::config::AppConfig;
use crate::errors::AppError;
use crate::handlers;
use crate::middlewares::AuthMiddleware;
use actix_web::web;
use serde_json::json;

/// 모든 라우트를 설정합니다
///
/// # Examples
///
/// ```rust,ignore
/// use actix_web::{web, App};
///
/// let app = App::new().configure(configure_all_routes);
/// ```
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config());

    // Health check endpoint
    cfg.service(health_check);

    configure_product_routes(cfg);
    configure_cart_routes(cfg);
    configure_auth_routes(cfg);
}

/// JSON 본문 파싱 실패를 다른 검증 오류와 같은 400 본문으로 응답합니다.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        AppError::ValidationError(format!("잘못된 요청 본문입니다: {}", err)).into()
    })
}

/// 상품 라우트
///
/// 조회는 공개이며, 변경 핸들러는 각자 `AuthMiddleware::admin()`으로 감싸져 있습니다.
///
/// ```bash
/// curl http://localhost:8080/api/v1/products
///
/// curl -X POST http://localhost:8080/api/v1/products \
///   -H "Authorization: Bearer <admin access token>" \
///   -H "Content-Type: application/json" \
///   -d '{"title":"Keyboard","description":"","price":49.5,"quantity":10}'
/// ```
fn configure_product_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope(&AppConfig::scoped("/products"))
            .service(handlers::products::list_products)
            .service(handlers::products::create_product)
            .service(handlers::products::get_product)
            .service(handlers::products::update_product)
            .service(handlers::products::delete_product)
    );
}

/// 장바구니 라우트 (user 또는 admin 역할)
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/cart/product/64f0c2a1b2c3d4e5f6a7b8c9 \
///   -H "Authorization: Bearer <access token>" \
///   -H "Content-Type: application/json" \
///   -d '{"quantity":2}'
/// ```
fn configure_cart_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope(&AppConfig::scoped("/cart"))
            .wrap(AuthMiddleware::user())
            .service(handlers::carts::list_products_in_cart)
            .service(handlers::carts::add_product_to_cart)
            .service(handlers::carts::update_product_in_cart)
            .service(handlers::carts::remove_product_from_cart)
            .service(handlers::carts::pay_products_in_cart)
    );
}

/// 인증 라우트
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/auth/signin \
///   -H "Content-Type: application/json" \
///   -d '{"email":"user@example.com","password":"password123"}'
///
/// curl -X POST http://localhost:8080/api/v1/auth/refresh \
///   -H "Authorization: Bearer <refresh token>"
/// ```
fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope(&AppConfig::scoped("/auth"))
            .service(handlers::auth::sign_up)
            .service(handlers::auth::sign_in)
            .service(handlers::auth::refresh_tokens)
            .service(handlers::auth::logout)
            .service(handlers::auth::get_current_user)
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 로드밸런서나 모니터링 시스템에서 서비스 상태를 확인하는 데 사용됩니다.
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "shop_service_backend",
///   "version": "0.1.0",
///   "timestamp": "2023-01-01T00:00:00Z",
///   "features": {
///     "database": "MongoDB",
///     "cache": "Redis",
///     "dependency_injection": "Singleton Macro"
///   }
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB",
            "cache": "Redis",
            "dependency_injection": "Singleton Macro"
        }
    }))
}
