//! Product Catalog HTTP Handlers
//!
//! 조회는 공개, 생성/수정/삭제는 `admin` 역할이 필요합니다.
//!
//! | Method | Path | 권한 | 성공 |
//! |--------|------|------|------|
//! | GET | `/products` | - | 200 |
//! | GET | `/products/{id}` | - | 200 |
//! | POST | `/products` | admin | 201 |
//! | PUT | `/products/{id}` | admin | 200 |
//! | DELETE | `/products/{id}` | admin | 200 (삭제된 상품) |
use actix_web::{delete, get, post, put, web, HttpResponse};
use crate::domain::dto::{CreateProductRequest, DataResponse, UpdateProductRequest};
use crate::errors::AppError;
use crate::handlers::inject::Inject;
use crate::middlewares::AuthMiddleware;
use crate::services::products::ProductService;

#[get("")]
pub async fn list_products(products: Inject<ProductService>) -> Result<HttpResponse, AppError> {
    let products = products.list_products().await?;

    Ok(HttpResponse::Ok().json(DataResponse::new(products)))
}

#[get("/{id}")]
pub async fn get_product(
    products: Inject<ProductService>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let product = products.get_product_by_id(&path).await?;

    Ok(HttpResponse::Ok().json(DataResponse::new(product)))
}

#[post("", wrap = "AuthMiddleware::admin()")]
pub async fn create_product(
    products: Inject<ProductService>,
    payload: web::Json<CreateProductRequest>,
) -> Result<HttpResponse, AppError> {
    let product = products.create_product(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(DataResponse::new(product)))
}

#[put("/{id}", wrap = "AuthMiddleware::admin()")]
pub async fn update_product(
    products: Inject<ProductService>,
    path: web::Path<String>,
    payload: web::Json<UpdateProductRequest>,
) -> Result<HttpResponse, AppError> {
    let product = products.update_product(&path, payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(DataResponse::new(product)))
}

#[delete("/{id}", wrap = "AuthMiddleware::admin()")]
pub async fn delete_product(
    products: Inject<ProductService>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let product = products.delete_product(&path).await?;

    Ok(HttpResponse::Ok().json(DataResponse::new(product)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use mongodb::bson::oid::ObjectId;
    use serde_json::{json, Value};
    use crate::domain::entities::users::user::User;
    use crate::domain::models::token::TokenKind;
    use crate::repositories::memory::MemoryProductStore;
    use crate::routes::configure_all_routes;
    use crate::services::auth::TokenService;

    fn bearer(is_admin: bool) -> String {
        let mut user = User::new_local(
            "staff@shop.example".to_string(),
            "staff".to_string(),
            "hash".to_string(),
            is_admin,
        );
        user.id = Some(ObjectId::new());

        let token = TokenService::instance()
            .generate_token(&user, TokenKind::Access)
            .unwrap();
        format!("Bearer {}", token)
    }

    fn product_service() -> web::Data<ProductService> {
        let (_, handle) = MemoryProductStore::handle();
        web::Data::new(ProductService::with_store(handle))
    }

    fn keyboard() -> Value {
        json!({ "title": "Keyboard", "description": "Mechanical", "price": 49.5, "quantity": 10 })
    }

    #[actix_web::test]
    async fn test_admin_creates_product_in_data_envelope() {
        let app = test::init_service(
            App::new().app_data(product_service()).configure(configure_all_routes),
        ).await;

        let req = test::TestRequest::post()
            .uri("/api/v1/products")
            .insert_header(("Authorization", bearer(true)))
            .set_json(keyboard())
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["data"]["title"], "Keyboard");
        assert_eq!(body["data"]["price"], 49.5);
    }

    #[actix_web::test]
    async fn test_duplicate_title_is_conflict() {
        let app = test::init_service(
            App::new().app_data(product_service()).configure(configure_all_routes),
        ).await;

        for expected in [StatusCode::CREATED, StatusCode::CONFLICT] {
            let req = test::TestRequest::post()
                .uri("/api/v1/products")
                .insert_header(("Authorization", bearer(true)))
                .set_json(keyboard())
                .to_request();
            let res = test::call_service(&app, req).await;
            assert_eq!(res.status(), expected);
        }
    }

    #[actix_web::test]
    async fn test_plain_user_cannot_create_product() {
        let app = test::init_service(
            App::new().app_data(product_service()).configure(configure_all_routes),
        ).await;

        let req = test::TestRequest::post()
            .uri("/api/v1/products")
            .insert_header(("Authorization", bearer(false)))
            .set_json(keyboard())
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::FORBIDDEN);
    }

    #[actix_web::test]
    async fn test_missing_product_is_not_found() {
        let app = test::init_service(
            App::new().app_data(product_service()).configure(configure_all_routes),
        ).await;

        let uri = format!("/api/v1/products/{}", ObjectId::new().to_hex());
        let res = test::call_service(&app, test::TestRequest::get().uri(&uri).to_request()).await;

        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["status"], 404);
    }

    #[actix_web::test]
    async fn test_public_listing() {
        let app = test::init_service(
            App::new().app_data(product_service()).configure(configure_all_routes),
        ).await;

        let create = test::TestRequest::post()
            .uri("/api/v1/products")
            .insert_header(("Authorization", bearer(true)))
            .set_json(keyboard())
            .to_request();
        test::call_service(&app, create).await;

        let res = test::call_service(&app, test::TestRequest::get().uri("/api/v1/products").to_request()).await;

        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["data"].as_array().map(Vec::len), Some(1));
    }
}
