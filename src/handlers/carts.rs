//! Shopping Cart HTTP Handlers
//!
//! 모든 라우트는 `user` 또는 `admin` 역할의 액세스 토큰이 필요하며,
//! 대상 장바구니는 토큰의 사용자 ID로 결정됩니다.
use actix_web::{delete, get, post, put, web, HttpResponse};
use validator::Validate;
use crate::domain::dto::{CartQuantityRequest, DataResponse, PaymentRequest};
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::{AppError, ErrorLogging};
use crate::handlers::inject::Inject;
use crate::services::carts::CartService;

const LOG_LABEL: &str = "CART-CONTROLLER";

#[post("/product/{id}")]
pub async fn add_product_to_cart(
    carts: Inject<CartService>,
    user: AuthenticatedUser,
    path: web::Path<String>,
    payload: web::Json<CartQuantityRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate().map_err(AppError::from).log_with(LOG_LABEL)?;

    let cart = carts
        .add_product_to_cart(&user.user_id, &path, payload.quantity)
        .await?;

    Ok(HttpResponse::Created().json(DataResponse::new(cart)))
}

#[put("/item/{id}")]
pub async fn update_product_in_cart(
    carts: Inject<CartService>,
    user: AuthenticatedUser,
    path: web::Path<String>,
    payload: web::Json<CartQuantityRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate().map_err(AppError::from).log_with(LOG_LABEL)?;

    let cart = carts
        .update_product_in_cart(&user.user_id, &path, payload.quantity)
        .await?;

    Ok(HttpResponse::Ok().json(DataResponse::new(cart)))
}

#[delete("/item/{id}")]
pub async fn remove_product_from_cart(
    carts: Inject<CartService>,
    user: AuthenticatedUser,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    carts
        .remove_product_from_cart(&user.user_id, &path)
        .await?;

    Ok(HttpResponse::NoContent().finish())
}

#[get("")]
pub async fn list_products_in_cart(
    carts: Inject<CartService>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let cart = carts.list_products_in_cart(&user.user_id).await?;

    Ok(HttpResponse::Ok().json(DataResponse::new(cart)))
}

#[post("/payment")]
pub async fn pay_products_in_cart(
    carts: Inject<CartService>,
    user: AuthenticatedUser,
    payload: web::Json<PaymentRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate().map_err(AppError::from).log_with(LOG_LABEL)?;

    let order = carts
        .pay_products_in_cart(&user.user_id, payload.money)
        .await?;

    log::info!("[{}] 결제 완료 - 사용자: {}", LOG_LABEL, user.user_id);
    Ok(HttpResponse::Ok().json(DataResponse::new(order)))
}
