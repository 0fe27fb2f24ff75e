//! # 장바구니 서비스 구현
//!
//! 사용자별 장바구니 관리와 결제를 담당합니다.
//!
//! ## 결제 흐름
//!
//! ```text
//! 장바구니 조회 ──► 항목별 상품 조회 ──► 합계 계산 ──► 지불 금액 확인
//!                                                        │
//!                              장바구니 비우기 ◄── 주문 저장
//! ```
//!
//! 재고 수량은 차감하지 않으며, 주문 저장과 장바구니 비우기는 하나의 트랜잭션이 아닙니다.

use mongodb::bson::oid::ObjectId;
use singleton_macro::service;
use crate::{
    domain::{
        dto::carts::{CartResponse, OrderResponse},
        entities::{
            carts::cart::{Cart, MAX_ITEM_QUANTITY},
            orders::order::{Order, OrderItem},
        },
    },
    errors::{AppError, AppResult, ErrorLogging},
    repositories::stores::{CartStoreHandle, OrderStoreHandle, ProductStoreHandle},
    utils::id_utils::parse_object_id,
};

const LOG_LABEL: &str = "CART-SERVICE";

#[service(name = "cart")]
pub struct CartService {
    carts: CartStoreHandle,
    products: ProductStoreHandle,
    orders: OrderStoreHandle,
}

impl CartService {
    pub fn with_stores(carts: CartStoreHandle, products: ProductStoreHandle, orders: OrderStoreHandle) -> Self {
        Self { carts, products, orders }
    }

    /// 상품을 장바구니에 담습니다. 이미 담긴 상품이면 수량을 더합니다.
    pub async fn add_product_to_cart(&self, user_id: &str, product_id: &str, quantity: i64) -> AppResult<CartResponse> {
        Self::ensure_quantity(quantity)?;
        let user_id = parse_object_id(user_id, "user").log_with(LOG_LABEL)?;
        let product_id = parse_object_id(product_id, "product").log_with(LOG_LABEL)?;

        self.products
            .find_by_id(&product_id)
            .await
            .log_with(LOG_LABEL)?
            .ok_or_else(|| Self::product_not_found(&product_id))
            .log_with(LOG_LABEL)?;

        let mut cart = self.load_cart(&user_id).await?;
        if cart.add_quantity(product_id, quantity).is_none() {
            return Err(AppError::ValidationError(format!(
                "quantity in cart cannot exceed {}",
                MAX_ITEM_QUANTITY
            )))
            .log_with(LOG_LABEL);
        }

        let saved = self.carts.save(cart).await.log_with(LOG_LABEL)?;
        Ok(CartResponse::from(saved))
    }

    /// 장바구니에 있는 상품의 수량을 교체합니다.
    pub async fn update_product_in_cart(&self, user_id: &str, product_id: &str, quantity: i64) -> AppResult<CartResponse> {
        Self::ensure_quantity(quantity)?;
        let user_id = parse_object_id(user_id, "user").log_with(LOG_LABEL)?;
        let product_id = parse_object_id(product_id, "product").log_with(LOG_LABEL)?;

        let mut cart = self.load_cart(&user_id).await?;
        if !cart.set_quantity(&product_id, quantity) {
            return Err(Self::item_not_found(&product_id)).log_with(LOG_LABEL);
        }

        let saved = self.carts.save(cart).await.log_with(LOG_LABEL)?;
        Ok(CartResponse::from(saved))
    }

    pub async fn remove_product_from_cart(&self, user_id: &str, product_id: &str) -> AppResult<()> {
        let user_id = parse_object_id(user_id, "user").log_with(LOG_LABEL)?;
        let product_id = parse_object_id(product_id, "product").log_with(LOG_LABEL)?;

        let mut cart = self.load_cart(&user_id).await?;
        if !cart.remove_item(&product_id) {
            return Err(Self::item_not_found(&product_id)).log_with(LOG_LABEL);
        }

        self.carts.save(cart).await.log_with(LOG_LABEL)?;
        Ok(())
    }

    /// 장바구니를 조회합니다. 아직 없으면 저장하지 않은 빈 장바구니를 반환합니다.
    pub async fn list_products_in_cart(&self, user_id: &str) -> AppResult<CartResponse> {
        let user_id = parse_object_id(user_id, "user").log_with(LOG_LABEL)?;

        let cart = self.load_cart(&user_id).await?;
        Ok(CartResponse::from(cart))
    }

    /// 장바구니 전체를 결제하고 주문을 반환합니다.
    pub async fn pay_products_in_cart(&self, user_id: &str, money: f64) -> AppResult<OrderResponse> {
        if !money.is_finite() || money < 0.0 {
            return Err(AppError::ValidationError("money must be a non-negative amount".to_string()))
                .log_with(LOG_LABEL);
        }
        let user_id = parse_object_id(user_id, "user").log_with(LOG_LABEL)?;

        let mut cart = self.load_cart(&user_id).await?;
        if cart.is_empty() {
            return Err(AppError::ValidationError("Cart is empty".to_string())).log_with(LOG_LABEL);
        }

        let mut items = Vec::with_capacity(cart.items.len());
        for item in &cart.items {
            let product = self.products
                .find_by_id(&item.product_id)
                .await
                .log_with(LOG_LABEL)?
                .ok_or_else(|| Self::product_not_found(&item.product_id))
                .log_with(LOG_LABEL)?;

            let order_item = OrderItem::new(item.product_id, product.title, product.price, item.quantity)
                .ok_or_else(Self::amount_too_large)
                .log_with(LOG_LABEL)?;
            items.push(order_item);
        }

        let order = Order::new(user_id, items, money)
            .ok_or_else(Self::amount_too_large)
            .log_with(LOG_LABEL)?;
        if !order.is_fully_paid() {
            return Err(AppError::ValidationError(format!(
                "insufficient money: total is {:.2}, paid {:.2}",
                order.total, money
            )))
            .log_with(LOG_LABEL);
        }

        let order = self.orders.insert(order).await.log_with(LOG_LABEL)?;

        cart.clear();
        self.carts.save(cart).await.log_with(LOG_LABEL)?;

        log::info!("💳 결제 완료: order={} total={:.2}", order.order_number, order.total);
        Ok(OrderResponse::from(order))
    }

    async fn load_cart(&self, user_id: &ObjectId) -> AppResult<Cart> {
        let cart = self.carts.find_by_user(user_id).await.log_with(LOG_LABEL)?;

        Ok(cart.unwrap_or_else(|| Cart::new(*user_id)))
    }

    fn ensure_quantity(quantity: i64) -> AppResult<()> {
        if !(1..=MAX_ITEM_QUANTITY).contains(&quantity) {
            return Err(AppError::ValidationError(format!(
                "quantity must be between 1 and {}",
                MAX_ITEM_QUANTITY
            )))
            .log_with(LOG_LABEL);
        }
        Ok(())
    }

    fn amount_too_large() -> AppError {
        AppError::ValidationError("order amount is too large".to_string())
    }

    fn product_not_found(product_id: &ObjectId) -> AppError {
        AppError::NotFound(format!("Product with ID {} not found", product_id.to_hex()))
    }

    fn item_not_found(product_id: &ObjectId) -> AppError {
        AppError::NotFound(format!("Product with ID {} is not in the cart", product_id.to_hex()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use crate::domain::entities::products::product::Product;
    use crate::repositories::memory::{MemoryCartStore, MemoryOrderStore, MemoryProductStore};
    use crate::repositories::stores::ProductStore;

    struct Fixture {
        carts: Arc<MemoryCartStore>,
        products: Arc<MemoryProductStore>,
        orders: Arc<MemoryOrderStore>,
        service: CartService,
        user_id: String,
    }

    fn fixture() -> Fixture {
        let (carts, cart_handle) = MemoryCartStore::handle();
        let (products, product_handle) = MemoryProductStore::handle();
        let (orders, order_handle) = MemoryOrderStore::handle();

        Fixture {
            carts,
            products,
            orders,
            service: CartService::with_stores(cart_handle, product_handle, order_handle),
            user_id: ObjectId::new().to_hex(),
        }
    }

    async fn seed_product(store: &MemoryProductStore, title: &str, price: f64) -> String {
        let product = store
            .insert(Product::new(title.to_string(), String::new(), price, 100))
            .await
            .unwrap();
        product.id_string().unwrap()
    }

    #[actix_web::test]
    async fn test_add_then_list_includes_item() {
        let f = fixture();
        let keyboard = seed_product(&f.products, "Keyboard", 10.0).await;

        f.service.add_product_to_cart(&f.user_id, &keyboard, 2).await.unwrap();
        let cart = f.service.list_products_in_cart(&f.user_id).await.unwrap();

        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].product_id, keyboard);
        assert_eq!(cart.items[0].quantity, 2);
    }

    #[actix_web::test]
    async fn test_adding_same_product_increments_quantity() {
        let f = fixture();
        let keyboard = seed_product(&f.products, "Keyboard", 10.0).await;

        f.service.add_product_to_cart(&f.user_id, &keyboard, 2).await.unwrap();
        let cart = f.service.add_product_to_cart(&f.user_id, &keyboard, 3).await.unwrap();

        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].quantity, 5);
        assert_eq!(f.carts.len(), 1);
    }

    #[actix_web::test]
    async fn test_adding_past_quantity_limit_is_rejected() {
        let f = fixture();
        let keyboard = seed_product(&f.products, "Keyboard", 10.0).await;
        f.service.add_product_to_cart(&f.user_id, &keyboard, MAX_ITEM_QUANTITY).await.unwrap();

        let one_more = f.service.add_product_to_cart(&f.user_id, &keyboard, 1).await;
        let huge = f.service.add_product_to_cart(&f.user_id, &keyboard, i64::MAX).await;

        assert!(matches!(one_more, Err(AppError::ValidationError(_))));
        assert!(matches!(huge, Err(AppError::ValidationError(_))));
        let cart = f.service.list_products_in_cart(&f.user_id).await.unwrap();
        assert_eq!(cart.items[0].quantity, MAX_ITEM_QUANTITY);
    }

    #[actix_web::test]
    async fn test_add_unknown_product_is_not_found() {
        let f = fixture();

        let result = f.service
            .add_product_to_cart(&f.user_id, &ObjectId::new().to_hex(), 1)
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
        assert_eq!(f.carts.len(), 0);
    }

    #[actix_web::test]
    async fn test_zero_quantity_is_rejected() {
        let f = fixture();
        let keyboard = seed_product(&f.products, "Keyboard", 10.0).await;

        let added = f.service.add_product_to_cart(&f.user_id, &keyboard, 0).await;
        let updated = f.service.update_product_in_cart(&f.user_id, &keyboard, 0).await;

        assert!(matches!(added, Err(AppError::ValidationError(_))));
        assert!(matches!(updated, Err(AppError::ValidationError(_))));
    }

    #[actix_web::test]
    async fn test_update_sets_quantity() {
        let f = fixture();
        let keyboard = seed_product(&f.products, "Keyboard", 10.0).await;
        f.service.add_product_to_cart(&f.user_id, &keyboard, 2).await.unwrap();

        let cart = f.service.update_product_in_cart(&f.user_id, &keyboard, 7).await.unwrap();

        assert_eq!(cart.items[0].quantity, 7);
    }

    #[actix_web::test]
    async fn test_update_item_not_in_cart_is_not_found() {
        let f = fixture();
        let keyboard = seed_product(&f.products, "Keyboard", 10.0).await;

        let result = f.service.update_product_in_cart(&f.user_id, &keyboard, 1).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_remove_then_list_excludes_item() {
        let f = fixture();
        let keyboard = seed_product(&f.products, "Keyboard", 10.0).await;
        let mouse = seed_product(&f.products, "Mouse", 5.0).await;
        f.service.add_product_to_cart(&f.user_id, &keyboard, 1).await.unwrap();
        f.service.add_product_to_cart(&f.user_id, &mouse, 1).await.unwrap();

        f.service.remove_product_from_cart(&f.user_id, &keyboard).await.unwrap();
        let cart = f.service.list_products_in_cart(&f.user_id).await.unwrap();

        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].product_id, mouse);

        let again = f.service.remove_product_from_cart(&f.user_id, &keyboard).await;
        assert!(matches!(again, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_listing_without_cart_does_not_persist() {
        let f = fixture();

        let cart = f.service.list_products_in_cart(&f.user_id).await.unwrap();

        assert!(cart.items.is_empty());
        assert!(cart.id.is_none());
        assert_eq!(f.carts.len(), 0);
    }

    #[actix_web::test]
    async fn test_payment_creates_order_and_clears_cart() {
        let f = fixture();
        let keyboard = seed_product(&f.products, "Keyboard", 10.0).await;
        let mouse = seed_product(&f.products, "Mouse", 5.0).await;
        f.service.add_product_to_cart(&f.user_id, &keyboard, 2).await.unwrap();
        f.service.add_product_to_cart(&f.user_id, &mouse, 3).await.unwrap();

        let order = f.service.pay_products_in_cart(&f.user_id, 50.0).await.unwrap();

        assert_eq!(order.total, 35.0);
        assert_eq!(order.paid, 50.0);
        assert_eq!(order.change, 15.0);
        assert_eq!(order.items.len(), 2);
        assert_eq!(f.orders.len(), 1);

        let cart = f.service.list_products_in_cart(&f.user_id).await.unwrap();
        assert!(cart.items.is_empty());
    }

    #[actix_web::test]
    async fn test_paying_exact_total_of_fractional_prices() {
        let f = fixture();
        let sticker = seed_product(&f.products, "Sticker", 0.1).await;
        f.service.add_product_to_cart(&f.user_id, &sticker, 3).await.unwrap();

        let order = f.service.pay_products_in_cart(&f.user_id, 0.3).await.unwrap();

        assert_eq!(order.total, 0.3);
        assert_eq!(order.change, 0.0);
        assert_eq!(f.orders.len(), 1);
    }

    #[actix_web::test]
    async fn test_insufficient_money_keeps_cart() {
        let f = fixture();
        let keyboard = seed_product(&f.products, "Keyboard", 10.0).await;
        f.service.add_product_to_cart(&f.user_id, &keyboard, 2).await.unwrap();

        let result = f.service.pay_products_in_cart(&f.user_id, 19.99).await;

        assert!(matches!(result, Err(AppError::ValidationError(ref m)) if m.contains("insufficient money")));
        assert_eq!(f.orders.len(), 0);
        let cart = f.service.list_products_in_cart(&f.user_id).await.unwrap();
        assert_eq!(cart.items.len(), 1);
    }

    #[actix_web::test]
    async fn test_paying_empty_cart_is_rejected() {
        let f = fixture();

        let result = f.service.pay_products_in_cart(&f.user_id, 10.0).await;

        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[actix_web::test]
    async fn test_payment_with_deleted_product_is_not_found() {
        let f = fixture();
        let keyboard = seed_product(&f.products, "Keyboard", 10.0).await;
        f.service.add_product_to_cart(&f.user_id, &keyboard, 1).await.unwrap();
        f.products.delete(&parse_object_id(&keyboard, "product").unwrap()).await.unwrap();

        let result = f.service.pay_products_in_cart(&f.user_id, 100.0).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
        assert_eq!(f.orders.len(), 0);
    }
}
