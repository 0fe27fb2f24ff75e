use serde::{Deserialize, Serialize};
use crate::domain::dto::format_datetime;
use crate::domain::entities::carts::cart::{Cart, CartItem};
use crate::domain::entities::orders::order::{Order, OrderItem};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItemResponse {
    pub product_id: String,
    pub quantity: i64,
}

impl From<CartItem> for CartItemResponse {
    fn from(item: CartItem) -> Self {
        Self {
            product_id: item.product_id.to_hex(),
            quantity: item.quantity,
        }
    }
}

/// 장바구니 응답
///
/// 아직 저장된 적 없는 빈 장바구니는 `id`가 `null`입니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartResponse {
    pub id: Option<String>,
    pub user_id: String,
    pub items: Vec<CartItemResponse>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        Self {
            id: cart.id.map(|id| id.to_hex()),
            user_id: cart.user_id.to_hex(),
            items: cart.items.into_iter().map(CartItemResponse::from).collect(),
            created_at: format_datetime(&cart.created_at),
            updated_at: format_datetime(&cart.updated_at),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItemResponse {
    pub product_id: String,
    pub title: String,
    pub unit_price: f64,
    pub quantity: i64,
    pub subtotal: f64,
}

impl From<OrderItem> for OrderItemResponse {
    fn from(item: OrderItem) -> Self {
        Self {
            product_id: item.product_id.to_hex(),
            title: item.title,
            unit_price: item.unit_price,
            quantity: item.quantity,
            subtotal: item.subtotal,
        }
    }
}

/// 결제 결과로 반환되는 주문 응답
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderResponse {
    pub id: String,
    pub order_number: String,
    pub user_id: String,
    pub items: Vec<OrderItemResponse>,
    pub total: f64,
    pub paid: f64,
    pub change: f64,
    pub created_at: String,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id.map(|id| id.to_hex()).unwrap_or_default(),
            order_number: order.order_number,
            user_id: order.user_id.to_hex(),
            items: order.items.into_iter().map(OrderItemResponse::from).collect(),
            total: order.total,
            paid: order.paid,
            change: order.change,
            created_at: format_datetime(&order.created_at),
        }
    }
}
