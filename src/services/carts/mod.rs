//! 장바구니/결제 서비스

pub mod cart_service;

pub use cart_service::*;
