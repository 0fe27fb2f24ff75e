//! Orders Entity Module
//!
//! 장바구니 결제 시 생성되는 주문 문서입니다.

pub mod order;
