//! Carts Entity Module
//!
//! 사용자당 하나씩 존재하는 장바구니 문서입니다.

pub mod cart;
