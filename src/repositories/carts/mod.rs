//! 장바구니 데이터 액세스 계층

pub mod cart_repo;
