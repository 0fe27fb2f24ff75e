//! 상품 데이터 액세스 계층

pub mod product_repo;
