//! 사용자 데이터 액세스 계층

pub mod user_repo;
