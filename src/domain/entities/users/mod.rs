//! Users Entity Module
//!
//! 이메일/비밀번호로 가입한 사용자와 발급된 리프레시 토큰 기록을 담는 엔티티입니다.

pub mod user;
