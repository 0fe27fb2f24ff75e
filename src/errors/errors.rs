//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 쇼핑몰 백엔드를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 모든 실패를
//! 상태 코드와 메시지를 담은 HTTP 응답으로 변환합니다.
//!
//! ## 에러 분류
//!
//! | 변형 | 상태 코드 | 발생 상황 |
//! |------|-----------|-----------|
//! | `ValidationError` | 400 | 잘못된 입력값, 잘못된 ObjectId 형식 |
//! | `AuthenticationError` | 401 | 토큰 없음/만료, 잘못된 비밀번호 |
//! | `AuthorizationError` | 403 | 역할 부족, 폐기된 리프레시 토큰 |
//! | `NotFound` | 404 | 상품/장바구니 항목/사용자 없음 |
//! | `ConflictError` | 409 | 중복 상품명, 중복 이메일 |
//! | `DatabaseError` 외 | 500 | 저장소 장애 |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::errors::{AppError, ErrorLogging};
//!
//! const LOG_LABEL: &str = "PRODUCT-SERVICE";
//!
//! let product = store
//!     .find_by_id(&id)
//!     .await
//!     .log_with(LOG_LABEL)?
//!     .ok_or_else(|| AppError::NotFound("Product with ID not found".to_string()))
//!     .log_with(LOG_LABEL)?;
//! ```

use actix_web::http::StatusCode;
use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 백엔드 서비스에서 발생할 수 있는 모든 종류의 에러를 포괄하는 열거형입니다.
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Redis 캐시 관련 에러 (500 Internal Server Error)
    #[error("Redis error: {0}")]
    RedisError(String),

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 충돌/중복 에러 (409 Conflict)
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 인증 실패 에러 (401 Unauthorized)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 권한 부족 에러 (403 Forbidden)
    #[error("Authorization error: {0}")]
    AuthorizationError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 에러에 포함된 사용자용 메시지
    pub fn message(&self) -> &str {
        match self {
            AppError::DatabaseError(msg)
            | AppError::RedisError(msg)
            | AppError::ValidationError(msg)
            | AppError::NotFound(msg)
            | AppError::ConflictError(msg)
            | AppError::AuthenticationError(msg)
            | AppError::AuthorizationError(msg)
            | AppError::InternalError(msg) => msg,
        }
    }

    /// 서버 측 장애 여부 (5xx)
    pub fn is_server_error(&self) -> bool {
        matches!(
            self,
            AppError::DatabaseError(_) | AppError::RedisError(_) | AppError::InternalError(_)
        )
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::AuthorizationError(_) => StatusCode::FORBIDDEN,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 서버 내부 장애의 상세 내용은 로그에만 남기고 클라이언트에게는 노출하지 않습니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status_code();

        let message = if self.is_server_error() {
            "Internal server error"
        } else {
            self.message()
        };

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "status": status.as_u16(),
                "error": status.canonical_reason().unwrap_or("Unknown"),
                "message": message
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 모듈 라벨과 함께 에러를 로깅하는 공용 헬퍼
///
/// 5xx 계열은 `error`, 나머지는 `warn` 레벨로 기록한 뒤 에러를 그대로 돌려줍니다.
pub fn log_error(label: &str, error: AppError) -> AppError {
    if error.is_server_error() {
        log::error!("[{}] {}", label, error);
    } else {
        log::warn!("[{}] {}", label, error);
    }
    error
}

/// `AppResult`에 모듈 라벨 로깅을 붙이는 확장 trait
pub trait ErrorLogging<T> {
    /// 실패한 경우 라벨과 함께 로깅합니다.
    fn log_with(self, label: &str) -> AppResult<T>;
}

impl<T> ErrorLogging<T> for AppResult<T> {
    fn log_with(self, label: &str) -> AppResult<T> {
        self.map_err(|e| log_error(label, e))
    }
}

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(error: mongodb::error::Error) -> Self {
        AppError::DatabaseError(error.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::ValidationError(errors.to_string())
    }
}
