//! # 인증 서비스 구현
//!
//! 이메일/비밀번호 가입과 로그인, 리프레시 토큰 회전, 로그아웃을 담당합니다.
//!
//! ## 리프레시 토큰 기록
//!
//! 사용자 문서에는 마지막으로 발급한 리프레시 토큰의 SHA-256 지문만 저장됩니다.
//!
//! ```text
//! sign_in  ──► 새 토큰 쌍 발급 ──► 지문 저장 + last_login_at 갱신
//! refresh  ──► 서명 검증 ──► 저장된 지문과 비교 ──► 새 쌍 발급 + 지문 교체
//! logout   ──► 지문 삭제 (이후 기존 리프레시 토큰은 403)
//! ```

use std::sync::Arc;
use bcrypt::{hash, verify};
use singleton_macro::service;
use crate::{
    config::{AdminConfig, PasswordConfig},
    domain::{
        dto::auth::{AuthResponse, SignInRequest, SignUpRequest, TokenResponse, UserResponse},
        entities::users::user::User,
        models::token::TokenPair,
    },
    errors::{AppError, AppResult, ErrorLogging},
    repositories::stores::UserStoreHandle,
    services::auth::TokenService,
    utils::id_utils::parse_object_id,
};

const LOG_LABEL: &str = "AUTH-SERVICE";

#[service(name = "auth")]
pub struct AuthService {
    users: UserStoreHandle,
    token_service: Arc<TokenService>,
}

impl AuthService {
    pub fn with_store(users: UserStoreHandle, token_service: Arc<TokenService>) -> Self {
        Self { users, token_service }
    }

    /// 회원가입
    ///
    /// `ADMIN_EMAILS`에 포함된 이메일은 `admin` 역할을 함께 받습니다.
    pub async fn sign_up(&self, request: SignUpRequest) -> AppResult<AuthResponse> {
        let email = request.email.trim().to_lowercase();

        if self.users.find_by_email(&email).await.log_with(LOG_LABEL)?.is_some() {
            return Err(AppError::ConflictError("Email already registered".to_string()))
                .log_with(LOG_LABEL);
        }

        let password_hash = hash(&request.password, PasswordConfig::bcrypt_cost())
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))
            .log_with(LOG_LABEL)?;

        let is_admin = AdminConfig::is_admin_email(&email);
        let user = User::new_local(email, request.username.trim().to_string(), password_hash, is_admin);

        let created = self.users.insert(user).await.log_with(LOG_LABEL)?;
        log::info!("👤 새 사용자 가입: {} (admin: {})", created.email, is_admin);

        self.issue_tokens(created).await
    }

    /// 로그인
    ///
    /// 이메일이 없거나 비밀번호가 틀린 경우 같은 메시지의 401을 반환합니다.
    pub async fn sign_in(&self, request: SignInRequest) -> AppResult<AuthResponse> {
        let email = request.email.trim().to_lowercase();

        let user = self.users
            .find_by_email(&email)
            .await
            .log_with(LOG_LABEL)?
            .ok_or_else(|| AppError::AuthenticationError("잘못된 이메일 또는 비밀번호입니다".to_string()))
            .log_with(LOG_LABEL)?;

        let is_valid = verify(&request.password, &user.password_hash)
            .map_err(|e| AppError::InternalError(format!("비밀번호 검증 실패: {}", e)))
            .log_with(LOG_LABEL)?;

        if !is_valid {
            return Err(AppError::AuthenticationError("잘못된 이메일 또는 비밀번호입니다".to_string()))
                .log_with(LOG_LABEL);
        }

        if !user.is_active {
            return Err(AppError::AuthenticationError("비활성화된 계정입니다".to_string()))
                .log_with(LOG_LABEL);
        }

        self.issue_tokens(user).await
    }

    /// 리프레시 토큰으로 새 토큰 쌍을 발급합니다.
    ///
    /// 저장된 지문이 없거나(로그아웃) 다르면(이미 회전됨) 403 `Access Denied`입니다.
    pub async fn refresh_tokens(&self, refresh_token: &str) -> AppResult<TokenResponse> {
        let claims = self.token_service.verify_refresh_token(refresh_token).log_with(LOG_LABEL)?;
        let user_id = parse_object_id(&claims.sub, "user").log_with(LOG_LABEL)?;

        let user = self.users
            .find_by_id(&user_id)
            .await
            .log_with(LOG_LABEL)?
            .ok_or_else(|| AppError::AuthorizationError("Access Denied".to_string()))
            .log_with(LOG_LABEL)?;

        let presented = self.token_service.fingerprint(refresh_token);
        if user.refresh_token_hash.as_deref() != Some(presented.as_str()) {
            return Err(AppError::AuthorizationError("Access Denied".to_string()))
                .log_with(LOG_LABEL);
        }

        let pair = self.token_service.generate_token_pair(&user).log_with(LOG_LABEL)?;
        let fingerprint = self.token_service.fingerprint(&pair.refresh_token);

        self.users
            .set_refresh_token_hash(&user_id, Some(&fingerprint))
            .await
            .log_with(LOG_LABEL)?;

        Ok(TokenResponse::from(pair))
    }

    /// 저장된 리프레시 토큰 지문을 삭제합니다.
    pub async fn logout(&self, user_id: &str) -> AppResult<()> {
        let user_id = parse_object_id(user_id, "user").log_with(LOG_LABEL)?;

        self.users
            .set_refresh_token_hash(&user_id, None)
            .await
            .log_with(LOG_LABEL)?;

        log::info!("👋 로그아웃: {}", user_id.to_hex());
        Ok(())
    }

    pub async fn get_profile(&self, user_id: &str) -> AppResult<UserResponse> {
        let user_id = parse_object_id(user_id, "user").log_with(LOG_LABEL)?;

        let user = self.users
            .find_by_id(&user_id)
            .await
            .log_with(LOG_LABEL)?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
            .log_with(LOG_LABEL)?;

        Ok(UserResponse::from(user))
    }

    async fn issue_tokens(&self, user: User) -> AppResult<AuthResponse> {
        let user_id = user.id.ok_or_else(|| {
            AppError::InternalError("사용자 ID가 없습니다".to_string())
        }).log_with(LOG_LABEL)?;

        let pair: TokenPair = self.token_service.generate_token_pair(&user).log_with(LOG_LABEL)?;
        let fingerprint = self.token_service.fingerprint(&pair.refresh_token);

        self.users
            .record_login(&user_id, &fingerprint)
            .await
            .log_with(LOG_LABEL)?;

        Ok(AuthResponse::new(user, pair))
    }
}
