//! JWT 토큰 관리 서비스 구현
//!
//! JSON Web Token 기반의 인증 시스템을 제공합니다.
//! 액세스 토큰과 리프레시 토큰의 생성, 검증, 지문 계산을 담당합니다.
//!
//! 두 토큰은 서로 다른 비밀키로 서명되므로, 리프레시 토큰으로 API에 접근하거나
//! 액세스 토큰으로 갱신을 요청할 수 없습니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use sha2::{Digest, Sha256};
use singleton_macro::service;
use uuid::Uuid;
use crate::{
    config::JwtConfig,
    domain::entities::users::user::User,
    domain::models::token::{TokenClaims, TokenKind, TokenPair},
    errors::{AppError, AppResult, ErrorContext},
};

/// 서명 키와 만료 시간
///
/// 기본값은 [`JwtConfig`]의 환경 변수에서 읽습니다.
#[derive(Debug, Clone)]
pub struct TokenSettings {
    pub access_secret: String,
    pub refresh_secret: String,
    pub access_ttl: Duration,
    pub refresh_ttl: Duration,
}

impl Default for TokenSettings {
    fn default() -> Self {
        Self {
            access_secret: JwtConfig::access_secret(),
            refresh_secret: JwtConfig::refresh_secret(),
            access_ttl: Duration::minutes(JwtConfig::access_expiration_minutes()),
            refresh_ttl: Duration::days(JwtConfig::refresh_expiration_days()),
        }
    }
}

#[service(name = "token")]
pub struct TokenService {
    settings: TokenSettings,
}

impl TokenService {
    pub fn with_settings(settings: TokenSettings) -> Self {
        Self { settings }
    }

    fn secret(&self, kind: TokenKind) -> &str {
        match kind {
            TokenKind::Access => &self.settings.access_secret,
            TokenKind::Refresh => &self.settings.refresh_secret,
        }
    }

    fn ttl(&self, kind: TokenKind) -> Duration {
        match kind {
            TokenKind::Access => self.settings.access_ttl,
            TokenKind::Refresh => self.settings.refresh_ttl,
        }
    }

    /// 용도별 토큰 생성
    pub fn generate_token(&self, user: &User, kind: TokenKind) -> AppResult<String> {
        let now = Utc::now();
        let expiration = now + self.ttl(kind);

        let claims = TokenClaims {
            sub: user.id_string().ok_or_else(|| {
                AppError::InternalError("사용자 ID가 없습니다".to_string())
            })?,
            email: user.email.clone(),
            roles: user.roles.clone(),
            token_type: kind,
            jti: Uuid::new_v4().to_string(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        let encoding_key = EncodingKey::from_secret(self.secret(kind).as_bytes());

        encode(&Header::default(), &claims, &encoding_key)
            .with_context(|| format!("{} 토큰 생성 실패", kind.as_str()))
    }

    /// 액세스/리프레시 토큰 쌍 생성
    pub fn generate_token_pair(&self, user: &User) -> AppResult<TokenPair> {
        Ok(TokenPair {
            access_token: self.generate_token(user, TokenKind::Access)?,
            refresh_token: self.generate_token(user, TokenKind::Refresh)?,
            expires_in: self.settings.access_ttl.num_seconds(),
        })
    }

    /// 서명, 만료, 토큰 유형을 검증하고 클레임을 반환합니다.
    ///
    /// 모든 검증 실패는 `AuthenticationError`(401)입니다.
    pub fn verify_token(&self, token: &str, kind: TokenKind) -> AppResult<TokenClaims> {
        let decoding_key = DecodingKey::from_secret(self.secret(kind).as_bytes());

        let claims = decode::<TokenClaims>(token, &decoding_key, &Validation::default())
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::AuthenticationError("토큰이 만료되었습니다".to_string())
                },
                _ => AppError::AuthenticationError("유효하지 않은 토큰입니다".to_string()),
            })?;

        if claims.token_type != kind {
            return Err(AppError::AuthenticationError("잘못된 토큰 유형입니다".to_string()));
        }

        Ok(claims)
    }

    pub fn verify_access_token(&self, token: &str) -> AppResult<TokenClaims> {
        self.verify_token(token, TokenKind::Access)
    }

    pub fn verify_refresh_token(&self, token: &str) -> AppResult<TokenClaims> {
        self.verify_token(token, TokenKind::Refresh)
    }

    /// `Authorization` 헤더 값에서 Bearer 토큰을 꺼냅니다.
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> AppResult<&'a str> {
        match auth_header.strip_prefix("Bearer ") {
            Some(token) if !token.trim().is_empty() => Ok(token.trim()),
            _ => Err(AppError::AuthenticationError("유효하지 않은 인증 헤더 형식입니다".to_string())),
        }
    }

    /// 저장용 리프레시 토큰 지문 (SHA-256 hex)
    ///
    /// bcrypt는 72바이트 이후를 무시하므로, 긴 JWT 비교에는 사용할 수 없습니다.
    pub fn fingerprint(&self, token: &str) -> String {
        format!("{:x}", Sha256::digest(token.as_bytes()))
    }
}
