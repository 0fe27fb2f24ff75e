//! Authentication HTTP Handlers
//!
//! 이메일/비밀번호 기반의 가입과 로그인, JWT 토큰 갱신을 처리합니다.
//!
//! - `POST /auth/signup`, `POST /auth/signin`: 공개
//! - `POST /auth/refresh`: `Authorization: Bearer <refresh_token>`
//! - `POST /auth/logout`, `GET /auth/me`: 액세스 토큰 필요
use actix_web::{get, post, web, HttpRequest, HttpResponse};
use actix_web::http::header::AUTHORIZATION;
use validator::Validate;
use crate::domain::dto::{DataResponse, SignInRequest, SignUpRequest};
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::{AppError, ErrorLogging};
use crate::handlers::inject::Inject;
use crate::middlewares::AuthMiddleware;
use crate::services::auth::{AuthService, TokenService};

const LOG_LABEL: &str = "AUTH-CONTROLLER";

#[post("/signup")]
pub async fn sign_up(
    auth: Inject<AuthService>,
    payload: web::Json<SignUpRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate().map_err(AppError::from).log_with(LOG_LABEL)?;

    let response = auth.sign_up(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(DataResponse::new(response)))
}

#[post("/signin")]
pub async fn sign_in(
    auth: Inject<AuthService>,
    payload: web::Json<SignInRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate().map_err(AppError::from).log_with(LOG_LABEL)?;

    let response = auth.sign_in(payload.into_inner()).await?;

    log::info!("로그인 성공 - 사용자: {}", response.user.email);
    Ok(HttpResponse::Ok().json(DataResponse::new(response)))
}

#[post("/refresh")]
pub async fn refresh_tokens(
    auth: Inject<AuthService>,
    tokens: Inject<TokenService>,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let auth_header = req.headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::AuthenticationError("Authorization 헤더가 없습니다".to_string()))
        .log_with(LOG_LABEL)?;

    let refresh_token = tokens
        .extract_bearer_token(auth_header)
        .log_with(LOG_LABEL)?
        .to_string();

    let refreshed = auth.refresh_tokens(&refresh_token).await?;

    Ok(HttpResponse::Ok().json(DataResponse::new(refreshed)))
}

#[post("/logout", wrap = "AuthMiddleware::required()")]
pub async fn logout(
    auth: Inject<AuthService>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    auth.logout(&user.user_id).await?;

    Ok(HttpResponse::NoContent().finish())
}

#[get("/me", wrap = "AuthMiddleware::required()")]
pub async fn get_current_user(
    auth: Inject<AuthService>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let profile = auth.get_profile(&user.user_id).await?;

    Ok(HttpResponse::Ok().json(DataResponse::new(profile)))
}
