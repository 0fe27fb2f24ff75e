//! JWT 인증 미들웨어
//!
//! ActixWeb 요청 파이프라인에서 액세스 토큰을 검증하고 사용자 정보를 추출합니다.
//!
//! | 상황 | Required | Optional |
//! |------|----------|----------|
//! | 토큰 없음/무효 | 401 | 익명으로 진행 |
//! | 역할 부족 | 403 | 익명으로 진행 |
//! | 성공 | `AuthenticatedUser` 저장 | `AuthenticatedUser` 저장 |

use std::future::{ready, Ready};
use std::rc::Rc;
use std::sync::Arc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
    body::EitherBody,
};
use crate::config::Role;
use crate::domain::models::auth::{AuthMode, RequiredRole};
use crate::middlewares::auth_inner::AuthMiddlewareService;
use crate::services::auth::TokenService;

pub struct AuthMiddleware {
    mode: AuthMode,
    required_role: Option<RequiredRole>,
    /// 지정하지 않으면 요청 시점에 `TokenService` 싱글톤을 사용합니다.
    token_service: Option<Arc<TokenService>>,
}

impl AuthMiddleware {
    pub fn new(mode: AuthMode) -> Self {
        Self {
            mode,
            required_role: None,
            token_service: None,
        }
    }

    pub fn new_with_role(mode: AuthMode, required_role: RequiredRole) -> Self {
        Self {
            mode,
            required_role: Some(required_role),
            token_service: None,
        }
    }

    pub fn required() -> Self {
        Self::new(AuthMode::Required)
    }

    pub fn optional() -> Self {
        Self::new(AuthMode::Optional)
    }

    pub fn required_with_role(role: &str) -> Self {
        Self::new_with_role(AuthMode::Required, RequiredRole::single(role))
    }

    pub fn required_with_roles(roles: Vec<&str>) -> Self {
        Self::new_with_role(AuthMode::Required, RequiredRole::any(roles))
    }

    /// 관리자 전용 라우트
    pub fn admin() -> Self {
        Self::required_with_role(Role::Admin.as_str())
    }

    /// 일반 사용자 또는 관리자 라우트
    pub fn user() -> Self {
        Self::required_with_roles(vec![Role::User.as_str(), Role::Admin.as_str()])
    }

    pub fn with_token_service(mut self, token_service: Arc<TokenService>) -> Self {
        self.token_service = Some(token_service);
        self
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            mode: self.mode.clone(),
            required_role: self.required_role.clone(),
            token_service: self.token_service.clone(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, web, App, HttpResponse};
    use chrono::Duration;
    use mongodb::bson::oid::ObjectId;
    use crate::domain::entities::users::user::User;
    use crate::domain::models::auth::{AuthenticatedUser, OptionalUser};
    use crate::domain::models::token::TokenKind;
    use crate::services::auth::TokenSettings;

    fn token_service() -> Arc<TokenService> {
        Arc::new(TokenService::with_settings(TokenSettings {
            access_secret: "access-secret-for-tests".to_string(),
            refresh_secret: "refresh-secret-for-tests".to_string(),
            access_ttl: Duration::minutes(15),
            refresh_ttl: Duration::days(7),
        }))
    }

    fn token_for(tokens: &TokenService, is_admin: bool, kind: TokenKind) -> String {
        let mut user = User::new_local(
            "buyer@shop.example".to_string(),
            "buyer".to_string(),
            "hash".to_string(),
            is_admin,
        );
        user.id = Some(ObjectId::new());
        tokens.generate_token(&user, kind).unwrap()
    }

    async fn whoami(user: AuthenticatedUser) -> HttpResponse {
        HttpResponse::Ok().body(user.email)
    }

    async fn maybe(user: OptionalUser) -> HttpResponse {
        HttpResponse::Ok().body(if user.0.is_some() { "user" } else { "anonymous" })
    }

    #[actix_web::test]
    async fn test_required_rejects_missing_token() {
        let app = test::init_service(
            App::new().service(
                web::resource("/me")
                    .wrap(AuthMiddleware::required().with_token_service(token_service()))
                    .to(whoami),
            ),
        ).await;

        let res = test::call_service(&app, test::TestRequest::get().uri("/me").to_request()).await;

        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        let body: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(body["status"], 401);
    }

    #[actix_web::test]
    async fn test_required_accepts_access_token() {
        let tokens = token_service();
        let token = token_for(&tokens, false, TokenKind::Access);
        let app = test::init_service(
            App::new().service(
                web::resource("/me")
                    .wrap(AuthMiddleware::user().with_token_service(tokens))
                    .to(whoami),
            ),
        ).await;

        let req = test::TestRequest::get()
            .uri("/me")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(test::read_body(res).await, web::Bytes::from_static(b"buyer@shop.example"));
    }

    #[actix_web::test]
    async fn test_refresh_token_is_not_an_access_token() {
        let tokens = token_service();
        let token = token_for(&tokens, false, TokenKind::Refresh);
        let app = test::init_service(
            App::new().service(
                web::resource("/me")
                    .wrap(AuthMiddleware::required().with_token_service(tokens))
                    .to(whoami),
            ),
        ).await;

        let req = test::TestRequest::get()
            .uri("/me")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_admin_route_forbids_plain_user() {
        let tokens = token_service();
        let user_token = token_for(&tokens, false, TokenKind::Access);
        let admin_token = token_for(&tokens, true, TokenKind::Access);
        let app = test::init_service(
            App::new().service(
                web::resource("/admin")
                    .wrap(AuthMiddleware::admin().with_token_service(tokens))
                    .to(whoami),
            ),
        ).await;

        let forbidden = test::TestRequest::get()
            .uri("/admin")
            .insert_header(("Authorization", format!("Bearer {}", user_token)))
            .to_request();
        assert_eq!(test::call_service(&app, forbidden).await.status(), StatusCode::FORBIDDEN);

        let allowed = test::TestRequest::get()
            .uri("/admin")
            .insert_header(("Authorization", format!("Bearer {}", admin_token)))
            .to_request();
        assert_eq!(test::call_service(&app, allowed).await.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_optional_allows_anonymous() {
        let app = test::init_service(
            App::new().service(
                web::resource("/maybe")
                    .wrap(AuthMiddleware::optional().with_token_service(token_service()))
                    .to(maybe),
            ),
        ).await;

        let req = test::TestRequest::get()
            .uri("/maybe")
            .insert_header(("Authorization", "Bearer garbage"))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(test::read_body(res).await, web::Bytes::from_static(b"anonymous"));
    }
}
