use actix_web::{dev::Payload, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::{
    future::{ready, Ready},
    sync::Arc,
};
use uuid::Uuid;

use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::shared::api::ApiResponse;

/// An authenticated backoffice admin, resolved from the Bearer token.
#[derive(Debug, Clone)]
pub struct AdminSession {
    pub admin_id: Uuid,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AdminSession {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let token_provider =
            match req.app_data::<actix_web::web::Data<Arc<dyn TokenProvider + Send + Sync>>>() {
                Some(provider) => provider,
                None => {
                    return ready(Err(create_api_error(ApiResponse::internal_error())));
                }
            };

        let token = match extract_token_from_header(req) {
            Some(t) => t,
            None => {
                return ready(Err(create_api_error(ApiResponse::unauthorized(
                    "AUTH_REQUIRED",
                    "Missing or invalid authorization header",
                ))));
            }
        };

        match token_provider.verify_token(&token) {
            Ok(claims) => {
                if claims.token_type != "access" {
                    return ready(Err(create_api_error(ApiResponse::unauthorized(
                        "INVALID_TOKEN_TYPE",
                        "Invalid token type",
                    ))));
                }

                ready(Ok(AdminSession {
                    admin_id: claims.sub,
                }))
            }
            Err(_) => ready(Err(create_api_error(ApiResponse::unauthorized(
                "INVALID_TOKEN",
                "Invalid or expired token",
            )))),
        }
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::ports::outgoing::token_provider::{TokenClaims, TokenError};
    use actix_web::{get, test, web, App, Responder};
    use chrono::Utc;

    struct StaticTokenProvider {
        claims: Result<TokenClaims, TokenError>,
    }

    impl TokenProvider for StaticTokenProvider {
        fn generate_access_token(&self, _admin_id: Uuid) -> Result<String, TokenError> {
            Ok("unused".to_string())
        }

        fn verify_token(&self, _token: &str) -> Result<TokenClaims, TokenError> {
            self.claims.clone()
        }
    }

    fn access_claims(admin_id: Uuid) -> TokenClaims {
        let now = Utc::now().timestamp();
        TokenClaims {
            sub: admin_id,
            exp: now + 3600,
            iat: now,
            nbf: now,
            token_type: "access".to_string(),
        }
    }

    #[get("/protected")]
    async fn protected_handler(session: AdminSession) -> impl Responder {
        ApiResponse::success(serde_json::json!({ "admin_id": session.admin_id }))
    }

    fn provider_data(
        claims: Result<TokenClaims, TokenError>,
    ) -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
        let provider: Arc<dyn TokenProvider + Send + Sync> =
            Arc::new(StaticTokenProvider { claims });
        web::Data::new(provider)
    }

    #[actix_web::test]
    async fn test_valid_access_token_resolves_session() {
        let admin_id = Uuid::new_v4();
        let app = test::init_service(
            App::new()
                .app_data(provider_data(Ok(access_claims(admin_id))))
                .service(protected_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/protected")
            .insert_header(("Authorization", "Bearer some.valid.token"))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["admin_id"], admin_id.to_string());
    }

    #[actix_web::test]
    async fn test_missing_header_is_rejected() {
        let admin_id = Uuid::new_v4();
        let app = test::init_service(
            App::new()
                .app_data(provider_data(Ok(access_claims(admin_id))))
                .service(protected_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/protected").to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "AUTH_REQUIRED");
    }

    #[actix_web::test]
    async fn test_non_bearer_header_is_rejected() {
        let admin_id = Uuid::new_v4();
        let app = test::init_service(
            App::new()
                .app_data(provider_data(Ok(access_claims(admin_id))))
                .service(protected_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/protected")
            .insert_header(("Authorization", "Basic dXNlcjpwYXNz"))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "AUTH_REQUIRED");
    }

    #[actix_web::test]
    async fn test_expired_token_is_rejected() {
        let app = test::init_service(
            App::new()
                .app_data(provider_data(Err(TokenError::TokenExpired)))
                .service(protected_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/protected")
            .insert_header(("Authorization", "Bearer expired.token"))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INVALID_TOKEN");
    }

    #[actix_web::test]
    async fn test_wrong_token_type_is_rejected() {
        let admin_id = Uuid::new_v4();
        let mut claims = access_claims(admin_id);
        claims.token_type = "refresh".to_string();

        let app = test::init_service(
            App::new()
                .app_data(provider_data(Ok(claims)))
                .service(protected_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/protected")
            .insert_header(("Authorization", "Bearer refresh.token"))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INVALID_TOKEN_TYPE");
    }

    #[actix_web::test]
    async fn test_missing_provider_is_internal_error() {
        let app = test::init_service(App::new().service(protected_handler)).await;

        let req = test::TestRequest::get()
            .uri("/protected")
            .insert_header(("Authorization", "Bearer some.token"))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 500);
    }
}
