use crate::auth::application::use_cases::login_admin::{LoginError, LoginRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::Deserialize;
use serde::Serialize;
use tracing::{error, info, warn};

/// Login request from client
#[derive(Deserialize)]
pub struct LoginRequestDto {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    access_token: String,
    admin: LoginAdminInfo,
}

#[derive(Serialize)]
pub struct LoginAdminInfo {
    id: String,
    email: String,
}

#[post("/api/auth/login")]
pub async fn login_admin_handler(
    req: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let use_case = &data.login_admin_use_case;
    let dto = req.into_inner();

    info!(email = %dto.email, "Login attempt");

    let request = match LoginRequest::new(&dto.email, &dto.password) {
        Ok(req) => req,
        Err(e) => {
            return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string());
        }
    };

    match use_case.execute(request).await {
        Ok(response) => {
            info!(
                admin_id = %response.admin.id,
                email = %response.admin.email,
                "Admin logged in successfully"
            );

            ApiResponse::success(LoginResponse {
                access_token: response.access_token,
                admin: LoginAdminInfo {
                    id: response.admin.id.to_string(),
                    email: response.admin.email,
                },
            })
        }

        Err(LoginError::InvalidCredentials) => {
            warn!("Login failed: Invalid credentials");
            ApiResponse::unauthorized(
                "INVALID_CREDENTIALS",
                "이메일 또는 비밀번호가 올바르지 않습니다.",
            )
        }

        Err(LoginError::InvalidEmail | LoginError::EmptyPassword) => {
            // LoginRequest::new already rejects these; kept for exhaustiveness
            ApiResponse::bad_request("VALIDATION_ERROR", "Invalid login payload")
        }

        Err(LoginError::Internal(ref e)) => {
            error!(error = %e, "Login failed");
            ApiResponse::internal_error()
        }
    }
}
