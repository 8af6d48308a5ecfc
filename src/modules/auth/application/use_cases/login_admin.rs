use std::sync::Arc;

use async_trait::async_trait;
use email_address::EmailAddress;
use serde::Serialize;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::{AdminQuery, PasswordHasher, TokenProvider};

#[derive(Debug, Clone)]
pub struct LoginRequest {
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LoginError {
    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Password cannot be empty")]
    EmptyPassword,

    /// Deliberately covers both unknown email and wrong password so the
    /// response does not reveal which admin accounts exist.
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Login failed: {0}")]
    Internal(String),
}

impl LoginRequest {
    pub fn new(email: &str, password: &str) -> Result<Self, LoginError> {
        let email = email.trim().to_lowercase();
        if !EmailAddress::is_valid(&email) {
            return Err(LoginError::InvalidEmail);
        }
        if password.trim().is_empty() {
            return Err(LoginError::EmptyPassword);
        }
        Ok(Self {
            email,
            password: password.to_string(),
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AdminInfo {
    pub id: Uuid,
    pub email: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginAdminResponse {
    pub access_token: String,
    pub admin: AdminInfo,
}

#[async_trait]
pub trait ILoginAdminUseCase: Send + Sync {
    async fn execute(&self, request: LoginRequest) -> Result<LoginAdminResponse, LoginError>;
}

pub struct LoginAdminUseCase<Q: AdminQuery> {
    admin_query: Q,
    password_hasher: Arc<dyn PasswordHasher>,
    token_provider: Arc<dyn TokenProvider>,
}

impl<Q: AdminQuery> LoginAdminUseCase<Q> {
    pub fn new(
        admin_query: Q,
        password_hasher: Arc<dyn PasswordHasher>,
        token_provider: Arc<dyn TokenProvider>,
    ) -> Self {
        Self {
            admin_query,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<Q: AdminQuery> ILoginAdminUseCase for LoginAdminUseCase<Q> {
    async fn execute(&self, request: LoginRequest) -> Result<LoginAdminResponse, LoginError> {
        let admin = self
            .admin_query
            .find_by_email(request.email())
            .await
            .map_err(LoginError::Internal)?
            .ok_or(LoginError::InvalidCredentials)?;

        let matches = self
            .password_hasher
            .verify_password(&request.password, &admin.password_hash)
            .await
            .map_err(|e| LoginError::Internal(e.to_string()))?;

        if !matches {
            return Err(LoginError::InvalidCredentials);
        }

        let access_token = self
            .token_provider
            .generate_access_token(admin.id)
            .map_err(|e| LoginError::Internal(e.to_string()))?;

        Ok(LoginAdminResponse {
            access_token,
            admin: AdminInfo {
                id: admin.id,
                email: admin.email,
            },
        })
    }
}
