use std::sync::Arc;

use actix_web::web;
use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::token_provider::{
    TokenClaims, TokenError, TokenProvider,
};
use crate::auth::application::use_cases::login_admin::{
    ILoginAdminUseCase, LoginAdminResponse, LoginError, LoginRequest,
};
use crate::content::application::use_cases::{
    get_site_content::{GetContentError, IGetSiteContentUseCase},
    save_site_content::{ISaveSiteContentUseCase, SaveContentError},
};
use crate::content::domain::entities::SiteContent;
use crate::dashboard::application::use_cases::get_dashboard_stats::{
    DashboardStats, GetDashboardStatsError, IGetDashboardStatsUseCase,
};
use crate::inquiry::application::use_cases::{
    get_inquiries::{GetInquiriesError, IGetInquiriesUseCase},
    set_inquiry_status::{ISetInquiryStatusUseCase, SetInquiryStatusError},
    submit_inquiry::{ISubmitInquiryUseCase, SubmitInquiryCommand, SubmitInquiryError},
};
use crate::inquiry::domain::entities::{Inquiry, InquiryStatus};
use crate::portfolio::application::use_cases::{
    create_portfolio::{CreatePortfolioError, ICreatePortfolioUseCase, PortfolioDraft},
    delete_portfolio::{DeletePortfolioError, IDeletePortfolioUseCase},
    get_portfolios::{GetPortfoliosError, IGetPortfoliosUseCase},
    update_portfolio::{IUpdatePortfolioUseCase, UpdatePortfolioError},
};
use crate::portfolio::domain::entities::Portfolio;
use crate::service::application::use_cases::get_services::{
    GetServicesError, IGetServicesUseCase,
};
use crate::service::domain::entities::Service;

#[derive(Default, Clone)]
pub struct StubLoginAdminUseCase;

#[async_trait]
impl ILoginAdminUseCase for StubLoginAdminUseCase {
    async fn execute(&self, _request: LoginRequest) -> Result<LoginAdminResponse, LoginError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetSiteContentUseCase;

#[async_trait]
impl IGetSiteContentUseCase for StubGetSiteContentUseCase {
    async fn execute(&self) -> Result<SiteContent, GetContentError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubSaveSiteContentUseCase;

#[async_trait]
impl ISaveSiteContentUseCase for StubSaveSiteContentUseCase {
    async fn execute(&self, _content: SiteContent) -> Result<(), SaveContentError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetServicesUseCase;

#[async_trait]
impl IGetServicesUseCase for StubGetServicesUseCase {
    async fn execute(&self) -> Result<Vec<Service>, GetServicesError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetPortfoliosUseCase;

#[async_trait]
impl IGetPortfoliosUseCase for StubGetPortfoliosUseCase {
    async fn execute(&self) -> Result<Vec<Portfolio>, GetPortfoliosError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubCreatePortfolioUseCase;

#[async_trait]
impl ICreatePortfolioUseCase for StubCreatePortfolioUseCase {
    async fn execute(&self, _draft: PortfolioDraft) -> Result<Portfolio, CreatePortfolioError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUpdatePortfolioUseCase;

#[async_trait]
impl IUpdatePortfolioUseCase for StubUpdatePortfolioUseCase {
    async fn execute(
        &self,
        _id: Uuid,
        _draft: PortfolioDraft,
    ) -> Result<Portfolio, UpdatePortfolioError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeletePortfolioUseCase;

#[async_trait]
impl IDeletePortfolioUseCase for StubDeletePortfolioUseCase {
    async fn execute(&self, _id: Uuid) -> Result<(), DeletePortfolioError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubSubmitInquiryUseCase;

#[async_trait]
impl ISubmitInquiryUseCase for StubSubmitInquiryUseCase {
    async fn execute(
        &self,
        _command: SubmitInquiryCommand,
    ) -> Result<Inquiry, SubmitInquiryError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetInquiriesUseCase;

#[async_trait]
impl IGetInquiriesUseCase for StubGetInquiriesUseCase {
    async fn execute(
        &self,
        _status: Option<InquiryStatus>,
    ) -> Result<Vec<Inquiry>, GetInquiriesError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubSetInquiryStatusUseCase;

#[async_trait]
impl ISetInquiryStatusUseCase for StubSetInquiryStatusUseCase {
    async fn execute(
        &self,
        _id: Uuid,
        _status: InquiryStatus,
    ) -> Result<(), SetInquiryStatusError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetDashboardStatsUseCase;

#[async_trait]
impl IGetDashboardStatsUseCase for StubGetDashboardStatsUseCase {
    async fn execute(&self) -> Result<DashboardStats, GetDashboardStatsError> {
        unimplemented!("Not used in this test")
    }
}

/// Token provider that accepts any bearer token and resolves it to the
/// given admin id.
pub struct AcceptingTokenProvider {
    admin_id: Uuid,
}

impl TokenProvider for AcceptingTokenProvider {
    fn generate_access_token(&self, admin_id: Uuid) -> Result<String, TokenError> {
        Ok(format!("test.token.{admin_id}"))
    }

    fn verify_token(&self, _token: &str) -> Result<TokenClaims, TokenError> {
        let now = chrono::Utc::now().timestamp();
        Ok(TokenClaims {
            sub: self.admin_id,
            exp: now + 3600,
            iat: now,
            nbf: now,
            token_type: "access".to_string(),
        })
    }
}

/// Token provider that rejects every token.
pub struct RejectingTokenProvider;

impl TokenProvider for RejectingTokenProvider {
    fn generate_access_token(&self, _admin_id: Uuid) -> Result<String, TokenError> {
        Err(TokenError::EncodingError("rejecting provider".to_string()))
    }

    fn verify_token(&self, _token: &str) -> Result<TokenClaims, TokenError> {
        Err(TokenError::InvalidSignature)
    }
}

pub fn accepting_token_provider(admin_id: Uuid) -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
    let provider: Arc<dyn TokenProvider + Send + Sync> =
        Arc::new(AcceptingTokenProvider { admin_id });
    web::Data::new(provider)
}

pub fn rejecting_token_provider() -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
    let provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(RejectingTokenProvider);
    web::Data::new(provider)
}
