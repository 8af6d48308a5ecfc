use std::sync::Arc;

use actix_web::web;

use crate::auth::application::use_cases::login_admin::ILoginAdminUseCase;
use crate::content::application::use_cases::{
    get_site_content::IGetSiteContentUseCase, save_site_content::ISaveSiteContentUseCase,
};
use crate::dashboard::application::use_cases::get_dashboard_stats::IGetDashboardStatsUseCase;
use crate::inquiry::application::use_cases::{
    get_inquiries::IGetInquiriesUseCase, set_inquiry_status::ISetInquiryStatusUseCase,
    submit_inquiry::ISubmitInquiryUseCase,
};
use crate::portfolio::application::use_cases::{
    create_portfolio::ICreatePortfolioUseCase, delete_portfolio::IDeletePortfolioUseCase,
    get_portfolios::IGetPortfoliosUseCase, update_portfolio::IUpdatePortfolioUseCase,
};
use crate::service::application::use_cases::get_services::IGetServicesUseCase;
use crate::tests::support::stubs::*;
use crate::AppState;

pub struct TestAppStateBuilder {
    login_admin: Option<Arc<dyn ILoginAdminUseCase + Send + Sync>>,
    get_site_content: Option<Arc<dyn IGetSiteContentUseCase + Send + Sync>>,
    save_site_content: Option<Arc<dyn ISaveSiteContentUseCase + Send + Sync>>,
    get_services: Option<Arc<dyn IGetServicesUseCase + Send + Sync>>,
    get_portfolios: Option<Arc<dyn IGetPortfoliosUseCase + Send + Sync>>,
    create_portfolio: Option<Arc<dyn ICreatePortfolioUseCase + Send + Sync>>,
    update_portfolio: Option<Arc<dyn IUpdatePortfolioUseCase + Send + Sync>>,
    delete_portfolio: Option<Arc<dyn IDeletePortfolioUseCase + Send + Sync>>,
    submit_inquiry: Option<Arc<dyn ISubmitInquiryUseCase + Send + Sync>>,
    get_inquiries: Option<Arc<dyn IGetInquiriesUseCase + Send + Sync>>,
    set_inquiry_status: Option<Arc<dyn ISetInquiryStatusUseCase + Send + Sync>>,
    get_dashboard_stats: Option<Arc<dyn IGetDashboardStatsUseCase + Send + Sync>>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            login_admin: Some(Arc::new(StubLoginAdminUseCase)),
            get_site_content: Some(Arc::new(StubGetSiteContentUseCase)),
            save_site_content: Some(Arc::new(StubSaveSiteContentUseCase)),
            get_services: Some(Arc::new(StubGetServicesUseCase)),
            get_portfolios: Some(Arc::new(StubGetPortfoliosUseCase)),
            create_portfolio: Some(Arc::new(StubCreatePortfolioUseCase)),
            update_portfolio: Some(Arc::new(StubUpdatePortfolioUseCase)),
            delete_portfolio: Some(Arc::new(StubDeletePortfolioUseCase)),
            submit_inquiry: Some(Arc::new(StubSubmitInquiryUseCase)),
            get_inquiries: Some(Arc::new(StubGetInquiriesUseCase)),
            set_inquiry_status: Some(Arc::new(StubSetInquiryStatusUseCase)),
            get_dashboard_stats: Some(Arc::new(StubGetDashboardStatsUseCase)),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_login_admin(mut self, uc: impl ILoginAdminUseCase + Send + Sync + 'static) -> Self {
        self.login_admin = Some(Arc::new(uc));
        self
    }

    pub fn with_get_site_content(
        mut self,
        uc: impl IGetSiteContentUseCase + Send + Sync + 'static,
    ) -> Self {
        self.get_site_content = Some(Arc::new(uc));
        self
    }

    pub fn with_save_site_content(
        mut self,
        uc: impl ISaveSiteContentUseCase + Send + Sync + 'static,
    ) -> Self {
        self.save_site_content = Some(Arc::new(uc));
        self
    }

    pub fn with_get_services(
        mut self,
        uc: impl IGetServicesUseCase + Send + Sync + 'static,
    ) -> Self {
        self.get_services = Some(Arc::new(uc));
        self
    }

    pub fn with_get_portfolios(
        mut self,
        uc: impl IGetPortfoliosUseCase + Send + Sync + 'static,
    ) -> Self {
        self.get_portfolios = Some(Arc::new(uc));
        self
    }

    pub fn with_create_portfolio(
        mut self,
        uc: impl ICreatePortfolioUseCase + Send + Sync + 'static,
    ) -> Self {
        self.create_portfolio = Some(Arc::new(uc));
        self
    }

    pub fn with_update_portfolio(
        mut self,
        uc: impl IUpdatePortfolioUseCase + Send + Sync + 'static,
    ) -> Self {
        self.update_portfolio = Some(Arc::new(uc));
        self
    }

    pub fn with_delete_portfolio(
        mut self,
        uc: impl IDeletePortfolioUseCase + Send + Sync + 'static,
    ) -> Self {
        self.delete_portfolio = Some(Arc::new(uc));
        self
    }

    pub fn with_submit_inquiry(
        mut self,
        uc: impl ISubmitInquiryUseCase + Send + Sync + 'static,
    ) -> Self {
        self.submit_inquiry = Some(Arc::new(uc));
        self
    }

    pub fn with_get_inquiries(
        mut self,
        uc: impl IGetInquiriesUseCase + Send + Sync + 'static,
    ) -> Self {
        self.get_inquiries = Some(Arc::new(uc));
        self
    }

    pub fn with_set_inquiry_status(
        mut self,
        uc: impl ISetInquiryStatusUseCase + Send + Sync + 'static,
    ) -> Self {
        self.set_inquiry_status = Some(Arc::new(uc));
        self
    }

    pub fn with_get_dashboard_stats(
        mut self,
        uc: impl IGetDashboardStatsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.get_dashboard_stats = Some(Arc::new(uc));
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            login_admin_use_case: self.login_admin.unwrap(),
            get_site_content_use_case: self.get_site_content.unwrap(),
            save_site_content_use_case: self.save_site_content.unwrap(),
            get_services_use_case: self.get_services.unwrap(),
            get_portfolios_use_case: self.get_portfolios.unwrap(),
            create_portfolio_use_case: self.create_portfolio.unwrap(),
            update_portfolio_use_case: self.update_portfolio.unwrap(),
            delete_portfolio_use_case: self.delete_portfolio.unwrap(),
            submit_inquiry_use_case: self.submit_inquiry.unwrap(),
            get_inquiries_use_case: self.get_inquiries.unwrap(),
            set_inquiry_status_use_case: self.set_inquiry_status.unwrap(),
            get_dashboard_stats_use_case: self.get_dashboard_stats.unwrap(),
        })
    }
}
