pub mod modules;
pub use modules::auth;
pub use modules::content;
pub use modules::dashboard;
pub use modules::inquiry;
pub use modules::portfolio;
pub use modules::service;
pub mod health;
pub mod shared;

use crate::auth::adapter::outgoing::admin_query_postgres::AdminQueryPostgres;
use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::use_cases::login_admin::{ILoginAdminUseCase, LoginAdminUseCase};
use crate::content::adapter::outgoing::content_repository_postgres::ContentRepositoryPostgres;
use crate::content::application::use_cases::{
    get_site_content::{GetSiteContentUseCase, IGetSiteContentUseCase},
    save_site_content::{ISaveSiteContentUseCase, SaveSiteContentUseCase},
};
use crate::dashboard::application::use_cases::get_dashboard_stats::{
    GetDashboardStatsUseCase, IGetDashboardStatsUseCase,
};
use crate::inquiry::adapter::outgoing::{InquiryQueryPostgres, InquiryRepositoryPostgres};
use crate::inquiry::application::use_cases::{
    get_inquiries::{GetInquiriesUseCase, IGetInquiriesUseCase},
    set_inquiry_status::{ISetInquiryStatusUseCase, SetInquiryStatusUseCase},
    submit_inquiry::{ISubmitInquiryUseCase, SubmitInquiryUseCase},
};
use crate::portfolio::adapter::outgoing::portfolio_query_postgres::PortfolioQueryPostgres;
use crate::portfolio::adapter::outgoing::portfolio_repository_postgres::PortfolioRepositoryPostgres;
use crate::portfolio::application::use_cases::{
    create_portfolio::{CreatePortfolioUseCase, ICreatePortfolioUseCase},
    delete_portfolio::{DeletePortfolioUseCase, IDeletePortfolioUseCase},
    get_portfolios::{GetPortfoliosUseCase, IGetPortfoliosUseCase},
    update_portfolio::{IUpdatePortfolioUseCase, UpdatePortfolioUseCase},
};
use crate::service::adapter::outgoing::service_query_postgres::ServiceQueryPostgres;
use crate::service::application::use_cases::get_services::{
    GetServicesUseCase, IGetServicesUseCase,
};

use actix_web::{web, App, HttpServer};
use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub login_admin_use_case: Arc<dyn ILoginAdminUseCase + Send + Sync>,
    pub get_site_content_use_case: Arc<dyn IGetSiteContentUseCase + Send + Sync>,
    pub save_site_content_use_case: Arc<dyn ISaveSiteContentUseCase + Send + Sync>,
    pub get_services_use_case: Arc<dyn IGetServicesUseCase + Send + Sync>,
    pub get_portfolios_use_case: Arc<dyn IGetPortfoliosUseCase + Send + Sync>,
    pub create_portfolio_use_case: Arc<dyn ICreatePortfolioUseCase + Send + Sync>,
    pub update_portfolio_use_case: Arc<dyn IUpdatePortfolioUseCase + Send + Sync>,
    pub delete_portfolio_use_case: Arc<dyn IDeletePortfolioUseCase + Send + Sync>,
    pub submit_inquiry_use_case: Arc<dyn ISubmitInquiryUseCase + Send + Sync>,
    pub get_inquiries_use_case: Arc<dyn IGetInquiriesUseCase + Send + Sync>,
    pub set_inquiry_status_use_case: Arc<dyn ISetInquiryStatusUseCase + Send + Sync>,
    pub get_dashboard_stats_use_case: Arc<dyn IGetDashboardStatsUseCase + Send + Sync>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    use crate::auth::adapter::outgoing::security::argon2_hasher::Argon2Hasher;
    use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
    use crate::inquiry::application::ports::outgoing::InquiryQuery;
    use crate::portfolio::application::ports::outgoing::PortfolioQuery;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");

    let server_url = format!("{host}:{port}");
    info!("Server run on: {}", server_url);

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    let db_arc = Arc::new(conn);

    let jwt_service = JwtTokenService::new(JwtConfig::from_env());
    let argon2_password_hasher = Argon2Hasher::from_env();

    let admin_query = AdminQueryPostgres::new(Arc::clone(&db_arc));
    let login_admin_use_case = LoginAdminUseCase::new(
        admin_query,
        Arc::new(argon2_password_hasher),
        Arc::new(jwt_service.clone()),
    );

    let content_repo = ContentRepositoryPostgres::new(Arc::clone(&db_arc));
    let get_site_content_use_case = GetSiteContentUseCase::new(content_repo.clone());
    let save_site_content_use_case = SaveSiteContentUseCase::new(content_repo);

    let service_query = ServiceQueryPostgres::new(Arc::clone(&db_arc));
    let get_services_use_case = GetServicesUseCase::new(service_query);

    let portfolio_query = PortfolioQueryPostgres::new(Arc::clone(&db_arc));
    let portfolio_repo = PortfolioRepositoryPostgres::new(Arc::clone(&db_arc));
    let get_portfolios_use_case = GetPortfoliosUseCase::new(portfolio_query.clone());
    let create_portfolio_use_case = CreatePortfolioUseCase::new(portfolio_repo.clone());
    let update_portfolio_use_case = UpdatePortfolioUseCase::new(portfolio_repo.clone());
    let delete_portfolio_use_case = DeletePortfolioUseCase::new(portfolio_repo);

    let inquiry_query = InquiryQueryPostgres::new(Arc::clone(&db_arc));
    let inquiry_repo = InquiryRepositoryPostgres::new(Arc::clone(&db_arc));
    let submit_inquiry_use_case = SubmitInquiryUseCase::new(inquiry_repo.clone());
    let get_inquiries_use_case = GetInquiriesUseCase::new(inquiry_query.clone());
    let set_inquiry_status_use_case = SetInquiryStatusUseCase::new(inquiry_repo);

    let inquiry_query_arc: Arc<dyn InquiryQuery> = Arc::new(inquiry_query);
    let portfolio_query_arc: Arc<dyn PortfolioQuery> = Arc::new(portfolio_query);
    let get_dashboard_stats_use_case =
        GetDashboardStatsUseCase::new(inquiry_query_arc, portfolio_query_arc);

    let state = AppState {
        login_admin_use_case: Arc::new(login_admin_use_case),
        get_site_content_use_case: Arc::new(get_site_content_use_case),
        save_site_content_use_case: Arc::new(save_site_content_use_case),
        get_services_use_case: Arc::new(get_services_use_case),
        get_portfolios_use_case: Arc::new(get_portfolios_use_case),
        create_portfolio_use_case: Arc::new(create_portfolio_use_case),
        update_portfolio_use_case: Arc::new(update_portfolio_use_case),
        delete_portfolio_use_case: Arc::new(delete_portfolio_use_case),
        submit_inquiry_use_case: Arc::new(submit_inquiry_use_case),
        get_inquiries_use_case: Arc::new(get_inquiries_use_case),
        set_inquiry_status_use_case: Arc::new(set_inquiry_status_use_case),
        get_dashboard_stats_use_case: Arc::new(get_dashboard_stats_use_case),
    };

    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);
    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(crate::shared::api::custom_json_config())
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Public site
    cfg.service(crate::content::adapter::incoming::web::routes::get_content::get_content_handler);
    cfg.service(crate::service::adapter::incoming::web::routes::get_services::get_services_handler);
    cfg.service(
        crate::portfolio::adapter::incoming::web::routes::get_portfolios::get_portfolios_handler,
    );
    cfg.service(
        crate::inquiry::adapter::incoming::web::routes::submit_contact::submit_contact_handler,
    );
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::login_admin::login_admin_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::get_session::get_session_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::logout_admin::logout_admin_handler);
    // Admin console
    cfg.service(
        crate::dashboard::adapter::incoming::web::routes::get_dashboard::get_dashboard_handler,
    );
    cfg.service(
        crate::content::adapter::incoming::web::routes::get_admin_content::get_admin_content_handler,
    );
    cfg.service(
        crate::content::adapter::incoming::web::routes::update_content::update_content_handler,
    );
    cfg.service(
        crate::portfolio::adapter::incoming::web::routes::create_portfolio::create_portfolio_handler,
    );
    cfg.service(
        crate::portfolio::adapter::incoming::web::routes::update_portfolio::update_portfolio_handler,
    );
    cfg.service(
        crate::portfolio::adapter::incoming::web::routes::delete_portfolio::delete_portfolio_handler,
    );
    cfg.service(
        crate::inquiry::adapter::incoming::web::routes::get_inquiries::get_inquiries_handler,
    );
    cfg.service(
        crate::inquiry::adapter::incoming::web::routes::update_inquiry_status::update_inquiry_status_handler,
    );
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
