use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;

use crate::inquiry::application::ports::outgoing::{InquiryQuery, InquiryQueryError};
use crate::inquiry::domain::entities::{Inquiry, InquiryStatus};
use crate::portfolio::application::ports::outgoing::{PortfolioQuery, PortfolioQueryError};

const RECENT_INQUIRIES_LIMIT: u64 = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardStats {
    pub total_inquiries: u64,
    pub pending_inquiries: u64,
    pub total_portfolios: u64,
    pub recent_inquiries: Vec<Inquiry>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GetDashboardStatsError {
    #[error("Query error: {0}")]
    QueryError(String),
}

impl From<InquiryQueryError> for GetDashboardStatsError {
    fn from(e: InquiryQueryError) -> Self {
        GetDashboardStatsError::QueryError(e.to_string())
    }
}

impl From<PortfolioQueryError> for GetDashboardStatsError {
    fn from(e: PortfolioQueryError) -> Self {
        GetDashboardStatsError::QueryError(e.to_string())
    }
}

#[async_trait]
pub trait IGetDashboardStatsUseCase: Send + Sync {
    async fn execute(&self) -> Result<DashboardStats, GetDashboardStatsError>;
}

pub struct GetDashboardStatsUseCase {
    inquiry_query: Arc<dyn InquiryQuery>,
    portfolio_query: Arc<dyn PortfolioQuery>,
}

impl GetDashboardStatsUseCase {
    pub fn new(
        inquiry_query: Arc<dyn InquiryQuery>,
        portfolio_query: Arc<dyn PortfolioQuery>,
    ) -> Self {
        Self {
            inquiry_query,
            portfolio_query,
        }
    }
}

#[async_trait]
impl IGetDashboardStatsUseCase for GetDashboardStatsUseCase {
    async fn execute(&self) -> Result<DashboardStats, GetDashboardStatsError> {
        let (total_inquiries, pending_inquiries, total_portfolios, recent_inquiries) =
            futures::try_join!(
                async {
                    self.inquiry_query
                        .count_all()
                        .await
                        .map_err(GetDashboardStatsError::from)
                },
                async {
                    self.inquiry_query
                        .count_by_status(InquiryStatus::Pending)
                        .await
                        .map_err(GetDashboardStatsError::from)
                },
                async {
                    self.portfolio_query
                        .count_all()
                        .await
                        .map_err(GetDashboardStatsError::from)
                },
                async {
                    self.inquiry_query
                        .recent(RECENT_INQUIRIES_LIMIT)
                        .await
                        .map_err(GetDashboardStatsError::from)
                },
            )?;

        Ok(DashboardStats {
            total_inquiries,
            pending_inquiries,
            total_portfolios,
            recent_inquiries,
        })
    }
}
