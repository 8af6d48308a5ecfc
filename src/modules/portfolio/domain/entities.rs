use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Closed category set; unknown wire values are rejected at
/// deserialization time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PortfolioCategory {
    BrandMarketing,
    PerformanceMarketing,
    SocialMedia,
    Seo,
    Crm,
    Other,
}

impl PortfolioCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            PortfolioCategory::BrandMarketing => "brand_marketing",
            PortfolioCategory::PerformanceMarketing => "performance_marketing",
            PortfolioCategory::SocialMedia => "social_media",
            PortfolioCategory::Seo => "seo",
            PortfolioCategory::Crm => "crm",
            PortfolioCategory::Other => "other",
        }
    }

    /// Korean display label, as shown in the admin console and on the
    /// public portfolio grid.
    pub fn label(&self) -> &'static str {
        match self {
            PortfolioCategory::BrandMarketing => "브랜드 마케팅",
            PortfolioCategory::PerformanceMarketing => "퍼포먼스 마케팅",
            PortfolioCategory::SocialMedia => "소셜 미디어",
            PortfolioCategory::Seo => "SEO",
            PortfolioCategory::Crm => "CRM",
            PortfolioCategory::Other => "기타",
        }
    }

    /// Lenient parse for stored values; rows written before the category
    /// set was closed degrade to `Other` instead of failing the list.
    pub fn parse_stored(value: &str) -> Self {
        match value {
            "brand_marketing" => PortfolioCategory::BrandMarketing,
            "performance_marketing" => PortfolioCategory::PerformanceMarketing,
            "social_media" => PortfolioCategory::SocialMedia,
            "seo" => PortfolioCategory::Seo,
            "crm" => PortfolioCategory::Crm,
            _ => PortfolioCategory::Other,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Portfolio {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub category: PortfolioCategory,
    pub category_label: String,
    pub client_name: String,
    pub project_date: Option<NaiveDate>,
    pub is_featured: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
