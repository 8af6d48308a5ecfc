use serde::{Deserialize, Serialize};

/// The three editable landing-page sections. Each is stored as one row in
/// `site_content`, keyed by its wire name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKey {
    Hero,
    About,
    Contact,
}

impl SectionKey {
    pub const ALL: [SectionKey; 3] = [SectionKey::Hero, SectionKey::About, SectionKey::Contact];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKey::Hero => "hero",
            SectionKey::About => "about",
            SectionKey::Contact => "contact",
        }
    }
}

/// Unknown keys are rejected so a typo in the editor cannot silently park
/// dead data in the stored document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HeroContent {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub cta_text: String,
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AboutContent {
    pub title: String,
    pub description: String,
    pub projects: u32,
    pub satisfaction: u32,
    pub experience: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContactContent {
    pub phone: String,
    pub email: String,
    pub address: String,
}

impl Default for HeroContent {
    fn default() -> Self {
        Self {
            title: "마케팅 전문가".to_string(),
            subtitle: "당신의 비즈니스를 성장시키는".to_string(),
            description: "데이터 기반의 전략적 마케팅으로 브랜드 가치를 높이고, \
                          매출 성장을 이끌어냅니다. 10년 이상의 경험과 120+ 성공 \
                          프로젝트가 증명합니다."
                .to_string(),
            cta_text: "무료 상담 받기".to_string(),
            image_url: String::new(),
        }
    }
}

impl Default for AboutContent {
    fn default() -> Self {
        Self {
            title: "About Us".to_string(),
            description: "우리는 데이터와 창의성을 결합하여 비즈니스 성장을 이끄는 \
                          마케팅 전문가 팀입니다. 각 브랜드의 고유한 가치를 발굴하고, \
                          타겟 고객에게 효과적으로 전달하는 것이 우리의 미션입니다."
                .to_string(),
            projects: 120,
            satisfaction: 95,
            experience: 10,
        }
    }
}

impl Default for ContactContent {
    fn default() -> Self {
        Self {
            phone: "02-1234-5678".to_string(),
            email: "contact@agency.com".to_string(),
            address: "서울시 강남구 테헤란로 123".to_string(),
        }
    }
}

/// Fully resolved site content, one record per section.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteContent {
    pub hero: HeroContent,
    pub about: AboutContent,
    pub contact: ContactContent,
}
