pub mod entities;

pub use entities::{AboutContent, ContactContent, HeroContent, SectionKey, SiteContent};
