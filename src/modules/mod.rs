pub mod auth;
pub mod content;
pub mod dashboard;
pub mod inquiry;
pub mod portfolio;
pub mod service;
