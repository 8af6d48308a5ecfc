pub mod json_config;
pub mod response;

pub use json_config::custom_json_config;
pub use response::ApiResponse;
