pub mod get_site_content;
pub mod save_site_content;
