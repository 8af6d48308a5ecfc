pub mod get_admin_content;
pub mod get_content;
pub mod update_content;
