pub mod get_inquiries;
pub mod submit_contact;
pub mod update_inquiry_status;
