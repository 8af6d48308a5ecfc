pub mod get_inquiries;
pub mod set_inquiry_status;
pub mod submit_inquiry;
