pub mod entities;

pub use entities::{Inquiry, InquiryStatus};
