pub mod service_query;

pub use service_query::{ServiceQuery, ServiceQueryError};
