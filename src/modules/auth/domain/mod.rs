pub mod entities;

pub use entities::{Admin, AdminId};
