pub mod entities;

pub use entities::Service;
