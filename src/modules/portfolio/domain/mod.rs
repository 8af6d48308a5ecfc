pub mod entities;

pub use entities::{Portfolio, PortfolioCategory};
