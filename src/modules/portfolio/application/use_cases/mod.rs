pub mod create_portfolio;
pub mod delete_portfolio;
pub mod get_portfolios;
pub mod update_portfolio;
