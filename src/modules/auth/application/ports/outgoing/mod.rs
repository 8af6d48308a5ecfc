pub mod admin_query;
pub mod password_hasher;
pub mod token_provider;

pub use admin_query::AdminQuery;
pub use password_hasher::{HashError, PasswordHasher};
pub use token_provider::{TokenClaims, TokenError, TokenProvider};
