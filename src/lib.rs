pub mod error;
pub mod filter;
pub mod loader;
pub mod output;
pub mod reports;
pub mod schema;
