// BlogQL - GraphQL API over flat JSON collection files

pub mod app_state;
pub mod config;
pub mod error;
pub mod graphql;
pub mod models;
pub mod store;

// Re-exports for convenience
pub use error::{AppError, AppResult};
