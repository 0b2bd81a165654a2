pub mod connection;
pub mod models;
pub mod repositories;
pub mod schema;

pub use connection::{Database, DbConnection, DbPool};
