//! Database layer: pool construction, table setup, scoped transactions,
//! and per-table repositories.

pub mod migrations;
pub mod pool;
pub mod repos;
pub mod session;

pub use pool::{create_pool, create_pool_with_options};
pub use repos::{DbError, Todo, TodoRepo};
pub use session::with_transaction;
