//! todo-server: HTTP server for the To-Do API
//!
//! Keeps the persistence round trip in one place: validate input, open a
//! transactional session, run one SQL statement, map errors to HTTP status
//! codes, return a serialized result.

pub mod db;
pub mod http;
