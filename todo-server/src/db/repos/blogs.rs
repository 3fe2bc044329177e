//! Legacy blog table
//!
//! The table is created at startup alongside `todo`, but no route reads or
//! writes it.

use sqlx::FromRow;

/// Blog record from database
#[derive(Debug, Clone, FromRow)]
pub struct Blog {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub published: bool,
    pub rating: Option<i32>,
}
