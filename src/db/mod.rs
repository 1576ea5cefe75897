//! Database module: models and the MySQL-backed user store.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows
//! - `mysql.rs`: pool construction and the two store operations

pub mod models;
pub mod mysql;

pub use models::DbUser;
pub use mysql::{MySqlPool, UserStore};
