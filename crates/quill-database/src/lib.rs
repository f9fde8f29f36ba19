//! # quill-database
//!
//! PostgreSQL connection management, migrations, and the production
//! implementation of the `UserStore` contract.

pub mod connection;
pub mod repositories;

pub use connection::Database;
pub use repositories::user::PgUserStore;
