//! # quill-entity
//!
//! Domain entity models for Quill, plus the [`user::UserStore`] port that
//! the auth core consumes and the database crate implements.

pub mod session;
pub mod user;

pub use session::Session;
pub use user::{NewUser, PersistError, User, UserStore, UserView};
