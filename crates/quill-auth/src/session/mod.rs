//! Server-tracked login sessions and their cookie delivery contract.

pub mod cookie;
pub mod manager;

pub use cookie::{SameSite, SessionCookie};
pub use manager::{IssuedSession, SessionManager};
