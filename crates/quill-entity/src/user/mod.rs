//! User entity and storage contract.

pub mod model;
pub mod store;

pub use model::{NewUser, User, UserView};
pub use store::{PersistError, UserStore};
