//! User and favorite collaborators.

pub mod repository;
pub mod file_store;

pub use file_store::FileUserStore;
pub use repository::{FavoriteService, UserService};
