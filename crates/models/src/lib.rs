//! Domain records shared by the service and HTTP layers.

pub mod errors;
pub mod user;
pub mod favorite;
pub mod asset;
pub mod io;
