//! Collaborators behind the HTTP handlers.
//! - `users`: user and favorite storage contracts plus a JSON-file implementation.
//! - `assets`: day-summary lookup contract, an HTTP client, and the fan-out helper.

pub mod errors;
pub mod storage;
pub mod users;
pub mod assets;
