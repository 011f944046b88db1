//! File-backed storage primitives used by the default collaborators.

pub mod json_map_store;
