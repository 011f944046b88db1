//! Day-summary collaborators and the per-user fan-out.

pub mod repository;
pub mod http;
pub mod summary;

pub use http::HttpAssetService;
pub use repository::AssetService;
pub use summary::collect_day_summaries;
