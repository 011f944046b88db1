use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Previous-day price range of a single symbol.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DaySummary {
    pub symbol: String,
    pub highest: f64,
    pub lowest: f64,
}
