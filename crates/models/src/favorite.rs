use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::errors::ModelError;

pub const MAX_SYMBOL_LEN: usize = 16;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Favorite {
    pub id: i64,
    pub user_id: i64,
    pub symbol: String,
}

/// Trim and check a ticker symbol. Case is preserved.
pub fn validate_symbol(symbol: &str) -> Result<String, ModelError> {
    let symbol = symbol.trim();
    if symbol.is_empty() {
        return Err(ModelError::Validation("symbol required".into()));
    }
    if symbol.len() > MAX_SYMBOL_LEN {
        return Err(ModelError::Validation(format!("symbol longer than {MAX_SYMBOL_LEN} characters")));
    }
    if !symbol.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ModelError::Validation(format!("invalid symbol: {symbol}")));
    }
    Ok(symbol.to_string())
}
