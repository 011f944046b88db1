use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::errors::ModelError;
use crate::favorite::Favorite;

pub const MAX_NAME_LEN: usize = 100;

/// A user together with its favorite symbols, in the order they were added.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub favorites: Vec<Favorite>,
}

impl User {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self { id, name: name.into(), favorites: Vec::new() }
    }

    /// Favorite symbols in stored order.
    pub fn symbols(&self) -> Vec<String> {
        self.favorites.iter().map(|f| f.symbol.clone()).collect()
    }

    pub fn has_favorite(&self, symbol: &str) -> bool {
        self.favorites.iter().any(|f| f.symbol == symbol)
    }
}

/// Trim and check a user name; returns the normalized value.
pub fn validate_name(name: &str) -> Result<String, ModelError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ModelError::Validation("name required".into()));
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(ModelError::Validation(format!("name longer than {MAX_NAME_LEN} characters")));
    }
    Ok(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_trimmed() {
        assert_eq!(validate_name("  Ana ").unwrap(), "Ana");
    }

    #[test]
    fn blank_or_long_names_rejected() {
        assert!(validate_name("   ").is_err());
        assert!(validate_name(&"x".repeat(MAX_NAME_LEN + 1)).is_err());
        assert!(validate_name(&"x".repeat(MAX_NAME_LEN)).is_ok());
    }

    #[test]
    fn symbols_keep_insertion_order() {
        let mut u = User::new(1, "Ana");
        u.favorites.push(Favorite { id: 2, user_id: 1, symbol: "BTC".into() });
        u.favorites.push(Favorite { id: 1, user_id: 1, symbol: "ETH".into() });
        assert_eq!(u.symbols(), vec!["BTC", "ETH"]);
        assert!(u.has_favorite("ETH"));
        assert!(!u.has_favorite("eth"));
    }
}
