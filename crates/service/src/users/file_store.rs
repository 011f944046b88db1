use std::{collections::HashMap, path::PathBuf, sync::Arc};

use async_trait::async_trait;
use tracing::{info, instrument};

use models::{
    favorite::{validate_symbol, Favorite},
    user::{validate_name, User},
};

use super::repository::{FavoriteService, UserService};
use crate::{errors::ServiceError, storage::json_map_store::JsonMapStore};

/// Users and their favorites persisted in a single JSON file keyed by user id.
///
/// Favorites live inside their user record, so deleting a user drops its
/// favorites with it. User names are unique, and a user holds a symbol at
/// most once.
#[derive(Clone)]
pub struct FileUserStore {
    users: Arc<JsonMapStore<i64, User>>,
}

impl FileUserStore {
    pub async fn open<P: Into<PathBuf>>(path: P) -> Result<Self, ServiceError> {
        let users = JsonMapStore::new(path).await?;
        Ok(Self { users })
    }
}

fn next_user_id(users: &HashMap<i64, User>) -> i64 {
    users.keys().copied().max().unwrap_or(0) + 1
}

fn next_favorite_id(users: &HashMap<i64, User>) -> i64 {
    users
        .values()
        .flat_map(|u| u.favorites.iter().map(|f| f.id))
        .max()
        .unwrap_or(0)
        + 1
}

fn user_not_found(id: i64) -> ServiceError {
    ServiceError::NotFound(format!("user {id} not found"))
}

#[async_trait]
impl UserService for FileUserStore {
    #[instrument(skip(self))]
    async fn create_user(&self, name: &str) -> Result<(), ServiceError> {
        let name = validate_name(name)?;
        let id = self
            .users
            .update_map(|users| {
                if users.values().any(|u| u.name == name) {
                    return Err(ServiceError::Conflict(format!("user {name} already exists")));
                }
                let id = next_user_id(users);
                users.insert(id, User::new(id, name.clone()));
                Ok(id)
            })
            .await?;
        info!(user_id = id, %name, "user_created");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_user(&self, id: i64) -> Result<(), ServiceError> {
        let removed = self
            .users
            .update_map(|users| users.remove(&id).ok_or_else(|| user_not_found(id)))
            .await?;
        info!(user_id = id, favorites = removed.favorites.len(), "user_deleted");
        Ok(())
    }

    async fn list_user(&self) -> Result<Vec<User>, ServiceError> {
        let mut users: Vec<User> = self.users.list().await.into_iter().map(|(_, u)| u).collect();
        users.sort_by_key(|u| u.id);
        Ok(users)
    }

    async fn get_by_id(&self, id: i64) -> Result<User, ServiceError> {
        self.users.get(&id).await.ok_or_else(|| user_not_found(id))
    }
}

#[async_trait]
impl FavoriteService for FileUserStore {
    #[instrument(skip(self))]
    async fn add_favorite(&self, user_id: i64, symbol: &str) -> Result<(), ServiceError> {
        let symbol = validate_symbol(symbol)?;
        self.users
            .update_map(|users| {
                let id = next_favorite_id(users);
                let user = users.get_mut(&user_id).ok_or_else(|| user_not_found(user_id))?;
                if user.has_favorite(&symbol) {
                    return Err(ServiceError::Conflict(format!(
                        "symbol {symbol} is already a favorite of user {user_id}"
                    )));
                }
                user.favorites.push(Favorite { id, user_id, symbol: symbol.clone() });
                Ok(())
            })
            .await?;
        info!(user_id, %symbol, "favorite_added");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn remove_favorite(&self, user_id: i64, symbol: &str) -> Result<(), ServiceError> {
        let symbol = symbol.trim();
        self.users
            .update_map(|users| {
                let user = users.get_mut(&user_id).ok_or_else(|| user_not_found(user_id))?;
                let pos = user
                    .favorites
                    .iter()
                    .position(|f| f.symbol == symbol)
                    .ok_or_else(|| {
                        ServiceError::NotFound(format!("favorite {symbol} not found for user {user_id}"))
                    })?;
                user.favorites.remove(pos);
                Ok(())
            })
            .await?;
        info!(user_id, %symbol, "favorite_removed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path() -> PathBuf {
        std::env::temp_dir().join(format!("file_user_store_{}.json", uuid::Uuid::new_v4()))
    }

    #[tokio::test]
    async fn user_crud_and_persistence() -> Result<(), anyhow::Error> {
        let path = temp_path();
        let store = FileUserStore::open(&path).await?;

        store.create_user("Ana").await?;
        store.create_user(" Bruno ").await?;
        let users = store.list_user().await?;
        let names: Vec<_> = users.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["Ana", "Bruno"]);
        assert_eq!(users[0].id, 1);
        assert_eq!(users[1].id, 2);

        let bruno = store.get_by_id(2).await?;
        assert_eq!(bruno.name, "Bruno");

        store.delete_user(1).await?;
        assert!(matches!(store.get_by_id(1).await, Err(ServiceError::NotFound(_))));

        let reopened = FileUserStore::open(&path).await?;
        let users = reopened.list_user().await?;
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].name, "Bruno");

        let _ = tokio::fs::remove_file(&path).await;
        Ok(())
    }

    #[tokio::test]
    async fn duplicate_and_missing_users_are_errors() -> Result<(), anyhow::Error> {
        let path = temp_path();
        let store = FileUserStore::open(&path).await?;
        store.create_user("Ana").await?;

        assert!(matches!(store.create_user("Ana").await, Err(ServiceError::Conflict(_))));
        assert!(matches!(store.create_user("  ").await, Err(ServiceError::Validation(_))));
        assert!(matches!(store.delete_user(42).await, Err(ServiceError::NotFound(_))));
        assert_eq!(store.list_user().await?.len(), 1);

        let _ = tokio::fs::remove_file(&path).await;
        Ok(())
    }

    #[tokio::test]
    async fn favorites_keep_order_and_reject_duplicates() -> Result<(), anyhow::Error> {
        let path = temp_path();
        let store = FileUserStore::open(&path).await?;
        store.create_user("Ana").await?;

        store.add_favorite(1, "BTC").await?;
        store.add_favorite(1, "ETH").await?;
        store.add_favorite(1, "LTC").await?;
        assert!(matches!(store.add_favorite(1, "ETH").await, Err(ServiceError::Conflict(_))));
        assert!(matches!(store.add_favorite(9, "ETH").await, Err(ServiceError::NotFound(_))));
        assert!(matches!(store.add_favorite(1, "../x").await, Err(ServiceError::Validation(_))));

        store.remove_favorite(1, "ETH").await?;
        assert!(matches!(store.remove_favorite(1, "ETH").await, Err(ServiceError::NotFound(_))));

        let user = store.get_by_id(1).await?;
        assert_eq!(user.symbols(), vec!["BTC", "LTC"]);
        assert!(user.favorites.iter().all(|f| f.user_id == 1));

        let _ = tokio::fs::remove_file(&path).await;
        Ok(())
    }

    #[tokio::test]
    async fn deleting_user_drops_favorites() -> Result<(), anyhow::Error> {
        let path = temp_path();
        let store = FileUserStore::open(&path).await?;
        store.create_user("Ana").await?;
        store.add_favorite(1, "BTC").await?;
        store.delete_user(1).await?;
        store.create_user("Ana").await?;
        assert!(store.get_by_id(1).await?.favorites.is_empty());
        let _ = tokio::fs::remove_file(&path).await;
        Ok(())
    }
}
