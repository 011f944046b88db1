use async_trait::async_trait;

use models::user::User;

use crate::errors::ServiceError;

/// User storage contract consumed by the HTTP handlers.
#[async_trait]
pub trait UserService: Send + Sync {
    async fn create_user(&self, name: &str) -> Result<(), ServiceError>;
    async fn delete_user(&self, id: i64) -> Result<(), ServiceError>;
    /// All users ordered by ascending id.
    async fn list_user(&self) -> Result<Vec<User>, ServiceError>;
    async fn get_by_id(&self, id: i64) -> Result<User, ServiceError>;
}

/// Favorite storage contract consumed by the HTTP handlers.
#[async_trait]
pub trait FavoriteService: Send + Sync {
    async fn add_favorite(&self, user_id: i64, symbol: &str) -> Result<(), ServiceError>;
    async fn remove_favorite(&self, user_id: i64, symbol: &str) -> Result<(), ServiceError>;
}
