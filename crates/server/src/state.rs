use std::sync::Arc;

use service::{
    assets::AssetService,
    users::{FavoriteService, UserService},
};

/// Collaborators shared by every handler. Cloning only bumps reference counts.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserService>,
    pub favorites: Arc<dyn FavoriteService>,
    pub assets: Arc<dyn AssetService>,
}

impl AppState {
    pub fn new(
        users: Arc<dyn UserService>,
        favorites: Arc<dyn FavoriteService>,
        assets: Arc<dyn AssetService>,
    ) -> Self {
        Self { users, favorites, assets }
    }
}
