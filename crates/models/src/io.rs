//! Request and response envelopes of the HTTP surface.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StandardOutput {
    pub message: String,
}

impl StandardOutput {
    pub fn ok() -> Self {
        Self { message: "OK".into() }
    }
}

/// Body of every failed request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorOutput {
    pub detail: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct UserCreateInput {
    pub name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct UserFavoriteAdd {
    pub user_id: i64,
    pub symbol: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FavoriteRemoveQuery {
    pub symbol: String,
}
