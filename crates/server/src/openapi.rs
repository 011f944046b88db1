use utoipa::OpenApi;

use common::types::Health;
use models::{
    asset::DaySummary,
    favorite::Favorite,
    io::{ErrorOutput, StandardOutput, UserCreateInput, UserFavoriteAdd},
    user::User,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::users::user_create,
        crate::routes::users::user_delete,
        crate::routes::users::user_list,
        crate::routes::favorites::user_favorite_add,
        crate::routes::favorites::user_favorite_remove,
        crate::routes::assets::day_summary,
    ),
    components(
        schemas(
            Health,
            StandardOutput,
            ErrorOutput,
            UserCreateInput,
            UserFavoriteAdd,
            User,
            Favorite,
            DaySummary,
        )
    ),
    tags(
        (name = "health"),
        (name = "user"),
        (name = "assets")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_route() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let paths = doc["paths"].as_object().unwrap();
        for p in [
            "/health",
            "/user/create",
            "/user/delete/{user_id}",
            "/user/list",
            "/user/favorite/add",
            "/user/favorite/remove/{user_id}",
            "/assets/day_summary/{user_id}",
        ] {
            assert!(paths.contains_key(p), "missing {p}");
        }
    }
}
