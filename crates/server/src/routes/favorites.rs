use axum::{
    extract::{Path, Query, State},
    Json,
};
use axum_extra::extract::WithRejection;

use models::io::{ErrorOutput, FavoriteRemoveQuery, StandardOutput, UserFavoriteAdd};

use crate::{errors::ApiError, state::AppState};

/// Add a favorite
#[utoipa::path(
    post, path = "/user/favorite/add", tag = "user",
    request_body = UserFavoriteAdd,
    responses(
        (status = 200, description = "Added", body = StandardOutput),
        (status = 400, description = "Request failed", body = ErrorOutput)
    )
)]
pub async fn user_favorite_add(
    State(state): State<AppState>,
    WithRejection(Json(input), _): WithRejection<Json<UserFavoriteAdd>, ApiError>,
) -> Result<Json<StandardOutput>, ApiError> {
    state.favorites.add_favorite(input.user_id, &input.symbol).await?;
    Ok(Json(StandardOutput::ok()))
}

#[utoipa::path(
    delete, path = "/user/favorite/remove/{user_id}", tag = "user",
    params(("user_id" = i64, Path, description = "User id"), FavoriteRemoveQuery),
    responses(
        (status = 200, description = "Removed", body = StandardOutput),
        (status = 400, description = "Request failed", body = ErrorOutput)
    )
)]
pub async fn user_favorite_remove(
    State(state): State<AppState>,
    WithRejection(Path(user_id), _): WithRejection<Path<i64>, ApiError>,
    WithRejection(Query(query), _): WithRejection<Query<FavoriteRemoveQuery>, ApiError>,
) -> Result<Json<StandardOutput>, ApiError> {
    state.favorites.remove_favorite(user_id, &query.symbol).await?;
    Ok(Json(StandardOutput::ok()))
}
