use axum::{
    extract::{Path, State},
    Json,
};
use axum_extra::extract::WithRejection;

use models::{
    io::{ErrorOutput, StandardOutput, UserCreateInput},
    user::User,
};

use crate::{errors::ApiError, state::AppState};

/// Create a user
#[utoipa::path(
    post, path = "/user/create", tag = "user",
    request_body = UserCreateInput,
    responses(
        (status = 200, description = "Created", body = StandardOutput),
        (status = 400, description = "Request failed", body = ErrorOutput)
    )
)]
pub async fn user_create(
    State(state): State<AppState>,
    WithRejection(Json(input), _): WithRejection<Json<UserCreateInput>, ApiError>,
) -> Result<Json<StandardOutput>, ApiError> {
    state.users.create_user(&input.name).await?;
    Ok(Json(StandardOutput::ok()))
}

/// Delete a user
#[utoipa::path(
    delete, path = "/user/delete/{user_id}", tag = "user",
    params(("user_id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "Deleted", body = StandardOutput),
        (status = 400, description = "Request failed", body = ErrorOutput)
    )
)]
pub async fn user_delete(
    State(state): State<AppState>,
    WithRejection(Path(user_id), _): WithRejection<Path<i64>, ApiError>,
) -> Result<Json<StandardOutput>, ApiError> {
    state.users.delete_user(user_id).await?;
    Ok(Json(StandardOutput::ok()))
}

#[utoipa::path(
    get, path = "/user/list", tag = "user",
    responses(
        (status = 200, description = "Users ordered by id", body = [User]),
        (status = 400, description = "Request failed", body = ErrorOutput)
    )
)]
pub async fn user_list(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    let users = state.users.list_user().await?;
    Ok(Json(users))
}
