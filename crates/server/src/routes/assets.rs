use axum::{
    extract::{Path, State},
    Json,
};
use axum_extra::extract::WithRejection;
use tracing::info;

use models::{asset::DaySummary, io::ErrorOutput};
use service::assets::collect_day_summaries;

use crate::{errors::ApiError, state::AppState};

/// Previous-day summary of every favorite symbol of a user, in favorite order.
/// Lookups run concurrently; any failed lookup fails the whole request.
#[utoipa::path(
    get, path = "/assets/day_summary/{user_id}", tag = "assets",
    params(("user_id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "One summary per favorite symbol", body = [DaySummary]),
        (status = 400, description = "Request failed", body = ErrorOutput)
    )
)]
pub async fn day_summary(
    State(state): State<AppState>,
    WithRejection(Path(user_id), _): WithRejection<Path<i64>, ApiError>,
) -> Result<Json<Vec<DaySummary>>, ApiError> {
    let user = state.users.get_by_id(user_id).await?;
    let symbols = user.symbols();
    let summaries = collect_day_summaries(&*state.assets, &symbols).await?;
    info!(user_id, count = summaries.len(), "day_summary_served");
    Ok(Json(summaries))
}
