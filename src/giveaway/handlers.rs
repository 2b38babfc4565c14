use crate::app_context::AppContext;
use crate::giveaway::responses::GiveawayResponse;
use crate::storage::sessions::HashMapSessionsStorage;
use axum::extract::State;
use axum::response::Json;

#[axum::debug_handler]
pub async fn giveaway(
    State(app_context): State<AppContext<HashMapSessionsStorage>>,
) -> Json<GiveawayResponse> {
    Json(GiveawayResponse {
        error: false,
        location: app_context.giveaway.location,
        leaderboard_size: app_context.giveaway.leaderboard_size,
    })
}
