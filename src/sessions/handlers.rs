use crate::app_context::{AppContext, RequestContext};
use crate::sessions::extractors::CsvUpload;
use crate::sessions::requests::{LimitQueryParam, NavigateRequest};
use crate::sessions::responses::{
    CreateSessionResponse, DrawWinnerResponse, LeaderboardResponse, MapViewResponse,
    NavigateResponse, ParticipantsResponse, SessionStatusResponse, UploadParticipantsResponse,
    WinnerViewResponse,
};
use crate::sessions::services::{CreateSessionHttpHandler, SessionHttpHandler};
use crate::storage::sessions::HashMapSessionsStorage;
use axum::extract::{Path, Query, State};
use axum::response::Json;

#[axum::debug_handler]
pub async fn create(
    State(app_context): State<AppContext<HashMapSessionsStorage>>,
) -> Json<CreateSessionResponse> {
    let response = CreateSessionHttpHandler::new(app_context).create().await;
    Json(response)
}

#[axum::debug_handler]
pub async fn status(
    Path(session_id): Path<String>,
    State(app_context): State<AppContext<HashMapSessionsStorage>>,
) -> Json<SessionStatusResponse> {
    let request_context = RequestContext { session_id };
    let response = SessionHttpHandler::new(app_context, &request_context)
        .status()
        .await;
    Json(response)
}

#[axum::debug_handler]
pub async fn upload_participants(
    Path(session_id): Path<String>,
    State(app_context): State<AppContext<HashMapSessionsStorage>>,
    upload: CsvUpload,
) -> Json<UploadParticipantsResponse> {
    let request_context = RequestContext { session_id };
    let response = SessionHttpHandler::new(app_context, &request_context)
        .upload(upload)
        .await;
    Json(response)
}

#[axum::debug_handler]
pub async fn participants(
    Path(session_id): Path<String>,
    State(app_context): State<AppContext<HashMapSessionsStorage>>,
) -> Json<ParticipantsResponse> {
    let request_context = RequestContext { session_id };
    let response = SessionHttpHandler::new(app_context, &request_context)
        .participants()
        .await;
    Json(response)
}

#[axum::debug_handler]
pub async fn map_view(
    Path(session_id): Path<String>,
    State(app_context): State<AppContext<HashMapSessionsStorage>>,
) -> Json<MapViewResponse> {
    let request_context = RequestContext { session_id };
    let response = SessionHttpHandler::new(app_context, &request_context)
        .map_view()
        .await;
    Json(response)
}

#[axum::debug_handler]
pub async fn draw_winner(
    Path(session_id): Path<String>,
    State(app_context): State<AppContext<HashMapSessionsStorage>>,
) -> Json<DrawWinnerResponse> {
    let request_context = RequestContext { session_id };
    let response = SessionHttpHandler::new(app_context, &request_context)
        .draw_winner()
        .await;
    Json(response)
}

#[axum::debug_handler]
pub async fn winner_view(
    Path(session_id): Path<String>,
    Query(query_params): Query<LimitQueryParam>,
    State(app_context): State<AppContext<HashMapSessionsStorage>>,
) -> Json<WinnerViewResponse> {
    let request_context = RequestContext { session_id };
    let response = SessionHttpHandler::new(app_context, &request_context)
        .winner_view(query_params.limit)
        .await;
    Json(response)
}

#[axum::debug_handler]
pub async fn leaderboard(
    Path(session_id): Path<String>,
    Query(query_params): Query<LimitQueryParam>,
    State(app_context): State<AppContext<HashMapSessionsStorage>>,
) -> Json<LeaderboardResponse> {
    let request_context = RequestContext { session_id };
    let response = SessionHttpHandler::new(app_context, &request_context)
        .leaderboard(query_params.limit)
        .await;
    Json(response)
}

#[axum::debug_handler]
pub async fn navigate(
    Path(session_id): Path<String>,
    State(app_context): State<AppContext<HashMapSessionsStorage>>,
    Json(payload): Json<NavigateRequest>,
) -> Json<NavigateResponse> {
    let request_context = RequestContext { session_id };
    let response = SessionHttpHandler::new(app_context, &request_context)
        .navigate(payload.page)
        .await;
    Json(response)
}
