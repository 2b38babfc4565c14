use crate::app_context::{AppContext, RequestContext};
use crate::participants;
use crate::participants::ranking::leaderboard;
use crate::sessions::errors::StateError;
use crate::sessions::extractors::CsvUpload;
use crate::sessions::models::Page;
use crate::sessions::responses::{
    CreateSessionResponse, DrawWinnerResponse, Failure, LeaderboardResponse, MapViewResponse,
    NavigateResponse, ParticipantsResponse, SessionStatusResponse, UploadParticipantsResponse,
    WinnerViewResponse,
};
use crate::sessions::views::{map_view, winner_view};
use crate::storage::interface::ISessionStorage;

pub struct SessionHttpHandler<'a, SS: ISessionStorage> {
    app_context: AppContext<SS>,
    request_context: &'a RequestContext,
}

impl<'a, SS> SessionHttpHandler<'a, SS>
where
    SS: ISessionStorage,
{
    pub fn new(app_context: AppContext<SS>, request_context: &'a RequestContext) -> Self {
        Self {
            app_context,
            request_context,
        }
    }

    fn session_id(&self) -> &str {
        &self.request_context.session_id
    }

    fn not_found(&self) -> Failure {
        Failure::session_not_found(self.session_id())
    }

    pub async fn status(&self) -> SessionStatusResponse {
        let Some(session) = self.app_context.sessions.snapshot(self.session_id()).await else {
            return SessionStatusResponse::failed(self.not_found());
        };
        SessionStatusResponse {
            error: false,
            error_code: None,
            message: None,
            page: Some(session.page),
            participants_count: Some(session.participants.as_ref().map_or(0, Vec::len)),
            has_winner: Some(session.winner.is_some()),
        }
    }

    pub async fn upload(&self, upload: CsvUpload) -> UploadParticipantsResponse {
        if !self.app_context.sessions.exists(self.session_id()).await {
            return UploadParticipantsResponse::failed(self.not_found());
        }
        let participants = match participants::load(
            &upload.bytes[..],
            self.app_context.giveaway.location,
            &self.app_context.distances,
        ) {
            Ok(participants) => participants,
            Err(error) => {
                tracing::warn!(
                    task = "participants_upload",
                    session_id = self.session_id(),
                    file_name = upload.file_name.as_deref().unwrap_or("<unnamed>"),
                    error = %error,
                    "Rejected participants upload."
                );
                return UploadParticipantsResponse::failed(error.into());
            }
        };
        let participants_count = participants.len();
        if self
            .app_context
            .sessions
            .load_participants(self.session_id(), participants)
            .await
            .is_none()
        {
            return UploadParticipantsResponse::failed(self.not_found());
        }
        tracing::info!(
            task = "participants_upload",
            session_id = self.session_id(),
            file_name = upload.file_name.as_deref().unwrap_or("<unnamed>"),
            participants_count,
            cached_distances = self.app_context.distances.len(),
        );
        UploadParticipantsResponse {
            error: false,
            error_code: None,
            message: Some(String::from("File uploaded successfully!")),
            participants_count: Some(participants_count),
            page: Some(Page::Map),
        }
    }

    pub async fn participants(&self) -> ParticipantsResponse {
        match self
            .app_context
            .sessions
            .require(self.session_id(), Page::Map)
            .await
        {
            None => ParticipantsResponse::failed(self.not_found()),
            Some(Err(error)) => ParticipantsResponse::failed(error.into()),
            Some(Ok(session)) => ParticipantsResponse {
                error: false,
                error_code: None,
                message: None,
                redirect_to: None,
                participants: session.participants,
            },
        }
    }

    pub async fn map_view(&self) -> MapViewResponse {
        let session = match self
            .app_context
            .sessions
            .require(self.session_id(), Page::Map)
            .await
        {
            None => return MapViewResponse::failed(self.not_found()),
            Some(Err(error)) => return MapViewResponse::failed(error.into()),
            Some(Ok(session)) => session,
        };
        let participants = session.participants.unwrap_or_default();
        MapViewResponse {
            error: false,
            error_code: None,
            message: None,
            redirect_to: None,
            view: Some(map_view(self.app_context.giveaway.location, &participants)),
        }
    }

    pub async fn draw_winner(&self) -> DrawWinnerResponse {
        match self.app_context.sessions.draw_winner(self.session_id()).await {
            None => DrawWinnerResponse::failed(self.not_found()),
            Some(Err(error)) => DrawWinnerResponse::failed(error.into()),
            Some(Ok(winner)) => {
                tracing::info!(
                    task = "winner_draw",
                    session_id = self.session_id(),
                    winner_index = winner.index,
                    distance_km = winner.participant.distance_km,
                );
                DrawWinnerResponse {
                    error: false,
                    error_code: None,
                    message: None,
                    redirect_to: None,
                    winner: Some(winner),
                }
            }
        }
    }

    pub async fn winner_view(&self, limit: Option<usize>) -> WinnerViewResponse {
        let session = match self
            .app_context
            .sessions
            .require(self.session_id(), Page::Winner)
            .await
        {
            None => return WinnerViewResponse::failed(self.not_found()),
            Some(Err(error)) => return WinnerViewResponse::failed(error.into()),
            Some(Ok(session)) => session,
        };
        let (Some(participants), Some(winner)) = (session.participants, session.winner) else {
            return WinnerViewResponse::failed(
                StateError {
                    requested: Page::Winner,
                    redirected_to: session.page,
                }
                .into(),
            );
        };
        match winner_view(
            self.app_context.giveaway.location,
            &participants,
            winner,
            limit.unwrap_or(self.app_context.giveaway.leaderboard_size),
        ) {
            Ok(view) => WinnerViewResponse {
                error: false,
                error_code: None,
                message: None,
                redirect_to: None,
                view: Some(view),
            },
            Err(error) => WinnerViewResponse::failed(error.into()),
        }
    }

    pub async fn leaderboard(&self, limit: Option<usize>) -> LeaderboardResponse {
        let session = match self
            .app_context
            .sessions
            .require(self.session_id(), Page::Map)
            .await
        {
            None => return LeaderboardResponse::failed(self.not_found()),
            Some(Err(error)) => return LeaderboardResponse::failed(error.into()),
            Some(Ok(session)) => session,
        };
        let participants = session.participants.unwrap_or_default();
        match leaderboard(
            &participants,
            limit.unwrap_or(self.app_context.giveaway.leaderboard_size),
        ) {
            Ok(entries) => LeaderboardResponse {
                error: false,
                error_code: None,
                message: None,
                redirect_to: None,
                leaderboard: Some(entries),
            },
            Err(error) => LeaderboardResponse::failed(error.into()),
        }
    }

    pub async fn navigate(&self, page: Page) -> NavigateResponse {
        match self
            .app_context
            .sessions
            .navigate(self.session_id(), page)
            .await
        {
            None => NavigateResponse::failed(self.not_found()),
            Some(Err(error)) => NavigateResponse::failed(error.into()),
            Some(Ok(page)) => NavigateResponse {
                error: false,
                error_code: None,
                message: None,
                page: Some(page),
            },
        }
    }
}

pub struct CreateSessionHttpHandler<SS: ISessionStorage> {
    app_context: AppContext<SS>,
}

impl<SS> CreateSessionHttpHandler<SS>
where
    SS: ISessionStorage,
{
    pub fn new(app_context: AppContext<SS>) -> Self {
        Self { app_context }
    }

    pub async fn create(&self) -> CreateSessionResponse {
        let session_id = self.app_context.sessions.create().await;
        let sessions_count = self.app_context.sessions.count().await;
        tracing::info!(task = "sessions_count", sessions_count);
        CreateSessionResponse {
            error: false,
            session_id,
        }
    }
}
