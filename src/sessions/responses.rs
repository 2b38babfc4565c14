use crate::participants::errors::{EmptyInputError, IngestError};
use crate::participants::models::{LeaderboardEntry, Participant, Winner};
use crate::sessions::errors::{DrawError, StateError};
use crate::sessions::models::Page;
use crate::sessions::views::{MapView, WinnerView};
use serde::{Deserialize, Serialize};

/// All the reasons a session request may fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ErrorCode {
    SessionNotFound,
    SchemaError,
    FormatError,
    RangeError,
    EmptyInputError,
    StateError,
}

/// What a failed response carries besides `error: true`.
#[derive(Clone, Debug, PartialEq)]
pub struct Failure {
    pub code: ErrorCode,
    pub message: String,
    pub redirect_to: Option<Page>,
}

impl Failure {
    pub fn session_not_found(session_id: &str) -> Self {
        Self {
            code: ErrorCode::SessionNotFound,
            message: format!("Session `{session_id}` doesn't exist."),
            redirect_to: None,
        }
    }
}

impl From<IngestError> for Failure {
    fn from(error: IngestError) -> Self {
        let code = match error {
            IngestError::Schema { .. } => ErrorCode::SchemaError,
            IngestError::Format { .. } => ErrorCode::FormatError,
            IngestError::Range { .. } => ErrorCode::RangeError,
        };
        Self {
            code,
            message: error.to_string(),
            redirect_to: None,
        }
    }
}

impl From<EmptyInputError> for Failure {
    fn from(error: EmptyInputError) -> Self {
        Self {
            code: ErrorCode::EmptyInputError,
            message: error.to_string(),
            redirect_to: None,
        }
    }
}

impl From<StateError> for Failure {
    fn from(error: StateError) -> Self {
        Self {
            code: ErrorCode::StateError,
            message: error.to_string(),
            redirect_to: Some(error.redirected_to),
        }
    }
}

impl From<DrawError> for Failure {
    fn from(error: DrawError) -> Self {
        match error {
            DrawError::EmptyInput(error) => error.into(),
            DrawError::State(error) => error.into(),
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionResponse {
    pub error: bool,
    pub session_id: String,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStatusResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<ErrorCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<Page>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub participants_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_winner: Option<bool>,
}

impl SessionStatusResponse {
    pub fn failed(failure: Failure) -> Self {
        Self {
            error: true,
            error_code: Some(failure.code),
            message: Some(failure.message),
            page: None,
            participants_count: None,
            has_winner: None,
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadParticipantsResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<ErrorCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub participants_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<Page>,
}

impl UploadParticipantsResponse {
    pub fn failed(failure: Failure) -> Self {
        Self {
            error: true,
            error_code: Some(failure.code),
            message: Some(failure.message),
            participants_count: None,
            page: None,
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantsResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<ErrorCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_to: Option<Page>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub participants: Option<Vec<Participant>>,
}

impl ParticipantsResponse {
    pub fn failed(failure: Failure) -> Self {
        Self {
            error: true,
            error_code: Some(failure.code),
            message: Some(failure.message),
            redirect_to: failure.redirect_to,
            participants: None,
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapViewResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<ErrorCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_to: Option<Page>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view: Option<MapView>,
}

impl MapViewResponse {
    pub fn failed(failure: Failure) -> Self {
        Self {
            error: true,
            error_code: Some(failure.code),
            message: Some(failure.message),
            redirect_to: failure.redirect_to,
            view: None,
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawWinnerResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<ErrorCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_to: Option<Page>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner: Option<Winner>,
}

impl DrawWinnerResponse {
    pub fn failed(failure: Failure) -> Self {
        Self {
            error: true,
            error_code: Some(failure.code),
            message: Some(failure.message),
            redirect_to: failure.redirect_to,
            winner: None,
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WinnerViewResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<ErrorCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_to: Option<Page>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view: Option<WinnerView>,
}

impl WinnerViewResponse {
    pub fn failed(failure: Failure) -> Self {
        Self {
            error: true,
            error_code: Some(failure.code),
            message: Some(failure.message),
            redirect_to: failure.redirect_to,
            view: None,
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<ErrorCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_to: Option<Page>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leaderboard: Option<Vec<LeaderboardEntry>>,
}

impl LeaderboardResponse {
    pub fn failed(failure: Failure) -> Self {
        Self {
            error: true,
            error_code: Some(failure.code),
            message: Some(failure.message),
            redirect_to: failure.redirect_to,
            leaderboard: None,
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigateResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<ErrorCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// The page the session ended up on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<Page>,
}

impl NavigateResponse {
    pub fn failed(failure: Failure) -> Self {
        Self {
            error: true,
            error_code: Some(failure.code),
            message: Some(failure.message),
            page: failure.redirect_to,
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadExtractionError {
    pub error: bool,
    pub reason: UploadExtractionReason,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UploadExtractionReason {
    MalformedMultipartForm,
    FileTooLarge,
    NoFileProvided,
}
