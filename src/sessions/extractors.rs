use crate::sessions::consts::UPLOAD_FIELD_NAME;
use crate::sessions::responses::{UploadExtractionError, UploadExtractionReason};
use async_trait::async_trait;
use axum::body::Bytes;
use axum::extract::{FromRequest, Multipart, Request};
use axum::http::StatusCode;
use axum::response::Json;

/// The CSV file sent in the `file` field of a multipart form.
pub struct CsvUpload {
    pub file_name: Option<String>,
    pub bytes: Bytes,
}

type UploadRejection = (StatusCode, Json<UploadExtractionError>);

#[async_trait]
impl<S> FromRequest<S> for CsvUpload
where
    S: Send + Sync,
{
    type Rejection = UploadRejection;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        let mut multipart = Multipart::from_request(request, state)
            .await
            .map_err(|_| reject(StatusCode::BAD_REQUEST))?;
        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|error| reject(error.status()))?
        {
            if field.name() != Some(UPLOAD_FIELD_NAME) {
                continue;
            }
            let file_name = field.file_name().map(str::to_string);
            let bytes = field.bytes().await.map_err(|error| reject(error.status()))?;
            return Ok(CsvUpload { file_name, bytes });
        }
        Err((
            StatusCode::BAD_REQUEST,
            Json(UploadExtractionError {
                error: true,
                reason: UploadExtractionReason::NoFileProvided,
            }),
        ))
    }
}

fn reject(status: StatusCode) -> UploadRejection {
    let reason = if status == StatusCode::PAYLOAD_TOO_LARGE {
        UploadExtractionReason::FileTooLarge
    } else {
        UploadExtractionReason::MalformedMultipartForm
    };
    (
        status,
        Json(UploadExtractionError {
            error: true,
            reason,
        }),
    )
}
