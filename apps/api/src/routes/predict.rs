use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        Multipart, State,
    },
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::StructuredResume;
use crate::state::AppState;

const FILE_FIELD: &str = "file";
const ALLOWED_EXTENSION: &str = "pdf";

struct Upload {
    filename: String,
    data: Bytes,
}

/// POST /predict
///
/// Takes a multipart `file` field holding a PDF and returns the model's
/// structured reading of it.
pub async fn predict_handler(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<StructuredResume>, AppError> {
    let request_id = Uuid::new_v4();

    async move {
        // A non-multipart body cannot carry a file.
        let multipart = multipart.map_err(|_| no_file_provided())?;
        let upload = read_upload(multipart).await?.ok_or_else(no_file_provided)?;
        validate_filename(&upload.filename)?;

        info!(
            filename = %upload.filename,
            bytes = upload.data.len(),
            "Parsing uploaded resume"
        );
        let resume = state.parser.parse(upload.data).await?;
        Ok::<_, AppError>(Json(resume))
    }
    .instrument(info_span!("predict", %request_id))
    .await
}

/// Returns the first `file` part that carries a filename. Parts without a
/// filename are plain form values, not uploads.
async fn read_upload(mut multipart: Multipart) -> Result<Option<Upload>, AppError> {
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let Some(filename) = field.file_name().map(str::to_string) else {
            continue;
        };
        let data = field.bytes().await.map_err(multipart_error)?;
        return Ok(Some(Upload { filename, data }));
    }
    Ok(None)
}

fn validate_filename(filename: &str) -> Result<(), AppError> {
    if filename.is_empty() {
        return Err(AppError::Validation("No file selected".to_string()));
    }

    let is_pdf = filename
        .rsplit_once('.')
        .is_some_and(|(_, ext)| ext.eq_ignore_ascii_case(ALLOWED_EXTENSION));
    if !is_pdf {
        return Err(AppError::Validation(
            "Invalid file type. Only PDF files are allowed".to_string(),
        ));
    }
    Ok(())
}

fn no_file_provided() -> AppError {
    AppError::Validation("No file provided".to_string())
}

fn multipart_error(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge
    } else {
        AppError::Validation(e.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_filename_accepts_pdf_any_case() {
        assert!(validate_filename("resume.pdf").is_ok());
        assert!(validate_filename("Resume.Final.PDF").is_ok());
    }

    #[test]
    fn test_validate_filename_empty() {
        let err = validate_filename("").unwrap_err();
        assert_eq!(err.to_string(), "No file selected");
    }

    #[test]
    fn test_validate_filename_rejects_other_extensions() {
        for name in ["resume.txt", "resume.pdf.exe", "resume", "pdf"] {
            let err = validate_filename(name).unwrap_err();
            assert_eq!(
                err.to_string(),
                "Invalid file type. Only PDF files are allowed",
                "{name}"
            );
        }
    }
}
