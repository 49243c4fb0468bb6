//! Form-submit fallback for Ghup
//!
//! Accepts the upload form as `multipart/form-data` and answers with the
//! `{success, url?, download_url?, error?}` envelope. The field names match
//! the browser form: `githubToken`, `githubUser`, `githubRepo`,
//! `githubBranch`, `filePath`, `commitMessage` and `file`.

use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        DefaultBodyLimit, Multipart, State,
    },
    http::StatusCode,
    response::{Html, Json},
    routing::{get, post},
    Router,
};
use ghup_core::upload::{self, ContentsProvider, FileInput, UploadForm, UploadResponse};
use ghup_core::GhupError;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Default request body limit, in megabytes
pub const DEFAULT_MAX_UPLOAD_MB: usize = 25;

type Reply = (StatusCode, Json<UploadResponse>);

#[derive(Clone)]
pub struct AppState {
    provider: Arc<dyn ContentsProvider>,
}

impl AppState {
    pub fn new(provider: Arc<dyn ContentsProvider>) -> Self {
        Self { provider }
    }
}

/// Build the router. `max_upload_bytes` caps the whole multipart body.
pub fn router(state: AppState, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(|| async { "ok" }))
        .route("/upload", post(upload_form).fallback(method_not_allowed))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn index() -> Html<&'static str> {
    Html(include_str!("../assets/index.html"))
}

async fn method_not_allowed() -> Reply {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(UploadResponse::failure("Method not allowed")),
    )
}

async fn upload_form(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Reply {
    let multipart = match multipart {
        Ok(multipart) => multipart,
        Err(rejection) => {
            tracing::warn!("Rejected upload request: {}", rejection);
            return (
                rejection.status(),
                Json(UploadResponse::failure("Invalid multipart body")),
            );
        }
    };

    let form = match read_form(multipart).await {
        Ok(form) => form,
        Err(e) => {
            tracing::warn!("Rejected multipart body: {}", e);
            let status = e.status();
            let message = if status == StatusCode::PAYLOAD_TOO_LARGE {
                "File too large"
            } else {
                "Invalid multipart body"
            };
            return (status, Json(UploadResponse::failure(message)));
        }
    };

    match upload::upload(state.provider.as_ref(), form).await {
        Ok(file) => (StatusCode::OK, Json(UploadResponse::success(&file))),
        Err(e) => failure(&e),
    }
}

fn failure(error: &GhupError) -> Reply {
    let status = if error.is_validation() {
        StatusCode::BAD_REQUEST
    } else {
        tracing::error!("Upload failed: {}", error);
        StatusCode::INTERNAL_SERVER_ERROR
    };
    (status, Json(UploadResponse::failure(error.public_message())))
}

/// Collect the known fields. Unknown fields are drained and ignored.
async fn read_form(mut multipart: Multipart) -> Result<UploadForm, MultipartError> {
    let mut form = UploadForm::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "githubToken" => form.token = Some(field.text().await?),
            "githubUser" => form.owner = Some(field.text().await?),
            "githubRepo" => form.repo = Some(field.text().await?),
            "githubBranch" => form.branch = Some(field.text().await?),
            "filePath" => form.path = Some(field.text().await?),
            "commitMessage" => form.commit_message = Some(field.text().await?),
            "file" => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let bytes = field.bytes().await?;
                // Browsers send an empty, unnamed part when no file was chosen
                if !file_name.is_empty() {
                    form.file = Some(FileInput::new(file_name, bytes.to_vec()));
                }
            }
            _ => {
                field.bytes().await?;
            }
        }
    }

    Ok(form)
}
