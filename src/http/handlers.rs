use axum::{
    body::Bytes,
    extract::{Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};
use tokio::fs;

use crate::http::server::AppState;

#[derive(Serialize)]
pub struct SubmitResponse {
    pub message: &'static str,
}

#[derive(Serialize)]
pub struct HealthStatus {
    pub version: &'static str,
    pub status: &'static str,
}

/// Reached only when the field gate let the request through.
pub async fn submit() -> Json<SubmitResponse> {
    Json(SubmitResponse {
        message: "Fields are valid!",
    })
}

pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        version: env!("CARGO_PKG_VERSION"),
        status: "operational",
    })
}

/// Accept a multipart upload and store the configured file field on disk.
///
/// The first file arriving under the configured field name wins; text
/// fields are drained and logged at debug level.
pub async fn upload(State(state): State<AppState>, mut multipart: Multipart) -> Response {
    let mut stored: Option<String> = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(error) => {
                tracing::debug!(error = %error, "Rejecting malformed upload body");
                return (StatusCode::BAD_REQUEST, "Malformed upload request.").into_response();
            }
        };

        let name = field.name().unwrap_or_default().to_string();
        let original = field.file_name().map(str::to_string);

        match original {
            Some(original) if name == state.upload.field_name && stored.is_none() => {
                let data = match field.bytes().await {
                    Ok(data) => data,
                    Err(error) => {
                        tracing::debug!(error = %error, "Rejecting malformed upload body");
                        return (StatusCode::BAD_REQUEST, "Malformed upload request.")
                            .into_response();
                    }
                };

                match store_upload(&state.upload.dir, &original, data).await {
                    Ok(filename) => stored = Some(filename),
                    Err(error) => {
                        tracing::error!(error = %error, dir = %state.upload.dir, "Failed to store upload");
                        return (StatusCode::INTERNAL_SERVER_ERROR, "Failed to store upload.")
                            .into_response();
                    }
                }
            }
            Some(_) => {
                // Unexpected or extra file fields are drained and dropped.
            }
            None => {
                if let Ok(value) = field.text().await {
                    tracing::debug!(field = %name, value = %value, "Upload form field");
                }
            }
        }
    }

    match stored {
        Some(filename) => (StatusCode::OK, format!("File uploaded: {filename}")).into_response(),
        None => (StatusCode::BAD_REQUEST, "No file uploaded.").into_response(),
    }
}

/// Write the upload under a collision-resistant name, returning that name.
async fn store_upload(dir: &str, original: &str, data: Bytes) -> std::io::Result<String> {
    let filename = unique_name(original);
    fs::create_dir_all(dir).await?;
    let path = Path::new(dir).join(&filename);
    fs::write(&path, data).await?;

    tracing::info!(path = %path.display(), "File stored");
    Ok(filename)
}

/// Millisecond timestamp plus a random suffix, keeping the original extension.
fn unique_name(original: &str) -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis())
        .unwrap_or(0);

    format!(
        "{}-{}{}",
        millis,
        fastrand::u64(..1_000_000_000),
        extension(original)
    )
}

/// Dot-prefixed extension of the original filename, or empty when none.
fn extension(original: &str) -> String {
    match Path::new(original).extension().and_then(|ext| ext.to_str()) {
        Some(ext) => format!(".{ext}"),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_submit_reports_valid_fields() {
        let Json(body) = submit().await;
        assert_eq!(body.message, "Fields are valid!");
    }

    #[tokio::test]
    async fn test_health_reports_crate_version() {
        let Json(body) = health().await;
        assert_eq!(body.version, env!("CARGO_PKG_VERSION"));
        assert_eq!(body.status, "operational");
    }

    #[test]
    fn test_extension_keeps_the_dot() {
        assert_eq!(extension("photo.JPG"), ".JPG");
        assert_eq!(extension("archive.tar.gz"), ".gz");
    }

    #[test]
    fn test_extension_empty_when_absent() {
        assert_eq!(extension("README"), "");
        assert_eq!(extension(".bashrc"), "");
    }

    #[test]
    fn test_unique_name_embeds_timestamp_and_extension() {
        let name = unique_name("notes.txt");

        let (prefix, rest) = name.split_once('-').unwrap();
        assert!(prefix.parse::<u128>().unwrap() > 0);
        assert!(rest.ends_with(".txt"));
        assert!(rest.trim_end_matches(".txt").parse::<u64>().is_ok());
    }

    #[test]
    fn test_unique_names_differ() {
        assert_ne!(unique_name("a.bin"), unique_name("a.bin"));
    }
}
