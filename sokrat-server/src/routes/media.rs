//! Multimedia Q&A endpoints and the speech download.
//!
//! Uploads are spooled to per-request temp files under the media dir; the
//! RAII guard deletes them on every exit path, including errors. The answer
//! is read back, base64-inlined to the multimodal model, and synthesized to
//! speech as a best-effort extra.

use std::io::Write as _;
use std::path::Path as FilePath;

use axum::Json;
use axum::extract::multipart::Field;
use axum::extract::{Multipart, Path, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use tracing::{debug, warn};
use uuid::Uuid;

use sokrat_llm::prompt::{QuerySubject, study_buddy_prompt};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use crate::tts::speakable;

#[derive(Debug, Deserialize)]
pub struct VoiceQueryRequest {
    pub query_text: String,
}

#[derive(Debug, Serialize)]
pub struct MediaAnswer {
    pub text_response: String,
    /// Id for `GET /download-audio/{id}`; `null` when synthesis failed.
    pub audio_id: Option<String>,
}

/// `POST /image-query` — multipart `query_text` + `image`.
pub async fn image_query(
    State(state): State<AppState>,
    multipart: Multipart,
) -> ApiResult<Json<MediaAnswer>> {
    media_query(state, multipart, QuerySubject::Image, "image", "image/jpeg").await
}

/// `POST /video-query` — multipart `query_text` + `video`.
pub async fn video_query(
    State(state): State<AppState>,
    multipart: Multipart,
) -> ApiResult<Json<MediaAnswer>> {
    media_query(state, multipart, QuerySubject::Video, "video", "video/mp4").await
}

/// `POST /voice-query` — plain text in, spoken answer out.
///
/// The reply text is stripped of markup asterisks before it is returned or
/// spoken.
pub async fn voice_query(
    State(state): State<AppState>,
    Json(request): Json<VoiceQueryRequest>,
) -> ApiResult<Json<MediaAnswer>> {
    let prompt = study_buddy_prompt(QuerySubject::Question, &request.query_text);
    let answer = speakable(&state.gemini.generate_text(&prompt).await?);

    let audio_id = synthesize_or_warn(&state, &answer).await;
    Ok(Json(MediaAnswer {
        text_response: answer,
        audio_id,
    }))
}

/// `GET /download-audio/{id}` — serve a synthesized file once, then delete
/// it.
pub async fn download_audio(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Response> {
    // Parsing pins the id to a canonical UUID, so the path cannot escape the
    // media dir.
    let id = Uuid::parse_str(&id).map_err(|_| ApiError::AudioMissing)?;
    let path = state.speech.audio_path(&id.to_string());

    let audio = match tokio::fs::read(&path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ApiError::AudioMissing);
        }
        Err(e) => return Err(e.into()),
    };
    if let Err(e) = tokio::fs::remove_file(&path).await {
        warn!("Could not remove served audio file {}: {}", path.display(), e);
    }

    Ok((
        [
            (header::CONTENT_TYPE, "audio/mpeg"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"speech.mp3\"",
            ),
        ],
        audio,
    )
        .into_response())
}

// Shared driver for the two upload endpoints.
async fn media_query(
    state: AppState,
    mut multipart: Multipart,
    subject: QuerySubject,
    field_name: &str,
    default_mime: &str,
) -> ApiResult<Json<MediaAnswer>> {
    let media_dir = state.media_dir();
    let mut query_text = String::new();
    let mut upload: Option<(NamedTempFile, String)> = None;

    while let Some(mut field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "query_text" => query_text = field.text().await?,
            other if other == field_name => {
                let declared = field.content_type().map(ToString::to_string);
                let file_name = field.file_name().unwrap_or_default().to_string();
                let spooled = spool_upload(&mut field, &media_dir).await?;
                let mime = media_mime(declared, &file_name, default_mime);
                upload = Some((spooled, mime));
            }
            other => debug!("Ignoring unexpected multipart field {:?}", other),
        }
    }

    let (file, mime) = upload
        .ok_or_else(|| ApiError::BadRequest(format!("Missing '{field_name}' upload")))?;
    let media = tokio::fs::read(file.path()).await?;
    debug!(
        "Answering a {:?} query with {} uploaded bytes ({})",
        subject,
        media.len(),
        mime
    );

    let prompt = study_buddy_prompt(subject, &query_text);
    let answer = state.gemini.generate_with_media(&prompt, &mime, &media).await?;

    let audio_id = synthesize_or_warn(&state, &answer).await;
    Ok(Json(MediaAnswer {
        text_response: answer,
        audio_id,
    }))
}

// Synthesis is best-effort: the student still gets the text if TTS is down.
async fn synthesize_or_warn(state: &AppState, text: &str) -> Option<String> {
    match state.speech.synthesize(text).await {
        Ok(id) => Some(id),
        Err(e) => {
            warn!("Speech synthesis failed: {}", e);
            None
        }
    }
}

/// Spool an uploaded field to a temp file under the media dir. The file is
/// deleted when the returned guard drops.
async fn spool_upload(
    field: &mut Field<'_>,
    media_dir: &FilePath,
) -> ApiResult<NamedTempFile> {
    tokio::fs::create_dir_all(media_dir).await?;
    let mut file = NamedTempFile::new_in(media_dir)?;
    while let Some(chunk) = field.chunk().await? {
        file.write_all(&chunk)?;
    }
    Ok(file)
}

/// The uploaded field's declared content type wins; otherwise guess from the
/// filename extension.
fn media_mime(declared: Option<String>, file_name: &str, default: &str) -> String {
    if let Some(mime) = declared {
        return mime;
    }
    let extension = FilePath::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("png") => "image/png".to_string(),
        Some("jpg" | "jpeg") => "image/jpeg".to_string(),
        Some("gif") => "image/gif".to_string(),
        Some("webp") => "image/webp".to_string(),
        Some("mp4") => "video/mp4".to_string(),
        Some("webm") => "video/webm".to_string(),
        Some("mov") => "video/quicktime".to_string(),
        _ => default.to_string(),
    }
}
