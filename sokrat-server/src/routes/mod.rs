//! HTTP surface: route table, CORS, and body limits.

pub mod chat;
pub mod media;
pub mod quiz;
pub mod resources;
pub mod search;

use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderValue, Method, header};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::warn;

use crate::state::AppState;

/// Assemble the application router.
#[must_use]
pub fn router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.server.allowed_origins);
    let body_limit = DefaultBodyLimit::max(state.config.media.max_upload_bytes);

    Router::new()
        // Socratic tutoring
        .route("/query", post(chat::query))
        // Quiz generation and grading
        .route("/generate-mcqs", post(quiz::generate_mcqs))
        .route("/grade-quiz", post(quiz::grade_quiz))
        // Search and study resources
        .route("/search", post(search::search))
        .route("/resources", post(resources::resources))
        // Multimedia questions and speech
        .route("/image-query", post(media::image_query))
        .route("/video-query", post(media::video_query))
        .route("/voice-query", post(media::voice_query))
        .route("/download-audio/{id}", get(media::download_audio))
        // Liveness
        .route("/health", get(health))
        .layer(cors)
        .layer(body_limit)
        .with_state(state)
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(parse_origins(allowed_origins)))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true)
}

fn parse_origins(allowed_origins: &[String]) -> Vec<HeaderValue> {
    allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring unparseable CORS origin {:?}", origin);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origins_parse_to_header_values() {
        let origins = parse_origins(&[
            "http://localhost:5173".to_string(),
            "https://sokrat.example.org".to_string(),
        ]);
        assert_eq!(origins.len(), 2);
        assert_eq!(origins[0], HeaderValue::from_static("http://localhost:5173"));
    }

    #[test]
    fn unparseable_origin_is_skipped() {
        let origins = parse_origins(&[
            "http://localhost:5173".to_string(),
            "bad\norigin".to_string(),
        ]);
        assert_eq!(origins.len(), 1);
    }
}
