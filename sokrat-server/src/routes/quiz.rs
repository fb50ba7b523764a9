//! Quiz generation and grading endpoints.
//!
//! Generation has the one recovery path in the service: when the model text
//! parses to zero items, the web-search fallback substitutes placeholder
//! items built from hit titles. Only when that too comes back empty does the
//! endpoint answer 404.

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use sokrat_core::parser::parse_quiz_response;
use sokrat_core::scoring::{ScoreReport, grade};
use sokrat_core::QuizItem;
use sokrat_llm::prompt::{quiz_request, render_template};
use sokrat_search::{SearchHit, SearchOutcome};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Web query template used when the model path yields nothing.
pub const FALLBACK_QUERY: &str = "multiple choice questions on {topic} with answers";

#[derive(Debug, Deserialize)]
pub struct GenerateQuizRequest {
    pub topic: String,
    pub noq: u32,
    pub level: String,
}

#[derive(Debug, Serialize)]
pub struct GenerateQuizResponse {
    pub mcqs: Vec<QuizItem>,
}

#[derive(Debug, Deserialize)]
pub struct GradeQuizRequest {
    pub mcqs: Vec<QuizItem>,
    /// 1-based option numbers as the student entered them.
    pub answers: Vec<usize>,
}

/// `POST /generate-mcqs` — model first, search fallback second, 404 last.
pub async fn generate_mcqs(
    State(state): State<AppState>,
    Json(request): Json<GenerateQuizRequest>,
) -> ApiResult<Json<GenerateQuizResponse>> {
    let chat_request = state.tune(quiz_request(&request.topic, request.noq, &request.level));

    let parsed = match state.llm.chat(&chat_request).await {
        Ok(reply) => {
            debug!(
                "Quiz model {} answered in {}ms",
                reply.model, reply.latency_ms
            );
            parse_quiz_response(&reply.text)
        }
        Err(e) => {
            warn!("Quiz generation failed, trying search fallback: {}", e);
            Vec::new()
        }
    };
    if !parsed.is_empty() {
        return Ok(Json(GenerateQuizResponse { mcqs: parsed }));
    }

    let query = render_template(FALLBACK_QUERY, &[("topic", &request.topic)]);
    let outcome = match state.serper.search(&query).await {
        Ok(outcome) => outcome,
        Err(e) => {
            warn!("Quiz fallback search failed: {}", e);
            SearchOutcome::Empty
        }
    };

    let mcqs = fallback_items(outcome.hits(), request.noq);
    if mcqs.is_empty() {
        return Err(ApiError::NoQuizAvailable);
    }
    info!(
        "Serving {} placeholder quiz items for topic {:?}",
        mcqs.len(),
        request.topic
    );
    Ok(Json(GenerateQuizResponse { mcqs }))
}

/// `POST /grade-quiz` — tally 1-based answers against the quiz.
pub async fn grade_quiz(Json(request): Json<GradeQuizRequest>) -> Json<ScoreReport> {
    Json(grade(&request.mcqs, &request.answers))
}

/// Build placeholder items from search hits, capped at the requested count.
///
/// Each hit title becomes a question with the fixed stand-in options; the
/// items carry the `placeholder` flag so callers know the answer key is
/// fabricated.
#[must_use]
pub fn fallback_items(hits: &[SearchHit], noq: u32) -> Vec<QuizItem> {
    hits.iter()
        .take(noq as usize)
        .map(|hit| QuizItem::placeholder(hit.title.clone()))
        .collect()
}
