//! Socratic chat endpoint.

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};
use tracing::debug;

use sokrat_core::transcript::{ConversationTurn, prune_history, render_history};
use sokrat_llm::prompt::socratic_request;

use crate::error::ApiResult;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatTurnRequest {
    pub query: String,
    /// Transcript so far; the caller owns persistence and sends it back on
    /// every turn.
    #[serde(default)]
    pub history: Vec<ConversationTurn>,
}

#[derive(Debug, Serialize)]
pub struct ChatTurnResponse {
    pub response: String,
    pub history: Vec<ConversationTurn>,
}

/// `POST /query` — one Socratic tutoring turn.
///
/// The incoming transcript is pruned of blank turns, rendered into the
/// prompt, and echoed back extended with the new exchange.
pub async fn query(
    State(state): State<AppState>,
    Json(request): Json<ChatTurnRequest>,
) -> ApiResult<Json<ChatTurnResponse>> {
    let mut history = prune_history(&request.history);
    let rendered = render_history(&history);

    let chat_request = state.tune(socratic_request(&rendered, &request.query));
    let reply = state.llm.chat(&chat_request).await?;
    debug!(
        "Socratic reply from {} in {}ms ({} tokens)",
        reply.model, reply.latency_ms, reply.tokens_generated
    );

    history.push(ConversationTurn::new(request.query, reply.text.clone()));
    Ok(Json(ChatTurnResponse {
        response: reply.text,
        history,
    }))
}
