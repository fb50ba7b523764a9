//! Study-resource discovery endpoint.
//!
//! Queries the encyclopedia, video, and web providers in sequence, keeps the
//! hits that look like DSA study material, and has the tutor model summarize
//! the survivors. A provider that errors contributes nothing; only all three
//! coming back empty is a client-visible failure.

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};
use tracing::warn;

use sokrat_llm::prompt::summary_request;
use sokrat_search::relevance::filter_hits;
use sokrat_search::{ResourceBundle, SearchError, SearchHit, SearchOutcome};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ResourcesRequest {
    pub query: String,
}

#[derive(Debug, Serialize)]
pub struct ResourcesResponse {
    pub results: ResourceBundle,
    pub summary: String,
}

/// `POST /resources` — per-platform study material plus a summary.
pub async fn resources(
    State(state): State<AppState>,
    Json(request): Json<ResourcesRequest>,
) -> ApiResult<Json<ResourcesResponse>> {
    let bundle = ResourceBundle {
        wikipedia: platform_hits(state.wikipedia.search(&request.query).await, "Wikipedia"),
        youtube: platform_hits(state.youtube.search(&request.query).await, "YouTube"),
        web: platform_hits(state.serper.search(&request.query).await, "Web"),
    };
    if bundle.is_empty() {
        return Err(ApiError::NoResources);
    }

    let summary = summarize(&state, &request.query, &bundle).await;
    Ok(Json(ResourcesResponse {
        results: bundle,
        summary,
    }))
}

/// One platform's contribution. Transport errors degrade to no hits, and the
/// relevance filter keeps DSA study material only.
fn platform_hits(
    result: Result<SearchOutcome, SearchError>,
    platform: &str,
) -> Vec<SearchHit> {
    match result {
        Ok(outcome) => filter_hits(outcome.hits()),
        Err(e) => {
            warn!("{} search degraded to empty: {}", platform, e);
            Vec::new()
        }
    }
}

// A summary failure degrades to an empty string; the student still gets the
// resource lists.
async fn summarize(state: &AppState, query: &str, bundle: &ResourceBundle) -> String {
    let chat_request = state.tune(summary_request(query, &bundle.render_results_block()));
    match state.llm.chat(&chat_request).await {
        Ok(reply) => reply.text,
        Err(e) => {
            warn!("Resource summary degraded to empty: {}", e);
            String::new()
        }
    }
}
