//! Web search endpoint.
//!
//! One web search, then the tutor model summarizes the hits into a single
//! answer. Unlike `/resources` this endpoint does not filter by topic; the
//! student asked an open question and gets whatever the web knows.

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use tracing::info;

use sokrat_llm::prompt::summary_request;
use sokrat_search::SearchHit;

use crate::error::ApiResult;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub query: String,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub response: String,
}

/// `POST /search` — web search plus model summary.
pub async fn search(
    State(state): State<AppState>,
    Json(request): Json<SearchRequest>,
) -> ApiResult<Json<SearchResponse>> {
    let outcome = state.serper.search(&request.query).await?;
    let hits = outcome.hits();
    if hits.is_empty() {
        info!("Web search found nothing for {:?}", request.query);
        return Ok(Json(SearchResponse {
            response: "No results found.".to_string(),
        }));
    }

    let chat_request = state.tune(summary_request(&request.query, &render_hits(hits)));
    let reply = state.llm.chat(&chat_request).await?;
    Ok(Json(SearchResponse {
        response: reply.text,
    }))
}

// Same line shape the resource bundle renders, without platform headers.
fn render_hits(hits: &[SearchHit]) -> String {
    let mut block = String::new();
    for hit in hits {
        let _ = writeln!(block, "- {}\n  {}", hit.title, hit.snippet);
    }
    block
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hits_render_as_title_snippet_lines() {
        let hits = vec![
            SearchHit {
                title: "Dijkstra's algorithm".to_string(),
                link: "https://example.com/dijkstra".to_string(),
                snippet: "Shortest paths from a source node.".to_string(),
            },
            SearchHit {
                title: "Bellman-Ford".to_string(),
                link: "https://example.com/bellman-ford".to_string(),
                snippet: "Handles negative edge weights.".to_string(),
            },
        ];

        assert_eq!(
            render_hits(&hits),
            "- Dijkstra's algorithm\n  Shortest paths from a source node.\n\
             - Bellman-Ford\n  Handles negative edge weights.\n"
        );
    }

    #[test]
    fn no_hits_render_empty() {
        assert_eq!(render_hits(&[]), "");
    }
}
