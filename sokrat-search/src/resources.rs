//! The study-resources bundle: one column per platform, plus the text block
//! fed to the summarizer.

use serde::{Deserialize, Serialize};

use crate::types::SearchHit;

/// Relevance-filtered results from the three platforms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceBundle {
    /// Encyclopedia articles.
    pub wikipedia: Vec<SearchHit>,
    /// Video lessons.
    pub youtube: Vec<SearchHit>,
    /// General web results.
    pub web: Vec<SearchHit>,
}

impl ResourceBundle {
    /// Whether no platform contributed anything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.wikipedia.is_empty() && self.youtube.is_empty() && self.web.is_empty()
    }

    /// Render the bundle as the text block the summary prompt consumes.
    ///
    /// One section per platform, every hit as a title line and an indented
    /// snippet line. Empty platforms still get their header; the summarizer
    /// reads the absence.
    #[must_use]
    pub fn render_results_block(&self) -> String {
        let mut block = String::new();
        for (platform, hits) in [
            ("Wikipedia", &self.wikipedia),
            ("Youtube", &self.youtube),
            ("Web", &self.web),
        ] {
            block.push_str(&format!("\n{platform} Results:\n"));
            for hit in hits {
                block.push_str(&format!("- {}\n  {}\n", hit.title, hit.snippet));
            }
        }
        block
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(title: &str, snippet: &str) -> SearchHit {
        SearchHit {
            title: title.to_string(),
            link: "https://example.com".to_string(),
            snippet: snippet.to_string(),
        }
    }

    #[test]
    fn bundle_is_empty_only_when_all_platforms_are() {
        let mut bundle = ResourceBundle::default();
        assert!(bundle.is_empty());

        bundle.youtube.push(hit("Graph course", "full course on graphs"));
        assert!(!bundle.is_empty());
    }

    #[test]
    fn results_block_sections_every_platform() {
        let bundle = ResourceBundle {
            wikipedia: vec![hit("Stack (abstract data type)", "a stack is a LIFO structure")],
            youtube: vec![],
            web: vec![hit("Stack tutorial", "a tutorial on stacks")],
        };

        let block = bundle.render_results_block();
        assert_eq!(
            block,
            "\nWikipedia Results:\n\
             - Stack (abstract data type)\n  a stack is a LIFO structure\n\
             \nYoutube Results:\n\
             \nWeb Results:\n\
             - Stack tutorial\n  a tutorial on stacks\n"
        );
    }

    #[test]
    fn bundle_serializes_with_platform_keys() {
        let bundle = ResourceBundle {
            wikipedia: vec![hit("Queue", "FIFO")],
            youtube: vec![],
            web: vec![],
        };
        let value = serde_json::to_value(&bundle).expect("serialize");
        assert!(value["wikipedia"].is_array());
        assert!(value["youtube"].is_array());
        assert!(value["web"].is_array());
        assert_eq!(value["wikipedia"][0]["title"], "Queue");
    }
}
