//! Speech synthesis for the multimedia answers.
//!
//! Uses the Google Translate TTS endpoint, one GET per whitespace-split
//! chunk, and concatenates the returned MP3 bytes into a single per-request
//! file named by UUID. The download endpoint serves that file once and
//! deletes it.

use std::path::PathBuf;
use std::time::Duration;

use reqwest::Client;
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

/// Upper bound on the text length of one synthesis request, in bytes.
const MAX_CHUNK_LEN: usize = 180;

/// Per-chunk request timeout.
const TTS_REQUEST_TIMEOUT_MS: u64 = 15_000;

const TTS_ENDPOINT: &str = "https://translate.google.com/translate_tts";

/// Errors from the synthesis pipeline. Callers treat synthesis as
/// best-effort and degrade to a text-only answer.
#[derive(Debug, Error)]
pub enum SpeechError {
    /// HTTP request failed.
    #[error("Speech request failed: {0}")]
    RequestFailed(String),

    /// Endpoint answered with a non-success status code.
    #[error("Speech endpoint returned HTTP {0}")]
    Upstream(u16),

    /// The answer text contained nothing speakable.
    #[error("Nothing to synthesize")]
    EmptyText,

    /// Could not write the audio file.
    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for SpeechError {
    fn from(err: reqwest::Error) -> Self {
        SpeechError::RequestFailed(err.to_string())
    }
}

/// Client that turns answer text into a downloadable MP3.
pub struct SpeechClient {
    http: Client,
    media_dir: PathBuf,
    lang: String,
}

impl SpeechClient {
    /// Create a client writing audio files under `media_dir`.
    #[must_use]
    pub fn new(media_dir: PathBuf, lang: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            media_dir,
            lang: lang.into(),
        }
    }

    /// Synthesize `text` into an MP3 under the media dir.
    ///
    /// Returns the audio id that `GET /download-audio/{id}` serves.
    ///
    /// # Errors
    ///
    /// Returns `Err` when the text is empty, a chunk request fails, or the
    /// file cannot be written.
    pub async fn synthesize(&self, text: &str) -> Result<String, SpeechError> {
        let chunks = chunk_text(text);
        if chunks.is_empty() {
            return Err(SpeechError::EmptyText);
        }

        let mut audio: Vec<u8> = Vec::new();
        for chunk in &chunks {
            let resp = self
                .http
                .get(TTS_ENDPOINT)
                .query(&[
                    ("ie", "UTF-8"),
                    ("client", "tw-ob"),
                    ("tl", self.lang.as_str()),
                    ("q", chunk.as_str()),
                ])
                .timeout(Duration::from_millis(TTS_REQUEST_TIMEOUT_MS))
                .send()
                .await?;
            if !resp.status().is_success() {
                return Err(SpeechError::Upstream(resp.status().as_u16()));
            }
            audio.extend_from_slice(&resp.bytes().await?);
        }

        tokio::fs::create_dir_all(&self.media_dir).await?;
        let id = Uuid::new_v4().to_string();
        let path = self.audio_path(&id);
        tokio::fs::write(&path, &audio).await?;
        debug!(
            "Wrote {} bytes of speech across {} chunks to {}",
            audio.len(),
            chunks.len(),
            path.display()
        );
        Ok(id)
    }

    /// Path of the audio file for an id. The id must already be validated as
    /// a UUID so the path cannot escape the media dir.
    #[must_use]
    pub fn audio_path(&self, id: &str) -> PathBuf {
        self.media_dir.join(format!("speech-{id}.mp3"))
    }
}

/// Strip markup the voice should not read out loud.
#[must_use]
pub fn speakable(text: &str) -> String {
    text.replace('*', "")
}

/// Split text into synthesis-sized chunks, preferring whitespace boundaries.
///
/// Words are packed greedily up to [`MAX_CHUNK_LEN`]; a single token longer
/// than a whole chunk is cut at char boundaries. Whitespace runs collapse to
/// single spaces, which is fine for speech.
#[must_use]
pub fn chunk_text(text: &str) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if word.len() > MAX_CHUNK_LEN {
            if !current.is_empty() {
                chunks.push(std::mem::take(&mut current));
            }
            hard_split(word, &mut chunks, &mut current);
            continue;
        }
        let needed = if current.is_empty() {
            word.len()
        } else {
            word.len() + 1
        };
        if current.len() + needed > MAX_CHUNK_LEN && !current.is_empty() {
            chunks.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}

// Cuts an oversized token; the tail stays in `current` so following words
// fill the same chunk.
fn hard_split(word: &str, chunks: &mut Vec<String>, current: &mut String) {
    for ch in word.chars() {
        if current.len() + ch.len_utf8() > MAX_CHUNK_LEN {
            chunks.push(std::mem::take(current));
        }
        current.push(ch);
    }
}
