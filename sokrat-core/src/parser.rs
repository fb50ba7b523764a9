//! MCQ response parsing — free-form model text to structured quiz records.
//!
//! The generation prompt asks the model for a delimiter-structured document:
//! each question block opens with the literal `**MCQ` marker and closes with
//! a `Correct: X) ...` answer line. This module is the single place that
//! understands that layout. Parsing never fails outright: a malformed block
//! is skipped and logged as a format violation, and an empty result is a
//! valid outcome that tells the caller to fall back to the search adapter.

use thiserror::Error;
use tracing::{debug, warn};

use crate::quiz::{OPTION_COUNT, QuizItem};

/// Literal marker preceding each question block in model output.
pub const QUESTION_MARKER: &str = "**MCQ";

/// Literal marker preceding the answer key inside a block.
pub const ANSWER_MARKER: &str = "Correct:";

const OPTION_TOKENS: [&str; OPTION_COUNT] = ["A)", "B)", "C)", "D)"];

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Parse raw model output into quiz records.
///
/// Splits on [`QUESTION_MARKER`], discards the preamble before the first
/// marker, and extracts one [`QuizItem`] per well-formed block. Blocks that
/// violate the expected format are dropped and logged, never coerced; every
/// returned item has exactly four options and a valid answer index.
#[must_use]
pub fn parse_quiz_response(raw: &str) -> Vec<QuizItem> {
    let mut items = Vec::new();

    let mut segments = raw.split(QUESTION_MARKER);
    let _preamble = segments.next();

    for (ordinal, segment) in segments.enumerate() {
        match parse_segment(segment) {
            Ok(item) => items.push(item),
            Err(violation) => {
                warn!("Skipping quiz block {}: {}", ordinal + 1, violation);
                debug!("Offending block text: {:?}", segment);
            }
        }
    }

    debug!("Parsed {} quiz items from model output", items.len());
    items
}

/// Why a question block was dropped instead of emitted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
enum ParseViolation {
    /// The block has no answer marker at all.
    #[error("no 'Correct:' answer marker in block")]
    MissingAnswerMarker,
    /// The block ends before the line the question is read from.
    #[error("no question line after the block title")]
    MissingQuestionLine,
    /// Wrong number of option lines.
    #[error("expected 4 option lines, found {found}")]
    OptionCount { found: usize },
    /// The answer key did not name one of the four options.
    #[error("answer key {0:?} is not one of A-D")]
    AnswerKey(String),
}

/// Parse one question block into a quiz record.
///
/// The extraction is positional by contract with the upstream prompt: the
/// question is the line immediately after the block title, and the answer
/// key is whatever precedes the first `)` after the answer marker. All of
/// the layout assumptions live here and nowhere else.
fn parse_segment(segment: &str) -> Result<QuizItem, ParseViolation> {
    // Split at the first answer marker; a second occurrence stays in the
    // answer part and is ignored by the key extraction.
    let Some((question_part, correct_part)) = segment.split_once(ANSWER_MARKER) else {
        return Err(ParseViolation::MissingAnswerMarker);
    };

    // Plain '\n' split, not `lines()`: positional indexing below must see
    // empty segments exactly where the model emitted blank lines.
    let lines: Vec<&str> = question_part.split('\n').collect();

    // The question is the line after the block title, kept as literal
    // (untrimmed) text.
    let question = *lines.get(1).ok_or(ParseViolation::MissingQuestionLine)?;

    let options: Vec<String> = lines.iter().copied().filter_map(option_text).collect();
    if options.len() != OPTION_COUNT {
        return Err(ParseViolation::OptionCount {
            found: options.len(),
        });
    }

    let correct_index = answer_index(correct_part)?;

    Ok(QuizItem {
        question: question.to_string(),
        options,
        correct_index,
        placeholder: false,
    })
}

/// Extract option text from a line, if it is an option line.
///
/// An option line is one whose trimmed first two characters are `A)`, `B)`,
/// `C)`, or `D)` (case-sensitive). The option text is everything after the
/// token, trimmed.
fn option_text(line: &str) -> Option<String> {
    let trimmed = line.trim();
    let token = trimmed.get(..2)?;
    if OPTION_TOKENS.contains(&token) {
        Some(trimmed[2..].trim().to_string())
    } else {
        None
    }
}

/// Map answer-key text to a 0-based option index.
///
/// Takes the text up to the first `)`, trims it, and requires exactly one of
/// the letters `A` through `D` (ordinal offset from `A`). When the answer
/// carries no `)` at all, the split degrades to the whole text, so a bare
/// letter still resolves. Anything else is a violation.
fn answer_index(correct_part: &str) -> Result<usize, ParseViolation> {
    let letter = correct_part.split(')').next().unwrap_or("").trim();
    match letter {
        "A" => Ok(0),
        "B" => Ok(1),
        "C" => Ok(2),
        "D" => Ok(3),
        other => Err(ParseViolation::AnswerKey(other.to_string())),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
