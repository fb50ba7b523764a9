//! Quiz scoring and the tiered performance report.

use serde::{Deserialize, Serialize};

use crate::quiz::QuizItem;

/// Outcome of grading one quiz run. Derived, stateless, recomputed per quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreReport {
    /// How many submitted answers matched the answer key.
    pub correct_count: usize,
    /// How many questions the quiz had.
    pub total: usize,
    /// Human-readable summary, one encouragement tier appended.
    pub message: String,
}

/// Grade submitted answers against the quiz items.
///
/// Answers are 1-based option numbers as entered by the student and are
/// converted to 0-based for comparison. A missing answer counts as
/// incorrect; surplus answers beyond the question count are ignored. No
/// partial credit, no negative scoring.
#[must_use]
pub fn grade(items: &[QuizItem], answers: &[usize]) -> ScoreReport {
    let correct_count = items
        .iter()
        .zip(answers)
        .filter(|(item, answer)| answer.checked_sub(1) == Some(item.correct_index))
        .count();
    let total = items.len();

    ScoreReport {
        correct_count,
        total,
        message: report_message(correct_count, total),
    }
}

/// Render the summary message for a score.
///
/// Three tiers: full score, at least half (integer floor division), and
/// below half, each with a fixed encouragement line.
#[must_use]
pub fn report_message(correct_count: usize, total: usize) -> String {
    let mut message = format!("\nYou answered {correct_count} out of {total} questions correctly.\n");
    message.push_str(if correct_count == total {
        "Excellent performance! 🌟 You're mastering this topic."
    } else if correct_count >= total / 2 {
        "Good job! 👍 You have a good understanding but there is space for improvement."
    } else {
        "It looks like you need more practice. Don't worry, you'll get there with more effort! 💪"
    });
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(correct_index: usize) -> QuizItem {
        QuizItem {
            question: "Q?".to_string(),
            options: vec![
                "a".to_string(),
                "b".to_string(),
                "c".to_string(),
                "d".to_string(),
            ],
            correct_index,
            placeholder: false,
        }
    }

    fn quiz() -> Vec<QuizItem> {
        vec![item(0), item(1), item(2), item(3), item(0)]
    }

    #[test]
    fn perfect_score_is_excellent_tier() {
        let report = grade(&quiz(), &[1, 2, 3, 4, 1]);
        assert_eq!(report.correct_count, 5);
        assert_eq!(report.total, 5);
        assert!(report.message.starts_with("\nYou answered 5 out of 5 questions correctly.\n"));
        assert!(report.message.contains("Excellent performance!"));
    }

    #[test]
    fn zero_score_is_needs_practice_tier() {
        let report = grade(&quiz(), &[2, 1, 1, 1, 2]);
        assert_eq!(report.correct_count, 0);
        assert!(report.message.contains("you need more practice"));
    }

    #[test]
    fn floor_half_is_good_job_tier() {
        // 2 of 5 correct sits exactly at 5 / 2 with integer division.
        let report = grade(&quiz(), &[1, 2, 1, 1, 2]);
        assert_eq!(report.correct_count, 2);
        assert!(report.message.contains("Good job!"));
    }

    #[test]
    fn one_below_floor_half_is_needs_practice() {
        let report = grade(&quiz(), &[1, 1, 1, 1, 2]);
        assert_eq!(report.correct_count, 1);
        assert!(report.message.contains("you need more practice"));
    }

    #[test]
    fn answers_are_one_based() {
        let report = grade(&[item(1)], &[2]);
        assert_eq!(report.correct_count, 1);
    }

    #[test]
    fn zero_answer_is_incorrect_not_a_panic() {
        let report = grade(&[item(0)], &[0]);
        assert_eq!(report.correct_count, 0);
    }

    #[test]
    fn missing_answers_count_as_incorrect() {
        let report = grade(&quiz(), &[1, 2]);
        assert_eq!(report.correct_count, 2);
        assert_eq!(report.total, 5);
    }

    #[test]
    fn surplus_answers_are_ignored() {
        let report = grade(&[item(0)], &[1, 4, 4, 4]);
        assert_eq!(report.correct_count, 1);
        assert_eq!(report.total, 1);
    }

    #[test]
    fn empty_quiz_reports_full_marks_on_nothing() {
        let report = grade(&[], &[]);
        assert_eq!(report.total, 0);
        assert!(report.message.contains("0 out of 0"));
        assert!(report.message.contains("Excellent performance!"));
    }
}
