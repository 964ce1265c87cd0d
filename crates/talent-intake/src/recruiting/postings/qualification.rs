use serde::{Deserialize, Serialize};

use super::domain::QuestionPair;

/// Validation errors raised while authoring a qualification step.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum QualificationError {
    #[error("a qualification step needs at least one complete question/criterion pair")]
    NoValidQuestions,
    #[error("minimum correct answers must be between 1 and {complete} (got {requested})")]
    ThresholdOutOfRange { requested: u32, complete: u32 },
}

impl QualificationError {
    /// Stable machine-readable reason code reported to clients.
    pub const fn code(&self) -> &'static str {
        match self {
            QualificationError::NoValidQuestions => "no-valid-questions",
            QualificationError::ThresholdOutOfRange { .. } => "threshold-out-of-range",
        }
    }
}

/// Persist-ready qualification configuration: only complete pairs survive and
/// the threshold is guaranteed in range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualificationConfig {
    questions: Vec<QuestionPair>,
    minimum_correct_answers: Option<u32>,
}

impl QualificationConfig {
    /// Posting without a qualification step.
    pub fn none() -> Self {
        Self {
            questions: Vec::new(),
            minimum_correct_answers: None,
        }
    }

    /// Validate raw authoring input into a persist-ready configuration.
    ///
    /// Pairs with a blank question or criterion (after trimming) are
    /// discarded. An empty input means the posting has no qualification step;
    /// input that only contains incomplete pairs is rejected rather than
    /// silently saved as empty.
    pub fn validate(
        pairs: &[QuestionPair],
        threshold: Option<u32>,
    ) -> Result<Self, QualificationError> {
        if pairs.is_empty() {
            return Ok(Self::none());
        }

        let complete = complete_pairs(pairs);
        if complete.is_empty() {
            return Err(QualificationError::NoValidQuestions);
        }

        let count = complete.len() as u32;
        let requested = threshold.unwrap_or(0);
        if requested < 1 || requested > count {
            return Err(QualificationError::ThresholdOutOfRange {
                requested,
                complete: count,
            });
        }

        Ok(Self {
            questions: complete,
            minimum_correct_answers: Some(requested),
        })
    }

    /// Edit-time side effect: pull a stored threshold back into range after
    /// the question list changed. Returns `None` when no complete pair is
    /// left (the qualification step disappears with its questions).
    pub fn clamp_threshold(complete_count: usize, current: u32) -> Option<u32> {
        if complete_count == 0 {
            return None;
        }
        Some(current.clamp(1, complete_count as u32))
    }

    /// Count of pairs that would survive validation.
    pub fn complete_count(pairs: &[QuestionPair]) -> usize {
        complete_pairs(pairs).len()
    }

    pub fn questions(&self) -> &[QuestionPair] {
        &self.questions
    }

    pub fn minimum_correct_answers(&self) -> Option<u32> {
        self.minimum_correct_answers
    }

    pub fn has_questions(&self) -> bool {
        !self.questions.is_empty()
    }

    pub fn into_parts(self) -> (Vec<QuestionPair>, Option<u32>) {
        (self.questions, self.minimum_correct_answers)
    }
}

fn complete_pairs(pairs: &[QuestionPair]) -> Vec<QuestionPair> {
    pairs
        .iter()
        .filter_map(|pair| {
            let question = pair.question.trim();
            let criterion = pair.criterion.trim();
            if question.is_empty() || criterion.is_empty() {
                None
            } else {
                Some(QuestionPair::new(question, criterion))
            }
        })
        .collect()
}
