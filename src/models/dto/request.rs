use serde::Deserialize;
use validator::Validate;

use crate::constants::prompts::{DEFAULT_QUIZ_QUESTIONS, DEFAULT_SUBJECTIVE_QUESTIONS};

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AskQuestionRequest {
    #[validate(length(min = 1, max = 2000, message = "Question must be 1-2000 characters"))]
    pub question: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChallengeKind {
    Objective,
    Subjective,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateChallengeRequest {
    pub kind: ChallengeKind,

    #[validate(range(min = 1, max = 20))]
    pub num_questions: Option<usize>,
}

impl GenerateChallengeRequest {
    pub fn question_count(&self) -> usize {
        self.num_questions.unwrap_or(match self.kind {
            ChallengeKind::Objective => DEFAULT_QUIZ_QUESTIONS,
            ChallengeKind::Subjective => DEFAULT_SUBJECTIVE_QUESTIONS,
        })
    }
}

/// Answers in question order.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubmitAnswersRequest {
    #[validate(length(max = 20))]
    pub answers: Vec<String>,
}
