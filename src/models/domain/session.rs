use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::domain::{DocumentFormat, QuizItem};

/// A generated challenge. Objective and subjective sets are mutually
/// exclusive: storing one replaces the other.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "questions", rename_all = "lowercase")]
pub enum Challenge {
    Objective(Vec<QuizItem>),
    Subjective(Vec<String>),
}

impl Challenge {
    pub fn len(&self) -> usize {
        match self {
            Challenge::Objective(items) => items.len(),
            Challenge::Subjective(questions) => questions.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Everything held for one uploaded document.
#[derive(Clone, Debug)]
pub struct Session {
    pub id: Uuid,
    pub file_name: String,
    pub format: DocumentFormat,
    pub document: String,
    pub created_at: DateTime<Utc>,
    pub summary: Option<String>,
    pub challenge: Option<Challenge>,
}

impl Session {
    pub fn new(file_name: &str, format: DocumentFormat, document: String) -> Self {
        Session {
            id: Uuid::new_v4(),
            file_name: file_name.to_string(),
            format,
            document,
            created_at: Utc::now(),
            summary: None,
            challenge: None,
        }
    }

    pub fn objective_quiz(&self) -> Option<&[QuizItem]> {
        match &self.challenge {
            Some(Challenge::Objective(items)) => Some(items),
            _ => None,
        }
    }

    pub fn subjective_questions(&self) -> Option<&[String]> {
        match &self.challenge {
            Some(Challenge::Subjective(questions)) => Some(questions),
            _ => None,
        }
    }
}
