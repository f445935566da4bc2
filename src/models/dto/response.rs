use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::domain::{Challenge, DocumentFormat, Session};

#[derive(Debug, Clone, Serialize)]
pub struct UploadResponse {
    pub session_id: Uuid,
    pub file_name: String,
    pub format: DocumentFormat,
    pub char_count: usize,
    pub created_at: DateTime<Utc>,
}

impl From<&Session> for UploadResponse {
    fn from(session: &Session) -> Self {
        UploadResponse {
            session_id: session.id,
            file_name: session.file_name.clone(),
            format: session.format,
            char_count: session.document.chars().count(),
            created_at: session.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryResponse {
    pub session_id: Uuid,
    pub summary: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChallengeResponse {
    pub session_id: Uuid,
    pub count: usize,
    #[serde(flatten)]
    pub challenge: Challenge,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubjectiveFeedback {
    pub question: String,
    pub answer: String,
    pub feedback: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubjectiveFeedbackResponse {
    pub session_id: Uuid,
    pub feedback: Vec<SubjectiveFeedback>,
}
