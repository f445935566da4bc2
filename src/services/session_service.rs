use std::sync::Arc;

use uuid::Uuid;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{Challenge, DocumentFormat, Session},
    repositories::SessionRepository,
};

pub struct SessionService {
    repository: Arc<dyn SessionRepository>,
}

impl SessionService {
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self { repository }
    }

    /// Starts a session for freshly extracted text. Empty documents never
    /// get a session.
    pub async fn create_session(
        &self,
        file_name: &str,
        format: DocumentFormat,
        document: String,
    ) -> AppResult<Session> {
        if document.trim().is_empty() {
            return Err(AppError::EmptyDocument);
        }

        let session = self
            .repository
            .create(Session::new(file_name, format, document))
            .await?;
        log::info!(
            "Created session {} for '{}' ({} chars)",
            session.id,
            session.file_name,
            session.document.chars().count()
        );
        Ok(session)
    }

    pub async fn get_session(&self, id: &Uuid) -> AppResult<Session> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Session with id '{}' not found", id)))
    }

    pub async fn store_summary(&self, id: &Uuid, summary: String) -> AppResult<Session> {
        let mut session = self.get_session(id).await?;
        session.summary = Some(summary);
        self.repository.update(session).await
    }

    /// Stores `challenge`, replacing whichever challenge was there before.
    pub async fn store_challenge(&self, id: &Uuid, challenge: Challenge) -> AppResult<Session> {
        let mut session = self.get_session(id).await?;
        session.challenge = Some(challenge);
        self.repository.update(session).await
    }
}
