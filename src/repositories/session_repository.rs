use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    errors::{AppError, AppResult},
    models::domain::Session,
};

#[async_trait]
pub trait SessionRepository: Send + Sync {
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Session>>;
    async fn create(&self, session: Session) -> AppResult<Session>;
    async fn update(&self, session: Session) -> AppResult<Session>;
}

/// Sessions held in process memory, capped at `capacity` entries. When full,
/// the oldest session is evicted to make room.
pub struct InMemorySessionRepository {
    sessions: RwLock<HashMap<Uuid, Session>>,
    capacity: usize,
}

impl InMemorySessionRepository {
    pub fn new(capacity: usize) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            capacity: capacity.max(1),
        }
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Session>> {
        let sessions = self.sessions.read().await;
        Ok(sessions.get(id).cloned())
    }

    async fn create(&self, session: Session) -> AppResult<Session> {
        let mut sessions = self.sessions.write().await;

        while sessions.len() >= self.capacity {
            let Some(oldest) = sessions
                .values()
                .min_by_key(|s| s.created_at)
                .map(|s| s.id)
            else {
                break;
            };
            log::info!("Evicting session {} to stay within capacity", oldest);
            sessions.remove(&oldest);
        }

        sessions.insert(session.id, session.clone());
        Ok(session)
    }

    async fn update(&self, session: Session) -> AppResult<Session> {
        let mut sessions = self.sessions.write().await;
        if !sessions.contains_key(&session.id) {
            return Err(AppError::NotFound(format!(
                "Session with id '{}' not found",
                session.id
            )));
        }

        sessions.insert(session.id, session.clone());
        Ok(session)
    }
}
