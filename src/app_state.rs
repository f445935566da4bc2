use std::sync::Arc;

use crate::{
    config::Config,
    repositories::InMemorySessionRepository,
    services::{
        assistant_service::AssistantService,
        model_gateway::{OpenAiTextGenerator, TextGenerator},
        session_service::SessionService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub assistant_service: Arc<AssistantService>,
    pub session_service: Arc<SessionService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let generator = Arc::new(OpenAiTextGenerator::new(&config));
        Self::with_generator(config, generator)
    }

    /// Wires the state around any `TextGenerator`.
    pub fn with_generator(config: Config, generator: Arc<dyn TextGenerator>) -> Self {
        let session_repository = Arc::new(InMemorySessionRepository::new(config.max_sessions));
        let session_service = Arc::new(SessionService::new(session_repository));
        let assistant_service = Arc::new(AssistantService::new(generator));

        Self {
            assistant_service,
            session_service,
            config: Arc::new(config),
        }
    }
}
