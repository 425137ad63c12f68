use crate::modules::activities::adapters::outbound::in_memory_activity_store::InMemoryActivityStore;
use crate::modules::activities::use_cases::list_activities::queries_port::ActivityQueries;
use crate::modules::activities::use_cases::sign_up_participant::handler::SignUpParticipantHandler;
use crate::modules::activities::use_cases::unregister_participant::handler::UnregisterParticipantHandler;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub queries: Arc<dyn ActivityQueries + Send + Sync>,
    pub sign_up_handler: Arc<SignUpParticipantHandler<InMemoryActivityStore>>,
    pub unregister_handler: Arc<UnregisterParticipantHandler<InMemoryActivityStore>>,
    pub landing_page: Arc<str>,
}

impl AppState {
    pub fn in_memory(store: Arc<InMemoryActivityStore>, landing_page: &str) -> Self {
        Self {
            queries: store.clone(),
            sign_up_handler: Arc::new(SignUpParticipantHandler::new(store.clone())),
            unregister_handler: Arc::new(UnregisterParticipantHandler::new(store)),
            landing_page: Arc::from(landing_page),
        }
    }
}
