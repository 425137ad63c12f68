use crate::modules::activities::adapters::outbound::in_memory_activity_store::InMemoryActivityStore;
use crate::shell::state::AppState;
use crate::tests::fixtures::activities::test_seed;
use std::sync::Arc;

pub const LANDING_PAGE: &str = "/static/index.html";

pub fn make_test_state() -> AppState {
    let store = Arc::new(InMemoryActivityStore::new(test_seed()));
    AppState::in_memory(store, LANDING_PAGE)
}

pub fn make_offline_state() -> AppState {
    let mut store = InMemoryActivityStore::new(test_seed());
    store.toggle_offline();
    AppState::in_memory(Arc::new(store), LANDING_PAGE)
}
