// In memory implementation of the ActivityStore and ActivityQueries ports.
//
// Every activity sits behind its own mutex. A write decides and applies its
// events while holding that guard, so the membership check and the roster
// change are one step. Activities never contend with each other.

use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::core::decision::Decision;
use crate::modules::activities::core::evolve::evolve;
use crate::modules::activities::core::ports::{ActivityStore, DecideFn, StoreError};
use crate::modules::activities::core::seed::seed_activities;
use crate::modules::activities::use_cases::list_activities::projection::ActivityCatalog;
use crate::modules::activities::use_cases::list_activities::queries_port::ActivityQueries;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::Mutex;

#[derive(Default)]
pub struct InMemoryActivityStore {
    names: Vec<String>,
    slots: HashMap<String, Mutex<Activity>>,
    delay_update_ms: AtomicU64,
    is_offline: bool,
}

impl InMemoryActivityStore {
    pub fn new(activities: impl IntoIterator<Item = (String, Activity)>) -> Self {
        let mut store = Self::default();
        for (name, activity) in activities {
            if let Entry::Vacant(entry) = store.slots.entry(name.clone()) {
                entry.insert(Mutex::new(activity));
                store.names.push(name);
            }
        }
        store
    }

    pub fn seeded() -> Self {
        Self::new(seed_activities())
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    /// Sleeps while holding the activity guard before applying accepted
    /// events, so concurrent writers pile up on the same activity.
    pub fn set_delay_update_ms(&self, ms: u64) {
        self.delay_update_ms.store(ms, Ordering::Relaxed);
    }
}

#[async_trait::async_trait]
impl ActivityStore for InMemoryActivityStore {
    async fn update(
        &self,
        name: &str,
        decide: DecideFn<'_>,
    ) -> Result<Option<Decision>, StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("Activity store offline".into()));
        }
        let Some(slot) = self.slots.get(name) else {
            return Ok(None);
        };

        let mut guard = slot.lock().await;
        let decision = decide(&*guard);
        if let Decision::Accepted { events } = &decision {
            let delay = self.delay_update_ms.load(Ordering::Relaxed);
            if delay > 0 {
                tokio::time::sleep(Duration::from_millis(delay)).await;
            }
            let activity = std::mem::take(&mut *guard);
            *guard = events.iter().fold(activity, evolve);
        }
        Ok(Some(decision))
    }
}

#[async_trait::async_trait]
impl ActivityQueries for InMemoryActivityStore {
    async fn list_activities(&self) -> anyhow::Result<ActivityCatalog> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Activity store offline"));
        }
        let mut entries = Vec::with_capacity(self.names.len());
        for name in &self.names {
            let guard = self.slots[name].lock().await;
            entries.push((name.clone(), guard.clone()));
        }
        Ok(ActivityCatalog::new(entries))
    }
}
