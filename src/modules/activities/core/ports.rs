// Ports the activity use cases need from the outside world.
//
// Adapters implement these in adapters/outbound. A write hands the store a
// decide function; the store runs it against the current roster and applies
// the accepted events before any other write to the same activity can start.

use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::core::decision::Decision;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("backend error: {0}")]
    Backend(String),
}

pub type DecideFn<'a> = &'a (dyn Fn(&Activity) -> Decision + Send + Sync);

#[async_trait]
pub trait ActivityStore: Send + Sync {
    /// `Ok(None)` when no activity carries this exact name. Otherwise returns
    /// the decision taken, whose events have already been applied if accepted.
    async fn update(
        &self,
        name: &str,
        decide: DecideFn<'_>,
    ) -> Result<Option<Decision>, StoreError>;
}
