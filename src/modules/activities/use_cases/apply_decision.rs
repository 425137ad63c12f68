use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::core::decision::Decision;
use crate::modules::activities::core::ports::ActivityStore;
use crate::modules::activities::use_cases::errors::ApplicationError;

/// Runs `decide` against the named activity inside the store's write scope.
pub async fn apply_decision<TStore, TDecide>(
    store: &TStore,
    activity_name: &str,
    decide: TDecide,
) -> Result<(), ApplicationError>
where
    TStore: ActivityStore + ?Sized,
    TDecide: Fn(&Activity) -> Decision + Send + Sync,
{
    match store.update(activity_name, &decide).await? {
        None => Err(ApplicationError::ActivityNotFound),
        Some(Decision::Accepted { .. }) => Ok(()),
        Some(Decision::Rejected { reason }) => Err(ApplicationError::Domain(reason)),
    }
}
