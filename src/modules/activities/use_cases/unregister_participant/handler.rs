use crate::modules::activities::core::ports::ActivityStore;
use crate::modules::activities::use_cases::apply_decision::apply_decision;
use crate::modules::activities::use_cases::errors::ApplicationError;
use crate::modules::activities::use_cases::unregister_participant::command::UnregisterParticipant;
use crate::modules::activities::use_cases::unregister_participant::decide::decide_unregister;
use std::sync::Arc;

pub struct UnregisterParticipantHandler<TStore>
where
    TStore: ActivityStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> UnregisterParticipantHandler<TStore>
where
    TStore: ActivityStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, command: UnregisterParticipant) -> Result<(), ApplicationError> {
        let result = apply_decision(&*self.store, &command.activity_name, |activity| {
            decide_unregister(activity, &command)
        })
        .await;

        match &result {
            Ok(()) => tracing::info!(
                activity = %command.activity_name,
                email = %command.email,
                "participant unregistered"
            ),
            Err(error) => tracing::debug!(
                activity = %command.activity_name,
                email = %command.email,
                %error,
                "unregister rejected"
            ),
        }
        result
    }
}
