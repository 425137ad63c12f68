use crate::modules::activities::core::ports::ActivityStore;
use crate::modules::activities::use_cases::apply_decision::apply_decision;
use crate::modules::activities::use_cases::errors::ApplicationError;
use crate::modules::activities::use_cases::sign_up_participant::command::SignUpParticipant;
use crate::modules::activities::use_cases::sign_up_participant::decide::decide_sign_up;
use std::sync::Arc;

pub struct SignUpParticipantHandler<TStore>
where
    TStore: ActivityStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> SignUpParticipantHandler<TStore>
where
    TStore: ActivityStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, command: SignUpParticipant) -> Result<(), ApplicationError> {
        let result = apply_decision(&*self.store, &command.activity_name, |activity| {
            decide_sign_up(activity, &command)
        })
        .await;

        match &result {
            Ok(()) => tracing::info!(
                activity = %command.activity_name,
                email = %command.email,
                "participant signed up"
            ),
            Err(error) => tracing::debug!(
                activity = %command.activity_name,
                email = %command.email,
                %error,
                "sign up rejected"
            ),
        }
        result
    }
}
