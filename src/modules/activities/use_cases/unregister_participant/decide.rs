use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::core::decision::{DecideError, Decision};
use crate::modules::activities::core::events::ActivityEvent;
use crate::modules::activities::use_cases::unregister_participant::command::UnregisterParticipant;

pub fn decide_unregister(state: &Activity, command: &UnregisterParticipant) -> Decision {
    if !state.has_participant(&command.email) {
        return Decision::Rejected {
            reason: DecideError::NotRegistered {
                email: command.email.clone(),
                activity: command.activity_name.clone(),
            },
        };
    }
    Decision::Accepted {
        events: vec![ActivityEvent::ParticipantUnregistered {
            email: command.email.clone(),
        }],
    }
}
