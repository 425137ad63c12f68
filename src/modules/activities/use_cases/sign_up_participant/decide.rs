use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::core::decision::{DecideError, Decision};
use crate::modules::activities::core::events::ActivityEvent;
use crate::modules::activities::use_cases::sign_up_participant::command::SignUpParticipant;

/// Capacity is informational; a full activity still accepts signups.
pub fn decide_sign_up(state: &Activity, command: &SignUpParticipant) -> Decision {
    if state.has_participant(&command.email) {
        return Decision::Rejected {
            reason: DecideError::AlreadyRegistered {
                email: command.email.clone(),
                activity: command.activity_name.clone(),
            },
        };
    }
    Decision::Accepted {
        events: vec![ActivityEvent::ParticipantSignedUp {
            email: command.email.clone(),
        }],
    }
}
