use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::core::events::ActivityEvent;

pub fn evolve(mut state: Activity, event: &ActivityEvent) -> Activity {
    match event {
        ActivityEvent::ParticipantSignedUp { email } => {
            if !state.has_participant(email) {
                state.participants.push(email.clone());
            }
        }
        ActivityEvent::ParticipantUnregistered { email } => {
            state.participants.retain(|p| p != email);
        }
    }
    state
}
