use crate::modules::activities::core::events::ActivityEvent;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("{email} already signed up for {activity}")]
    AlreadyRegistered { email: String, activity: String },

    #[error("{email} is not registered for {activity}")]
    NotRegistered { email: String, activity: String },
}

#[derive(Debug, PartialEq, Eq)]
pub enum Decision {
    Accepted { events: Vec<ActivityEvent> },
    Rejected { reason: DecideError },
}
