use super::{
    pairing::{DrawKind, Pairing},
    participant::Participant,
};

/// Domain events emitted by the application service
#[derive(Debug, Clone)]
pub enum Event {
    /// A participant was added to the registry
    ParticipantRegistered { participant: Participant },

    /// A participant was removed from the registry
    ParticipantRemoved { name: String },

    /// A local draw finished; the pairing is handed to the shell to reveal
    DrawCompleted { kind: DrawKind, pairing: Pairing },

    /// One participant was emailed their match
    NotificationSent { giver: String },

    /// Delivery failed; the remaining batch was abandoned
    NotificationFailed { giver: String, msg: String },

    /// A draw-and-notify run ended (complete or aborted)
    NotifyRunFinished { sent: usize, total: usize },

    /// An error occurred
    Error { msg: String },

    /// User requested to quit the application
    QuitRequested,
}
