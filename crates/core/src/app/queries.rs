use crate::domain::{DrawKind, Event, Pairing, Participant};

/// Read-only projection of application state for UI consumption
///
/// The shell never touches the registry directly; it applies the events
/// the service emits and renders from this view.
#[derive(Debug, Default, Clone)]
pub struct RosterView {
    /// Registered participants, in registration order
    pub participants: Vec<Participant>,

    /// The most recent local draw, if any. Email draws are deliberately
    /// never stored here - the whole point is that nobody sees them.
    pub last_draw: Option<(DrawKind, Pairing)>,

    /// How many notifications went out in the last draw-and-notify run
    pub last_notify_run: Option<(usize, usize)>,
}

impl RosterView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an event to update the projection
    pub fn apply(&mut self, event: &Event) {
        match event {
            Event::ParticipantRegistered { participant } => {
                self.participants.push(participant.clone());
            }

            Event::ParticipantRemoved { name } => {
                self.participants.retain(|p| &p.name != name);
                // A removal invalidates any pairing drawn over the old roster.
                self.last_draw = None;
            }

            Event::DrawCompleted { kind, pairing } => {
                self.last_draw = Some((*kind, pairing.clone()));
            }

            Event::NotifyRunFinished { sent, total } => {
                self.last_notify_run = Some((*sent, *total));
            }

            Event::NotificationSent { .. } | Event::NotificationFailed { .. } => {
                // Per-recipient progress is surfaced by the shell's
                // message log, not tracked here.
            }

            Event::Error { .. } => {}

            Event::QuitRequested => {}
        }
    }

    pub fn participant(&self, name: &str) -> Option<&Participant> {
        self.participants.iter().find(|p| p.name == name)
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }
}
