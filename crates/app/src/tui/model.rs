use secretsanta_core::app::RosterView;
use secretsanta_core::domain::Event;

use crate::config::UiConfig;

/// The TUI Model - the complete UI state
///
/// Core data lives in the [`RosterView`] projection; everything else is
/// UI-only state (forms, cursors, the reveal screen).
#[derive(Debug, Default)]
pub struct TuiModel {
    /// Core data, built up from service events
    pub roster: RosterView,

    /// UI configuration toggles
    pub ui_config: UiConfig,

    /// Current view mode (tab)
    pub mode: ViewMode,

    /// Registration form state
    pub register_form: RegisterForm,

    /// Sender account form on the draw tab
    pub sender_form: SenderForm,

    /// Cursor into the participants table
    pub participants_cursor: usize,

    /// Local draw result, one row per giver
    pub reveal: Vec<RevealEntry>,

    /// Cursor into the reveal list
    pub reveal_cursor: usize,

    /// Error messages to display
    pub errors: Vec<String>,

    /// Status messages to display
    pub messages: Vec<String>,

    /// Whether the application should quit
    pub should_quit: bool,
}

/// Different view modes for the TUI
#[derive(Debug, Default, Clone, PartialEq)]
pub enum ViewMode {
    /// Registration form
    #[default]
    Register,

    /// Table of registered participants
    Participants,

    /// Draw tab: local draw or draw-and-email
    Draw,

    /// Local draw result with per-giver toggling
    Reveal,

    /// Help view
    Help,
}

/// Registration form fields, in tab order
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub enum RegisterField {
    #[default]
    Name,
    Contact,
    Suggestions,
    MinAmount,
    MaxAmount,
}

impl RegisterField {
    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::Contact,
            Self::Contact => Self::Suggestions,
            Self::Suggestions => Self::MinAmount,
            Self::MinAmount => Self::MaxAmount,
            Self::MaxAmount => Self::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Name => Self::MaxAmount,
            Self::Contact => Self::Name,
            Self::Suggestions => Self::Contact,
            Self::MinAmount => Self::Suggestions,
            Self::MaxAmount => Self::MinAmount,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Contact => "Email",
            Self::Suggestions => "Gift suggestions",
            Self::MinAmount => "Min amount",
            Self::MaxAmount => "Max amount",
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct RegisterForm {
    pub name: String,
    pub contact: String,
    pub suggestions: String,
    pub min_amount: String,
    pub max_amount: String,
    pub focus: RegisterField,
}

impl RegisterForm {
    pub fn field_mut(&mut self, field: RegisterField) -> &mut String {
        match field {
            RegisterField::Name => &mut self.name,
            RegisterField::Contact => &mut self.contact,
            RegisterField::Suggestions => &mut self.suggestions,
            RegisterField::MinAmount => &mut self.min_amount,
            RegisterField::MaxAmount => &mut self.max_amount,
        }
    }

    pub fn field(&self, field: RegisterField) -> &str {
        match field {
            RegisterField::Name => &self.name,
            RegisterField::Contact => &self.contact,
            RegisterField::Suggestions => &self.suggestions,
            RegisterField::MinAmount => &self.min_amount,
            RegisterField::MaxAmount => &self.max_amount,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Sender account fields on the draw tab
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub enum SenderField {
    #[default]
    Address,
    Credential,
}

impl SenderField {
    pub fn toggle(self) -> Self {
        match self {
            Self::Address => Self::Credential,
            Self::Credential => Self::Address,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct SenderForm {
    pub address: String,
    pub credential: String,
    pub focus: SenderField,
}

impl SenderForm {
    pub fn field_mut(&mut self, field: SenderField) -> &mut String {
        match field {
            SenderField::Address => &mut self.address,
            SenderField::Credential => &mut self.credential,
        }
    }
}

/// One row of the local reveal screen. Starts hidden; the entry can be
/// toggled back and forth so a match can be peeked at and re-hidden.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealEntry {
    pub giver: String,
    pub recipient: String,
    pub revealed: bool,
}

impl TuiModel {
    pub fn new(ui_config: UiConfig) -> Self {
        Self {
            ui_config,
            ..Self::default()
        }
    }

    /// Apply an event from the service to update projection and UI state
    pub fn apply_event(&mut self, event: &Event) {
        // First update the projection
        self.roster.apply(event);

        // Then handle UI-specific updates
        match event {
            Event::ParticipantRegistered { participant } => {
                self.messages
                    .push(format!("Registered {}", participant.name));
                if self.ui_config.clear_form_after_register {
                    self.register_form.clear();
                }
            }

            Event::ParticipantRemoved { name } => {
                self.messages.push(format!("Removed {}", name));
                self.clamp_participants_cursor();
                // Any on-screen reveal was drawn over the old roster.
                self.reveal.clear();
                if self.mode == ViewMode::Reveal {
                    self.mode = ViewMode::Participants;
                }
            }

            Event::DrawCompleted { pairing, .. } => {
                self.reveal = pairing
                    .iter()
                    .map(|(giver, recipient)| RevealEntry {
                        giver: giver.to_string(),
                        recipient: recipient.to_string(),
                        revealed: false,
                    })
                    .collect();
                self.reveal_cursor = 0;
                self.mode = ViewMode::Reveal;
                self.messages.push("Draw complete".to_string());
            }

            Event::NotificationSent { giver } => {
                self.messages.push(format!("Emailed {}", giver));
            }

            Event::NotificationFailed { giver, msg } => {
                self.errors
                    .push(format!("Sending to {} failed: {}", giver, msg));
            }

            Event::NotifyRunFinished { sent, total } => {
                self.messages
                    .push(format!("Sent {} of {} emails", sent, total));
            }

            Event::Error { msg } => {
                self.errors.push(msg.clone());
            }

            Event::QuitRequested => {
                self.should_quit = true;
            }
        }
    }

    /// Toggle the reveal entry under the cursor
    pub fn toggle_reveal(&mut self) {
        if let Some(entry) = self.reveal.get_mut(self.reveal_cursor) {
            entry.revealed = !entry.revealed;
        }
    }

    fn clamp_participants_cursor(&mut self) {
        let len = self.roster.len();
        if len == 0 {
            self.participants_cursor = 0;
        } else if self.participants_cursor >= len {
            self.participants_cursor = len - 1;
        }
    }

    /// Name of the participant under the cursor, if any
    pub fn selected_participant(&self) -> Option<&str> {
        self.roster
            .participants
            .get(self.participants_cursor)
            .map(|p| p.name.as_str())
    }

    pub fn add_message(&mut self, message: String) {
        self.messages.push(message);
    }

    pub fn clear_errors(&mut self) {
        self.errors.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secretsanta_core::domain::{DrawKind, Participant};

    fn participant(name: &str) -> Participant {
        Participant::new(name, format!("{name}@example.com"), "", 10.0, 20.0).unwrap()
    }

    fn registered(name: &str) -> Event {
        Event::ParticipantRegistered {
            participant: participant(name),
        }
    }

    #[test]
    fn test_register_event_updates_roster_and_clears_form() {
        let mut model = TuiModel::new(UiConfig::default());
        model.register_form.name = "Alice".to_string();

        model.apply_event(&registered("Alice"));

        assert_eq!(model.roster.len(), 1);
        assert!(model.register_form.name.is_empty());
        assert_eq!(model.messages.last().unwrap(), "Registered Alice");
    }

    #[test]
    fn test_register_keeps_form_when_configured() {
        let ui = UiConfig {
            clear_form_after_register: false,
            ..UiConfig::default()
        };
        let mut model = TuiModel::new(ui);
        model.register_form.name = "Alice".to_string();

        model.apply_event(&registered("Alice"));
        assert_eq!(model.register_form.name, "Alice");
    }

    #[test]
    fn test_draw_completed_builds_hidden_reveal_entries() {
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        let base = vec!["A".to_string(), "B".to_string(), "C".to_string()];
        let mut rng = StdRng::seed_from_u64(11);
        let pairing = secretsanta_core::domain::derangement_draw(&base, &mut rng).unwrap();

        let mut model = TuiModel::new(UiConfig::default());
        model.apply_event(&Event::DrawCompleted {
            kind: DrawKind::Derangement,
            pairing,
        });

        assert_eq!(model.mode, ViewMode::Reveal);
        assert_eq!(model.reveal.len(), 3);
        assert!(model.reveal.iter().all(|e| !e.revealed));

        model.toggle_reveal();
        assert!(model.reveal[0].revealed);
        model.toggle_reveal();
        assert!(!model.reveal[0].revealed);
    }

    #[test]
    fn test_removal_clears_reveal_and_clamps_cursor() {
        let mut model = TuiModel::new(UiConfig::default());
        model.apply_event(&registered("Alice"));
        model.apply_event(&registered("Bob"));
        model.participants_cursor = 1;
        model.reveal.push(RevealEntry {
            giver: "Alice".to_string(),
            recipient: "Bob".to_string(),
            revealed: false,
        });
        model.mode = ViewMode::Reveal;

        model.apply_event(&Event::ParticipantRemoved {
            name: "Bob".to_string(),
        });

        assert!(model.reveal.is_empty());
        assert_eq!(model.mode, ViewMode::Participants);
        assert_eq!(model.participants_cursor, 0);
        assert_eq!(model.selected_participant(), Some("Alice"));
    }

    #[test]
    fn test_error_event_collects_for_overlay() {
        let mut model = TuiModel::new(UiConfig::default());
        model.apply_event(&Event::Error {
            msg: "boom".to_string(),
        });
        assert_eq!(model.errors, vec!["boom".to_string()]);

        model.clear_errors();
        assert!(model.errors.is_empty());
    }

    #[test]
    fn test_register_field_order_wraps() {
        let mut field = RegisterField::Name;
        for _ in 0..5 {
            field = field.next();
        }
        assert_eq!(field, RegisterField::Name);
        assert_eq!(RegisterField::Name.prev(), RegisterField::MaxAmount);
    }
}
