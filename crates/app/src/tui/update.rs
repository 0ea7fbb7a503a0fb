use anyhow::Result;
use crossterm::event::{KeyCode, KeyModifiers};

use secretsanta_core::app::Command;
use secretsanta_core::ports::SenderProfile;

use super::model::{TuiModel, ViewMode};

/// Messages that can be sent from the TUI to the application service
#[derive(Debug, Clone)]
pub enum TuiMessage {
    /// Send a command to the app service
    Command(Command),

    /// No action needed
    None,
}

/// The Update function - handles user input and updates the model
pub struct TuiUpdate;

impl TuiUpdate {
    /// Handle a key press and update the model accordingly.
    /// Returns a TuiMessage that should be sent to the app service.
    pub fn handle_key(
        model: &mut TuiModel,
        key: KeyCode,
        modifiers: KeyModifiers,
    ) -> Result<TuiMessage> {
        // A visible error overlay swallows the next keypress to dismiss it.
        if !model.errors.is_empty() {
            model.clear_errors();
            return Ok(TuiMessage::None);
        }

        // Handle global keys first (quit, tab switching, help)
        if let Some(msg) = Self::handle_global_keys(model, key, modifiers) {
            return Ok(msg);
        }

        // Handle mode-specific keys
        match &model.mode {
            ViewMode::Register => Self::handle_register_keys(model, key, modifiers),
            ViewMode::Participants => Self::handle_participants_keys(model, key),
            ViewMode::Draw => Self::handle_draw_keys(model, key),
            ViewMode::Reveal => Self::handle_reveal_keys(model, key),
            ViewMode::Help => Self::handle_help_keys(model, key),
        }
    }

    /// Handle global keys that work in any mode
    fn handle_global_keys(
        model: &mut TuiModel,
        key: KeyCode,
        modifiers: KeyModifiers,
    ) -> Option<TuiMessage> {
        match key {
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                Some(TuiMessage::Command(Command::Quit))
            }

            KeyCode::F(1) => {
                model.mode = ViewMode::Help;
                Some(TuiMessage::None)
            }

            KeyCode::F(2) => {
                model.mode = ViewMode::Register;
                Some(TuiMessage::None)
            }

            KeyCode::F(3) => {
                model.mode = ViewMode::Participants;
                Some(TuiMessage::None)
            }

            KeyCode::F(4) => {
                model.mode = ViewMode::Draw;
                Some(TuiMessage::None)
            }

            _ => None,
        }
    }

    /// Handle keys on the registration form
    fn handle_register_keys(
        model: &mut TuiModel,
        key: KeyCode,
        _modifiers: KeyModifiers,
    ) -> Result<TuiMessage> {
        match key {
            KeyCode::Char(c) => {
                let focus = model.register_form.focus;
                model.register_form.field_mut(focus).push(c);
                Ok(TuiMessage::None)
            }

            KeyCode::Backspace => {
                let focus = model.register_form.focus;
                model.register_form.field_mut(focus).pop();
                Ok(TuiMessage::None)
            }

            KeyCode::Tab | KeyCode::Down => {
                model.register_form.focus = model.register_form.focus.next();
                Ok(TuiMessage::None)
            }

            KeyCode::BackTab | KeyCode::Up => {
                model.register_form.focus = model.register_form.focus.prev();
                Ok(TuiMessage::None)
            }

            KeyCode::Enter => {
                // The form is forwarded as typed; the core decides what
                // parses and what doesn't. Cleared on the success event.
                let form = &model.register_form;
                Ok(TuiMessage::Command(Command::Register {
                    name: form.name.clone(),
                    contact: form.contact.clone(),
                    suggestions: form.suggestions.clone(),
                    min_amount: form.min_amount.clone(),
                    max_amount: form.max_amount.clone(),
                }))
            }

            KeyCode::Esc => Ok(TuiMessage::Command(Command::Quit)),

            _ => Ok(TuiMessage::None),
        }
    }

    /// Handle keys in the participants table
    fn handle_participants_keys(model: &mut TuiModel, key: KeyCode) -> Result<TuiMessage> {
        match key {
            KeyCode::Up | KeyCode::Char('k') => {
                if model.participants_cursor > 0 {
                    model.participants_cursor -= 1;
                }
                Ok(TuiMessage::None)
            }

            KeyCode::Down | KeyCode::Char('j') => {
                if model.participants_cursor + 1 < model.roster.len() {
                    model.participants_cursor += 1;
                }
                Ok(TuiMessage::None)
            }

            KeyCode::Char('d') | KeyCode::Delete => {
                if let Some(name) = model.selected_participant() {
                    Ok(TuiMessage::Command(Command::Remove {
                        name: name.to_string(),
                    }))
                } else {
                    model.add_message("No participant selected".to_string());
                    Ok(TuiMessage::None)
                }
            }

            KeyCode::Char('q') | KeyCode::Esc => Ok(TuiMessage::Command(Command::Quit)),

            _ => Ok(TuiMessage::None),
        }
    }

    /// Handle keys on the draw tab
    fn handle_draw_keys(model: &mut TuiModel, key: KeyCode) -> Result<TuiMessage> {
        match key {
            KeyCode::Char(c) => {
                let focus = model.sender_form.focus;
                model.sender_form.field_mut(focus).push(c);
                Ok(TuiMessage::None)
            }

            KeyCode::Backspace => {
                let focus = model.sender_form.focus;
                model.sender_form.field_mut(focus).pop();
                Ok(TuiMessage::None)
            }

            KeyCode::Tab | KeyCode::Down | KeyCode::Up | KeyCode::BackTab => {
                model.sender_form.focus = model.sender_form.focus.toggle();
                Ok(TuiMessage::None)
            }

            KeyCode::F(5) => Ok(TuiMessage::Command(Command::DrawLocal)),

            KeyCode::Enter => Ok(TuiMessage::Command(Command::DrawAndNotify {
                sender: SenderProfile {
                    address: model.sender_form.address.clone(),
                    credential: model.sender_form.credential.clone(),
                },
            })),

            KeyCode::Esc => Ok(TuiMessage::Command(Command::Quit)),

            _ => Ok(TuiMessage::None),
        }
    }

    /// Handle keys on the local reveal screen
    fn handle_reveal_keys(model: &mut TuiModel, key: KeyCode) -> Result<TuiMessage> {
        match key {
            KeyCode::Up | KeyCode::Char('k') => {
                if model.reveal_cursor > 0 {
                    model.reveal_cursor -= 1;
                }
                Ok(TuiMessage::None)
            }

            KeyCode::Down | KeyCode::Char('j') => {
                if model.reveal_cursor + 1 < model.reveal.len() {
                    model.reveal_cursor += 1;
                }
                Ok(TuiMessage::None)
            }

            KeyCode::Enter | KeyCode::Char(' ') => {
                model.toggle_reveal();
                Ok(TuiMessage::None)
            }

            KeyCode::Char('b') | KeyCode::Esc => {
                model.mode = ViewMode::Participants;
                Ok(TuiMessage::None)
            }

            KeyCode::Char('q') => Ok(TuiMessage::Command(Command::Quit)),

            _ => Ok(TuiMessage::None),
        }
    }

    /// Handle keys in help view
    fn handle_help_keys(model: &mut TuiModel, _key: KeyCode) -> Result<TuiMessage> {
        // Any key exits help
        model.mode = ViewMode::Register;
        Ok(TuiMessage::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UiConfig;
    use secretsanta_core::domain::{Event, Participant};

    fn model() -> TuiModel {
        TuiModel::new(UiConfig::default())
    }

    fn press(model: &mut TuiModel, key: KeyCode) -> TuiMessage {
        TuiUpdate::handle_key(model, key, KeyModifiers::empty()).unwrap()
    }

    fn type_text(model: &mut TuiModel, text: &str) {
        for c in text.chars() {
            press(model, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_register_form_typing_and_submit() {
        let mut model = model();
        type_text(&mut model, "Alice");
        press(&mut model, KeyCode::Tab);
        type_text(&mut model, "alice@example.com");
        press(&mut model, KeyCode::Tab);
        press(&mut model, KeyCode::Tab);
        type_text(&mut model, "10");
        press(&mut model, KeyCode::Tab);
        type_text(&mut model, "fifty");

        let msg = press(&mut model, KeyCode::Enter);
        match msg {
            TuiMessage::Command(Command::Register {
                name,
                contact,
                min_amount,
                max_amount,
                ..
            }) => {
                assert_eq!(name, "Alice");
                assert_eq!(contact, "alice@example.com");
                assert_eq!(min_amount, "10");
                // Raw text goes through; the core rejects it.
                assert_eq!(max_amount, "fifty");
            }
            other => panic!("expected register command, got {:?}", other),
        }
    }

    #[test]
    fn test_backspace_edits_focused_field() {
        let mut model = model();
        type_text(&mut model, "Alicee");
        press(&mut model, KeyCode::Backspace);
        assert_eq!(model.register_form.name, "Alice");
    }

    #[test]
    fn test_function_keys_switch_tabs() {
        let mut model = model();
        press(&mut model, KeyCode::F(3));
        assert_eq!(model.mode, ViewMode::Participants);
        press(&mut model, KeyCode::F(4));
        assert_eq!(model.mode, ViewMode::Draw);
        press(&mut model, KeyCode::F(2));
        assert_eq!(model.mode, ViewMode::Register);
        press(&mut model, KeyCode::F(1));
        assert_eq!(model.mode, ViewMode::Help);
    }

    #[test]
    fn test_delete_sends_remove_for_selected() {
        let mut model = model();
        model.apply_event(&Event::ParticipantRegistered {
            participant: Participant::new("Alice", "a@b.c", "", 1.0, 2.0).unwrap(),
        });
        model.mode = ViewMode::Participants;

        let msg = press(&mut model, KeyCode::Char('d'));
        match msg {
            TuiMessage::Command(Command::Remove { name }) => assert_eq!(name, "Alice"),
            other => panic!("expected remove command, got {:?}", other),
        }
    }

    #[test]
    fn test_delete_with_empty_roster_is_a_noop() {
        let mut model = model();
        model.mode = ViewMode::Participants;
        let msg = press(&mut model, KeyCode::Char('d'));
        assert!(matches!(msg, TuiMessage::None));
        assert_eq!(model.messages.last().unwrap(), "No participant selected");
    }

    #[test]
    fn test_draw_tab_enter_sends_notify_with_sender() {
        let mut model = model();
        model.mode = ViewMode::Draw;
        type_text(&mut model, "santa@example.com");
        press(&mut model, KeyCode::Tab);
        type_text(&mut model, "hunter2");

        let msg = press(&mut model, KeyCode::Enter);
        match msg {
            TuiMessage::Command(Command::DrawAndNotify { sender }) => {
                assert_eq!(sender.address, "santa@example.com");
                assert_eq!(sender.credential, "hunter2");
            }
            other => panic!("expected notify command, got {:?}", other),
        }
    }

    #[test]
    fn test_draw_tab_f5_requests_local_draw() {
        let mut model = model();
        model.mode = ViewMode::Draw;
        let msg = press(&mut model, KeyCode::F(5));
        assert!(matches!(msg, TuiMessage::Command(Command::DrawLocal)));
    }

    #[test]
    fn test_error_overlay_swallows_next_key() {
        let mut model = model();
        model.errors.push("boom".to_string());

        let msg = press(&mut model, KeyCode::Char('x'));
        assert!(matches!(msg, TuiMessage::None));
        assert!(model.errors.is_empty());
        // The keypress dismissed the overlay without typing into the form.
        assert!(model.register_form.name.is_empty());
    }

    #[test]
    fn test_ctrl_c_quits_from_any_mode() {
        let mut model = model();
        model.mode = ViewMode::Draw;
        let msg = TuiUpdate::handle_key(&mut model, KeyCode::Char('c'), KeyModifiers::CONTROL)
            .unwrap();
        assert!(matches!(msg, TuiMessage::Command(Command::Quit)));
    }
}
