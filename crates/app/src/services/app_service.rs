use std::sync::Arc;

use rand::thread_rng;
use tracing::{error, info, warn};

use secretsanta_core::app::Command;
use secretsanta_core::domain::{
    cyclic_draw, derangement_draw, DrawKind, Event, Participant, Registry,
};
use secretsanta_core::error::CoreError;
use secretsanta_core::ports::{Notification, NotifyPort, SenderProfile};

/// The application service that owns the session state and coordinates
/// all operations. The shell sends it a [`Command`], it runs the
/// operation to completion and returns the resulting [`Event`]s.
///
/// Everything is synchronous: a notify run blocks until every message is
/// out or the first delivery fails. Errors never poison the session -
/// the registry is left exactly as it was and the next command is
/// handled normally.
pub struct AppService {
    registry: Registry,
    notifier: Arc<dyn NotifyPort>,
}

impl AppService {
    pub fn new(notifier: Arc<dyn NotifyPort>) -> Self {
        Self {
            registry: Registry::new(),
            notifier,
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Handle a command, converting domain failures into error events so
    /// the shell can surface them without tearing anything down.
    pub fn handle_command(&mut self, cmd: Command) -> Vec<Event> {
        match cmd {
            Command::Register {
                name,
                contact,
                suggestions,
                min_amount,
                max_amount,
            } => self.register(&name, &contact, &suggestions, &min_amount, &max_amount),

            Command::Remove { name } => self.remove(&name),

            Command::DrawLocal => self.draw_local(),

            Command::DrawAndNotify { sender } => self.draw_and_notify(&sender),

            Command::Quit => {
                info!("Quit command received");
                vec![Event::QuitRequested]
            }
        }
    }

    fn register(
        &mut self,
        name: &str,
        contact: &str,
        suggestions: &str,
        min_amount: &str,
        max_amount: &str,
    ) -> Vec<Event> {
        let participant =
            match Participant::from_form(name, contact, suggestions, min_amount, max_amount) {
                Ok(p) => p,
                Err(e) => {
                    warn!("Rejected registration for '{}': {}", name, e);
                    return vec![Event::Error { msg: e.to_string() }];
                }
            };

        match self.registry.register(participant.clone()) {
            Ok(()) => {
                info!("Registered participant '{}'", participant.name);
                vec![Event::ParticipantRegistered { participant }]
            }
            Err(e) => {
                warn!("Rejected registration for '{}': {}", name, e);
                vec![Event::Error { msg: e.to_string() }]
            }
        }
    }

    fn remove(&mut self, name: &str) -> Vec<Event> {
        match self.registry.remove(name) {
            Ok(removed) => {
                info!("Removed participant '{}'", removed.name);
                vec![Event::ParticipantRemoved { name: removed.name }]
            }
            Err(e) => {
                warn!("Removal failed: {}", e);
                vec![Event::Error { msg: e.to_string() }]
            }
        }
    }

    fn draw_local(&mut self) -> Vec<Event> {
        let names = self.registry.names();
        match derangement_draw(&names, &mut thread_rng()) {
            Ok(pairing) => {
                info!("Local draw completed for {} participants", pairing.len());
                vec![Event::DrawCompleted {
                    kind: DrawKind::Derangement,
                    pairing,
                }]
            }
            Err(e) => {
                warn!("Local draw failed: {}", e);
                vec![Event::Error { msg: e.to_string() }]
            }
        }
    }

    /// Cyclic draw followed by one email per participant, in pairing
    /// order. The first delivery failure abandons the rest of the batch;
    /// messages already sent stay sent.
    fn draw_and_notify(&mut self, sender: &SenderProfile) -> Vec<Event> {
        if let Err(e) = sender.validate() {
            warn!("Notify run rejected: {}", e);
            return vec![Event::Error { msg: e.to_string() }];
        }

        let names = self.registry.names();
        let pairing = match cyclic_draw(&names, &mut thread_rng()) {
            Ok(p) => p,
            Err(e) => {
                warn!("Email draw failed: {}", e);
                return vec![Event::Error { msg: e.to_string() }];
            }
        };

        info!("Email draw completed, notifying {} participants", pairing.len());

        let mut events = Vec::new();
        let mut sent = 0;
        for (giver_name, recipient_name) in pairing.iter() {
            // Both sides of every assignment come from the registry the
            // pairing was drawn over, so the lookups cannot miss.
            let Some(giver) = self.registry.get(giver_name) else {
                continue;
            };
            let Some(recipient) = self.registry.get(recipient_name) else {
                continue;
            };

            let notification = Notification::reveal(giver, recipient);
            match self.notifier.send(sender, &notification) {
                Ok(()) => {
                    sent += 1;
                    events.push(Event::NotificationSent {
                        giver: giver.name.clone(),
                    });
                }
                Err(e) => {
                    let err = CoreError::Notification {
                        name: giver.name.clone(),
                        source: e,
                    };
                    error!("Aborting notify run: {}", err);
                    events.push(Event::NotificationFailed {
                        giver: giver.name.clone(),
                        msg: err.to_string(),
                    });
                    break;
                }
            }
        }

        events.push(Event::NotifyRunFinished {
            sent,
            total: pairing.len(),
        });
        events
    }
}
