use anyhow::Result;

use crate::domain::Participant;
use crate::error::CoreError;

/// Outbound account used for a draw-and-notify run. Supplied once per
/// session through the shell and never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct SenderProfile {
    pub address: String,
    pub credential: String,
}

impl SenderProfile {
    /// Reject blank sender fields before a notify run starts.
    pub fn validate(&self) -> std::result::Result<(), CoreError> {
        if self.address.trim().is_empty() {
            return Err(CoreError::Validation {
                field: "sender_address",
                reason: "must not be empty".to_string(),
            });
        }
        if self.credential.trim().is_empty() {
            return Err(CoreError::Validation {
                field: "sender_credential",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

/// A formatted message ready for delivery.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl Notification {
    /// Compose the reveal message for one giver: who they drew, what
    /// that person would like, and the agreed amount range.
    pub fn reveal(giver: &Participant, recipient: &Participant) -> Self {
        let body = format!(
            "Hello!\n\n\
             Your secret santa match is: {}\n\n\
             About your match:\n\
             Gift suggestions: {}\n\
             Amount range: {:.2} - {:.2}\n\n\
             Happy holidays!\n",
            recipient.name, recipient.suggestions, recipient.min_amount, recipient.max_amount,
        );

        Self {
            to: giver.contact.clone(),
            subject: "Your Secret Santa match!".to_string(),
            body,
        }
    }
}

/// Port for delivering notifications over an outbound channel
pub trait NotifyPort: Send + Sync {
    /// Attempt a single delivery. Any transport or authentication fault
    /// is an error; the caller decides what happens to the rest of the
    /// batch.
    fn send(&self, sender: &SenderProfile, notification: &Notification) -> Result<()>;
}
