use crate::ports::notify::SenderProfile;

/// Commands that can be sent to the application service
///
/// `Register` carries the amount fields as raw text: the shell forwards
/// whatever the user typed and the core decides whether it parses.
#[derive(Debug, Clone)]
pub enum Command {
    /// Register a new participant from form input
    Register {
        name: String,
        contact: String,
        suggestions: String,
        min_amount: String,
        max_amount: String,
    },

    /// Remove a participant by name
    Remove { name: String },

    /// Run a full-derangement draw and reveal it locally
    DrawLocal,

    /// Run a cyclic draw and email every participant their match
    DrawAndNotify { sender: SenderProfile },

    /// Quit the application
    Quit,
}
