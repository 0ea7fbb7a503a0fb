use anyhow::{Context, Result};
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use tracing::info;

use secretsanta_core::ports::{Notification, NotifyPort, SenderProfile};

use crate::config::SmtpConfig;

/// Delivers notifications over an authenticated STARTTLS SMTP session.
///
/// One blocking round-trip per message, no timeout beyond the
/// transport's own, no retries - a failed send is reported to the caller
/// and that is the end of it.
pub struct SmtpNotifier {
    relay: String,
    port: u16,
}

impl SmtpNotifier {
    pub fn new(config: &SmtpConfig) -> Self {
        Self {
            relay: config.relay.clone(),
            port: config.port,
        }
    }
}

impl NotifyPort for SmtpNotifier {
    fn send(&self, sender: &SenderProfile, notification: &Notification) -> Result<()> {
        let from: Mailbox = sender
            .address
            .parse()
            .context("Invalid sender address")?;
        let to: Mailbox = notification
            .to
            .parse()
            .with_context(|| format!("Invalid recipient address: {}", notification.to))?;

        let message = Message::builder()
            .from(from)
            .to(to)
            .subject(notification.subject.clone())
            .body(notification.body.clone())
            .context("Failed to build message")?;

        let credentials = Credentials::new(sender.address.clone(), sender.credential.clone());
        let mailer = SmtpTransport::starttls_relay(&self.relay)
            .with_context(|| format!("Invalid SMTP relay: {}", self.relay))?
            .port(self.port)
            .credentials(credentials)
            .build();

        mailer
            .send(&message)
            .with_context(|| format!("Delivery to {} failed", notification.to))?;

        info!("Delivered notification to {}", notification.to);
        Ok(())
    }
}
