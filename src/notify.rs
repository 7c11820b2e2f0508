/// Alert delivery over SMTP.
///
/// Alerts are sent from a fixed sender identity through an authenticated
/// STARTTLS session on the relay's submission port. Delivery is a single
/// best-effort attempt: failures are classified, logged by the caller,
/// and never retried. Recipient receipt is not confirmed.

use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};

use crate::config::SmtpConfig;
use crate::logging::{self, DataSource};
use crate::model::{AlertEvent, DeliveryError};

// ---------------------------------------------------------------------------
// Channel seam
// ---------------------------------------------------------------------------

/// A delivery channel for alert events.
///
/// The orchestrator talks to this trait rather than to SMTP directly so
/// that the dispatch path can be exercised without a mail relay.
pub trait AlertChannel {
    fn send(&self, event: &AlertEvent) -> Result<(), DeliveryError>;
}

// ---------------------------------------------------------------------------
// SMTP notifier
// ---------------------------------------------------------------------------

/// Sends advisories through a configured mail relay.
///
/// Constructed once at startup from explicit configuration; holds the
/// relay transport and the parsed sender mailbox for the process lifetime.
pub struct SmtpNotifier {
    sender: Mailbox,
    transport: SmtpTransport,
}

impl SmtpNotifier {
    /// Build a notifier from relay settings and the sender password.
    ///
    /// Fails if the sender address does not parse or the relay transport
    /// cannot be configured. No connection is opened here; the relay is
    /// contacted on first send.
    pub fn new(config: &SmtpConfig, password: &str) -> Result<Self, DeliveryError> {
        let sender: Mailbox = config
            .sender
            .parse()
            .map_err(|e| DeliveryError::Transport(format!("invalid sender address: {}", e)))?;

        let transport = SmtpTransport::starttls_relay(&config.host)
            .map_err(|e| DeliveryError::Transport(e.to_string()))?
            .port(config.port)
            .credentials(Credentials::new(
                config.sender.clone(),
                password.to_string(),
            ))
            .build();

        Ok(SmtpNotifier { sender, transport })
    }
}

impl AlertChannel for SmtpNotifier {
    fn send(&self, event: &AlertEvent) -> Result<(), DeliveryError> {
        let recipient: Mailbox = event
            .recipient
            .parse()
            .map_err(|_| DeliveryError::InvalidRecipient(event.recipient.clone()))?;

        let message = Message::builder()
            .from(self.sender.clone())
            .to(recipient)
            .subject(event.subject.clone())
            .body(event.message.clone())
            .map_err(|e| DeliveryError::Transport(e.to_string()))?;

        self.transport
            .send(&message)
            .map_err(|e| classify_smtp_error(&e.to_string()))?;

        logging::info(
            DataSource::Smtp,
            Some(&event.recipient),
            "Alert email sent successfully",
        );
        Ok(())
    }
}

/// Classify an SMTP error string into the delivery taxonomy.
///
/// Relay auth rejections (535, "authentication", "credentials") map to
/// Auth; everything else is a transport failure.
fn classify_smtp_error(message: &str) -> DeliveryError {
    let lowered = message.to_lowercase();
    if lowered.contains("535") || lowered.contains("auth") || lowered.contains("credentials") {
        DeliveryError::Auth(message.to_string())
    } else {
        DeliveryError::Transport(message.to_string())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AlertEvent;

    fn test_config() -> SmtpConfig {
        SmtpConfig {
            host: "smtp.example.com".to_string(),
            port: 587,
            sender: "alerts@example.com".to_string(),
        }
    }

    fn event_for(recipient: &str) -> AlertEvent {
        AlertEvent {
            recipient: recipient.to_string(),
            subject: "Emergency Fire Risk Alert".to_string(),
            message: "test body".to_string(),
            triggering: Vec::new(),
        }
    }

    #[test]
    fn test_invalid_recipient_fails_before_any_network_call() {
        // Constructing the transport does not connect, and an address that
        // cannot parse is rejected before a connection is attempted.
        let notifier = SmtpNotifier::new(&test_config(), "password")
            .expect("notifier construction should not require a connection");

        let result = notifier.send(&event_for("not an address"));
        assert_eq!(
            result,
            Err(DeliveryError::InvalidRecipient("not an address".to_string()))
        );
    }

    #[test]
    fn test_invalid_sender_rejected_at_construction() {
        let mut config = test_config();
        config.sender = "<<bad>>".to_string();
        assert!(SmtpNotifier::new(&config, "password").is_err());
    }

    #[test]
    fn test_smtp_error_classification() {
        assert!(matches!(
            classify_smtp_error("535 5.7.8 Username and Password not accepted"),
            DeliveryError::Auth(_)
        ));
        assert!(matches!(
            classify_smtp_error("Connection refused (os error 111)"),
            DeliveryError::Transport(_)
        ));
    }
}
