//! Status notifier
//!
//! Turns validated homework records into messages and hands them to the
//! messaging capability. Duplicates are suppressed at two levels:
//! - within one cycle, identical rendered messages are sent once
//! - across cycles, a homework is not re-announced while its status is
//!   unchanged since the last successful delivery, and nothing delivered
//!   for the current poll window is sent again when that window is retried

use reviewbot_client::MessageSender;
use reviewbot_core::domain::{HomeworkRecord, HomeworkStatus};
use reviewbot_core::render_message;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tracing::{debug, error, info};

use crate::error::PollError;

/// Delivered statuses, kept for the process lifetime
#[derive(Debug, Default)]
pub struct NotificationLedger {
    /// Last status delivered for each homework
    last_status: HashMap<String, HomeworkStatus>,
    /// Everything delivered since the cursor last moved
    open_window: HashSet<(String, HomeworkStatus)>,
}

impl NotificationLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether this exact status was already delivered for the homework
    pub fn already_notified(&self, homework_name: &str, status: HomeworkStatus) -> bool {
        self.last_status.get(homework_name) == Some(&status)
            || self
                .open_window
                .contains(&(homework_name.to_string(), status))
    }

    pub fn record(&mut self, homework_name: &str, status: HomeworkStatus) {
        self.last_status.insert(homework_name.to_string(), status);
        self.open_window.insert((homework_name.to_string(), status));
    }

    /// Forgets the per-window deliveries; the last status per homework stays
    pub fn close_window(&mut self) {
        self.open_window.clear();
    }

    pub fn len(&self) -> usize {
        self.last_status.len()
    }

    pub fn is_empty(&self) -> bool {
        self.last_status.is_empty()
    }
}

/// Sends one message per homework status change
pub struct StatusNotifier {
    sender: Arc<dyn MessageSender>,
    ledger: NotificationLedger,
}

impl StatusNotifier {
    /// Creates a notifier with an empty ledger
    pub fn new(sender: Arc<dyn MessageSender>) -> Self {
        Self {
            sender,
            ledger: NotificationLedger::new(),
        }
    }

    pub fn ledger(&self) -> &NotificationLedger {
        &self.ledger
    }

    /// Called once the poll window has moved past everything delivered so far
    pub fn close_window(&mut self) {
        self.ledger.close_window();
    }

    /// Notifies about each homework, in order
    ///
    /// # Returns
    /// Number of messages actually sent
    ///
    /// # Errors
    /// - `PollError::Validation` when a record lacks a name or has an
    ///   unknown status; records before it have already been sent
    /// - `PollError::Notification` when delivery fails
    pub async fn notify(&mut self, homeworks: &[HomeworkRecord]) -> Result<usize, PollError> {
        let mut sent_this_cycle: HashSet<String> = HashSet::new();

        for homework in homeworks {
            let message = render_message(homework)?;

            if sent_this_cycle.contains(&message) {
                debug!("Skipping duplicate message in this cycle: {}", message);
                continue;
            }

            let (name, status) = homework.name_and_status()?;

            if self.ledger.already_notified(name, status) {
                debug!("Status '{}' of '{}' was already announced", status, name);
                continue;
            }

            if let Err(e) = self.sender.send_message(&message).await {
                error!("Failed to send notification for '{}': {}", name, e);
                return Err(PollError::Notification(e));
            }

            info!("Notified about '{}' ({})", name, status);
            self.ledger.record(name, status);
            sent_this_cycle.insert(message);
        }

        Ok(sent_this_cycle.len())
    }
}
