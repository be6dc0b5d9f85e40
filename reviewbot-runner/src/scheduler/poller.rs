//! Homework poller
//!
//! Runs one poll cycle per interval tick. A cycle goes
//! fetch → validate → notify, and only a cycle that finishes notifying
//! moves the cursor. Errors end the cycle, never the loop.

use reviewbot_client::HomeworkSource;
use reviewbot_core::check_response;
use reviewbot_core::domain::PollWindow;
use std::future::Future;
use std::sync::Arc;
use tokio::time::{self, Duration, MissedTickBehavior};
use tracing::{debug, error, info, warn};

use crate::error::PollError;
use crate::service::StatusNotifier;

/// Outcome of a successful poll cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleReport {
    /// Homework records in the response
    pub fetched: usize,
    /// Messages delivered
    pub notified: usize,
    /// Cursor after the cycle
    pub cursor: i64,
}

/// Poller that periodically checks homework statuses and notifies about changes
pub struct HomeworkPoller {
    retry_period: Duration,
    source: Arc<dyn HomeworkSource>,
    notifier: StatusNotifier,
    window: PollWindow,
}

impl HomeworkPoller {
    /// Creates a new poller
    ///
    /// # Arguments
    /// * `retry_period` - Pause between cycles
    /// * `source` - Where homework statuses come from
    /// * `notifier` - Where status changes go
    /// * `window` - Initial cursor
    pub fn new(
        retry_period: Duration,
        source: Arc<dyn HomeworkSource>,
        notifier: StatusNotifier,
        window: PollWindow,
    ) -> Self {
        Self {
            retry_period,
            source,
            notifier,
            window,
        }
    }

    /// Current poll window
    pub fn window(&self) -> PollWindow {
        self.window
    }

    /// Runs poll cycles until `shutdown` resolves
    ///
    /// The first cycle starts immediately. Shutdown is observed between
    /// cycles; a cycle in progress is allowed to finish.
    pub async fn run_until<F>(&mut self, shutdown: F)
    where
        F: Future<Output = ()>,
    {
        info!(
            "Starting homework poller (interval: {:?}, from_date: {})",
            self.retry_period,
            self.window.from_timestamp()
        );

        let mut interval = time::interval(self.retry_period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    info!("Shutdown requested, stopping homework poller");
                    return;
                }
                _ = interval.tick() => {}
            }

            debug!("Polling homework statuses");

            match self.poll_once().await {
                Ok(report) => {
                    if report.notified > 0 {
                        info!(
                            "Sent {} notification(s) for {} homework record(s)",
                            report.notified, report.fetched
                        );
                    } else {
                        debug!("No status changes (cursor at {})", report.cursor);
                    }
                }
                Err(e) => {
                    error!(
                        kind = e.kind(),
                        cursor = self.window.from_timestamp(),
                        "Error during poll cycle: {}",
                        e
                    );
                }
            }
        }
    }

    /// Performs a single poll cycle
    pub async fn poll_once(&mut self) -> Result<CycleReport, PollError> {
        let body = self
            .source
            .fetch_statuses(self.window.from_timestamp())
            .await?;

        let statuses = check_response(&body)?;

        if statuses.homeworks.is_empty() {
            debug!("No homework updates in this window");
        }

        let notified = self.notifier.notify(&statuses.homeworks).await?;

        match statuses.current_date {
            Some(current_date) => {
                if self.window.advance(current_date) {
                    self.notifier.close_window();
                } else {
                    debug!(
                        "current_date {} does not move cursor {}",
                        current_date,
                        self.window.from_timestamp()
                    );
                }
            }
            None => warn!(
                "Response has no current_date, keeping cursor at {}",
                self.window.from_timestamp()
            ),
        }

        let ledger = self.notifier.ledger();
        if !ledger.is_empty() {
            debug!("Tracking last status of {} homework(s)", ledger.len());
        }

        Ok(CycleReport {
            fetched: statuses.homeworks.len(),
            notified,
            cursor: self.window.from_timestamp(),
        })
    }
}
