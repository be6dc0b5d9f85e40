//! Scheduler layer for the bot
//!
//! This layer drives the poll cycle on a fixed interval: fetch statuses,
//! validate them, notify, and move the cursor forward.

pub mod poller;

pub use poller::{CycleReport, HomeworkPoller};
