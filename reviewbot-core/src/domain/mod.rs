//! Core domain types
//!
//! These types describe what the review API reports and how far the bot
//! has read. They are shared between the client (parsing) and the runner
//! (notification and cursor bookkeeping).

pub mod homework;
pub mod window;

pub use homework::{HomeworkRecord, HomeworkStatus, HomeworkStatuses};
pub use window::PollWindow;
