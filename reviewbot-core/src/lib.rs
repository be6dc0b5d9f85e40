//! Review Bot Core
//!
//! Core types and rules for the homework review bot.
//!
//! This crate contains:
//! - Domain types: homework records, the verdict table and the poll window
//! - Validation: shape checks for review API responses and message rendering
//!
//! Nothing here performs I/O; the HTTP clients live in `reviewbot-client`
//! and the polling loop in `reviewbot-runner`.

pub mod domain;
pub mod validation;

pub use validation::{ValidationError, check_response, render_message};
