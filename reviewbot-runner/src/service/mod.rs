//! Service layer
//!
//! Services contain the bot's business logic. They work against the
//! capability traits from `reviewbot-client` so they can be tested with
//! fakes instead of live HTTP endpoints.

mod notifier;

pub use notifier::StatusNotifier;
