//! Per-cycle error taxonomy
//!
//! Every failure inside a poll cycle ends up as a [`PollError`]. The loop
//! logs it and moves on; only configuration errors stop the process, and
//! those never reach the loop.

use reviewbot_client::ClientError;
use reviewbot_core::ValidationError;
use thiserror::Error;

/// Failure of a single poll cycle
#[derive(Debug, Error)]
pub enum PollError {
    /// The review API could not be queried
    #[error("Review API request failed: {0}")]
    Api(#[from] ClientError),

    /// The review API answered with data the bot cannot use
    #[error("Invalid review API response: {0}")]
    Validation(#[from] ValidationError),

    /// A notification could not be delivered
    #[error("Failed to deliver notification: {0}")]
    Notification(#[source] ClientError),
}

impl PollError {
    /// Short category name for log fields
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Api(_) => "api",
            Self::Validation(_) => "validation",
            Self::Notification(_) => "notification",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind() {
        assert_eq!(PollError::from(ClientError::api_error(500, "boom")).kind(), "api");
        assert_eq!(
            PollError::from(ValidationError::MissingField("homeworks")).kind(),
            "validation"
        );
        assert_eq!(
            PollError::Notification(ClientError::api_error(400, "chat not found")).kind(),
            "notification"
        );
    }

    #[test]
    fn test_display_keeps_cause() {
        let err = PollError::from(ValidationError::UnknownStatus("pending".to_string()));
        assert_eq!(
            err.to_string(),
            "Invalid review API response: Unknown homework status: pending"
        );
    }
}
