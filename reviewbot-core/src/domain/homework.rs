//! Homework domain types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Review status of a submitted homework
///
/// The set of variants is the verdict table: every status the bot knows
/// how to describe. Anything else reported by the API is rejected during
/// validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    /// All known statuses, in verdict table order
    pub const ALL: [HomeworkStatus; 3] = [Self::Approved, Self::Reviewing, Self::Rejected];

    /// Status code as the API spells it
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Approved => "approved",
            Self::Reviewing => "reviewing",
            Self::Rejected => "rejected",
        }
    }

    /// Human-readable verdict shown to the user
    pub fn verdict(&self) -> &'static str {
        match self {
            Self::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            Self::Reviewing => "Работа взята на проверку ревьюером.",
            Self::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

impl fmt::Display for HomeworkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HomeworkStatus {
    type Err = crate::ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| crate::ValidationError::UnknownStatus(s.to_string()))
    }
}

/// A single homework entry from the review API
///
/// Only the fields the bot reports on are kept; everything else the API
/// sends is ignored. Fields are optional because the API contract is only
/// checked at validation time; rendering a message reports whichever
/// required field is missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HomeworkRecord {
    pub homework_name: Option<String>,
    pub status: Option<String>,
}

impl HomeworkRecord {
    /// Creates a record with just a name and a status code
    pub fn new(homework_name: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            homework_name: Some(homework_name.into()),
            status: Some(status.into()),
            ..Default::default()
        }
    }

    /// Returns the name and the parsed status, or the first problem found
    pub fn name_and_status(&self) -> Result<(&str, HomeworkStatus), crate::ValidationError> {
        let name = self
            .homework_name
            .as_deref()
            .ok_or(crate::ValidationError::MissingField("homework_name"))?;
        let status = self
            .status
            .as_deref()
            .ok_or(crate::ValidationError::MissingField("status"))?
            .parse()?;
        Ok((name, status))
    }
}

/// Validated body of a homework status response
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HomeworkStatuses {
    /// Homeworks whose status changed within the requested window
    pub homeworks: Vec<HomeworkRecord>,
    /// Server time (epoch seconds) the next window should start from
    pub current_date: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_str() {
        assert_eq!(
            "approved".parse::<HomeworkStatus>().unwrap(),
            HomeworkStatus::Approved
        );
        assert_eq!(
            "reviewing".parse::<HomeworkStatus>().unwrap(),
            HomeworkStatus::Reviewing
        );
        assert_eq!(
            "rejected".parse::<HomeworkStatus>().unwrap(),
            HomeworkStatus::Rejected
        );
    }

    #[test]
    fn test_status_from_str_unknown() {
        let err = "pending".parse::<HomeworkStatus>().unwrap_err();
        assert_eq!(err, crate::ValidationError::UnknownStatus("pending".to_string()));

        // Codes are case-sensitive
        assert!("Approved".parse::<HomeworkStatus>().is_err());
    }

    #[test]
    fn test_verdicts_are_distinct() {
        let verdicts: std::collections::HashSet<_> =
            HomeworkStatus::ALL.iter().map(|s| s.verdict()).collect();
        assert_eq!(verdicts.len(), HomeworkStatus::ALL.len());
    }

    #[test]
    fn test_record_ignores_other_fields() {
        let record: HomeworkRecord = serde_json::from_value(serde_json::json!({
            "id": 124,
            "status": "rejected",
            "homework_name": "username__hw_python_oop.zip",
            "reviewer_comment": "Код не по PEP8",
            "date_updated": "2020-02-13T16:42:47Z",
            "lesson_name": "Итоговый проект"
        }))
        .unwrap();

        assert_eq!(
            record,
            HomeworkRecord::new("username__hw_python_oop.zip", "rejected")
        );
    }
}
