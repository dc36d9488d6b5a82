use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Why a candidate task was refused. The messages are shown to the user as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Need a task name 🙂")]
    MissingName,
    #[error("Need a valid duration (minutes) 🙂")]
    InvalidDuration,
    #[error("Need a location 🙂")]
    MissingLocation,
}

/// Raw, unvalidated input for a new task (form fields, CLI flags or a CSV row)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    pub name: String,
    pub duration: String,
    pub location: String,
    pub group: String,
}

impl TaskDraft {
    pub fn new(
        name: impl Into<String>,
        duration: impl Into<String>,
        location: impl Into<String>,
        group: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            duration: duration.into(),
            location: location.into(),
            group: group.into(),
        }
    }
}

/// Parse a duration in minutes: a finite positive number, floored to whole minutes.
///
/// Values that floor to zero are rejected so a stored duration is never 0.
pub fn parse_duration_minutes(raw: &str) -> Option<u32> {
    let value: f64 = raw.trim().parse().ok()?;
    if !value.is_finite() || value <= 0.0 {
        return None;
    }
    let floored = value.floor();
    if floored < 1.0 || floored > f64::from(u32::MAX) {
        return None;
    }
    Some(floored as u32)
}

/// A task that can be picked by a spin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: Uuid,
    pub name: String,
    /// Minutes
    pub duration: u32,
    pub location: String,
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default)]
    pub done: bool,
    pub created_at: DateTime<Local>,
}

impl Task {
    /// Validate a draft and build a fresh task from it.
    ///
    /// Only the first violation is reported, checked as name, duration, location.
    pub fn from_draft(draft: &TaskDraft) -> Result<Self, ValidationError> {
        let name = draft.name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingName);
        }
        let duration =
            parse_duration_minutes(&draft.duration).ok_or(ValidationError::InvalidDuration)?;
        let location = draft.location.trim();
        if location.is_empty() {
            return Err(ValidationError::MissingLocation);
        }
        let group = draft.group.trim();

        Ok(Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            duration,
            location: location.to_string(),
            group: (!group.is_empty()).then(|| group.to_string()),
            done: false,
            created_at: Local::now(),
        })
    }

    /// Whether a record read back from storage still honours the task invariants
    pub fn is_well_formed(&self) -> bool {
        self.duration > 0 && !self.name.trim().is_empty() && !self.location.trim().is_empty()
    }

    /// Set the done flag. Returns false if the task was already done.
    pub fn mark_done(&mut self) -> bool {
        if self.done {
            return false;
        }
        self.done = true;
        true
    }

    /// Case-insensitive location comparison used by the location filter
    pub fn is_at(&self, location: &str) -> bool {
        self.location.to_lowercase() == location.trim().to_lowercase()
    }

    /// Short form of the id, enough to address a task from the command line
    pub fn short_id(&self) -> String {
        self.id.simple().to_string()[..8].to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_draft_trims_fields() {
        let draft = TaskDraft::new("  Wash car ", "20", " Home ", "  ");
        let task = Task::from_draft(&draft).unwrap();

        assert_eq!(task.name, "Wash car");
        assert_eq!(task.duration, 20);
        assert_eq!(task.location, "Home");
        assert_eq!(task.group, None);
        assert!(!task.done);
    }

    #[test]
    fn test_from_draft_keeps_group() {
        let draft = TaskDraft::new("Stretch", "10", "Gym", " Health ");
        let task = Task::from_draft(&draft).unwrap();
        assert_eq!(task.group.as_deref(), Some("Health"));
    }

    #[test]
    fn test_from_draft_reports_first_violation() {
        let draft = TaskDraft::new("", "abc", "", "");
        assert_eq!(Task::from_draft(&draft), Err(ValidationError::MissingName));

        let draft = TaskDraft::new("Read", "abc", "", "");
        assert_eq!(Task::from_draft(&draft), Err(ValidationError::InvalidDuration));

        let draft = TaskDraft::new("Read", "15", "   ", "");
        assert_eq!(Task::from_draft(&draft), Err(ValidationError::MissingLocation));
    }

    #[test]
    fn test_parse_duration_minutes() {
        assert_eq!(parse_duration_minutes("15"), Some(15));
        assert_eq!(parse_duration_minutes(" 12.9 "), Some(12));
        assert_eq!(parse_duration_minutes("1e2"), Some(100));
        assert_eq!(parse_duration_minutes(""), None);
        assert_eq!(parse_duration_minutes("0"), None);
        assert_eq!(parse_duration_minutes("-5"), None);
        assert_eq!(parse_duration_minutes("0.5"), None);
        assert_eq!(parse_duration_minutes("inf"), None);
        assert_eq!(parse_duration_minutes("NaN"), None);
        assert_eq!(parse_duration_minutes("ten"), None);
    }

    #[test]
    fn test_mark_done_is_monotonic() {
        let mut task = Task::from_draft(&TaskDraft::new("Read", "15", "Home", "")).unwrap();
        assert!(task.mark_done());
        assert!(!task.mark_done());
        assert!(task.done);
    }

    #[test]
    fn test_is_at_ignores_case() {
        let task = Task::from_draft(&TaskDraft::new("Read", "15", "Home", "")).unwrap();
        assert!(task.is_at("home"));
        assert!(task.is_at("HOME "));
        assert!(!task.is_at("Work"));
    }

    #[test]
    fn test_serialized_field_names() {
        let task = Task::from_draft(&TaskDraft::new("Read", "15", "Home", "")).unwrap();
        let json = serde_json::to_value(&task).unwrap();
        assert!(json.get("createdAt").is_some());
        assert_eq!(json["group"], serde_json::Value::Null);
        assert_eq!(json["done"], serde_json::Value::Bool(false));
    }
}
