//! New Task Draft
//!
//! Raw form values for the creation form and their conversion into the
//! service's create payload.

use chrono::TimeZone;
use thiserror::Error;

use crate::dates::{parse_local_input, to_iso_millis};
use crate::models::NewTask;

pub const DEFAULT_PRIORITY: i32 = 5;
pub const MIN_PRIORITY: i32 = 1;
pub const MAX_PRIORITY: i32 = 10;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DraftError {
    #[error("el título es obligatorio")]
    MissingTitle,
    #[error("fecha de vencimiento inválida: {0}")]
    InvalidDueDate(String),
}

/// Creation form fields, as typed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub priority: i32,
    /// datetime-local value, empty when unset
    pub due_at: String,
    /// Comma separated
    pub tags: String,
}

impl Default for TaskDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            priority: DEFAULT_PRIORITY,
            due_at: String::new(),
            tags: String::new(),
        }
    }
}

impl TaskDraft {
    /// Apply the number input's text. Unparsable text keeps the current value.
    pub fn set_priority_input(&mut self, raw: &str) {
        if let Ok(value) = raw.trim().parse::<i32>() {
            self.priority = value.clamp(MIN_PRIORITY, MAX_PRIORITY);
        }
    }

    /// Build the create payload, reading the due date as wall-clock time in `tz`
    pub fn to_new_task<Tz: TimeZone>(&self, tz: &Tz) -> Result<NewTask, DraftError> {
        if self.title.is_empty() {
            return Err(DraftError::MissingTitle);
        }

        let due_at = if self.due_at.is_empty() {
            None
        } else {
            let instant = parse_local_input(&self.due_at, tz)
                .ok_or_else(|| DraftError::InvalidDueDate(self.due_at.clone()))?;
            Some(to_iso_millis(&instant))
        };

        Ok(NewTask {
            title: self.title.clone(),
            priority: self.priority,
            description: (!self.description.is_empty()).then(|| self.description.clone()),
            due_at,
            tags: (!self.tags.is_empty()).then(|| split_tags(&self.tags)),
        })
    }
}

/// Split free-text tags on commas, trimming each piece. Empty pieces are kept.
pub fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',').map(|tag| tag.trim().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};
    use serde_json::json;

    fn draft(title: &str) -> TaskDraft {
        TaskDraft {
            title: title.to_string(),
            ..TaskDraft::default()
        }
    }

    #[test]
    fn test_title_only_payload_has_two_fields() {
        let payload = draft("Comprar leche").to_new_task(&Utc).expect("valid draft");
        let body = serde_json::to_value(&payload).unwrap();

        assert_eq!(body, json!({ "titulo": "Comprar leche", "prioridad": 5 }));
    }

    #[test]
    fn test_full_payload() {
        let mut full = draft("Informe");
        full.description = "Trimestral".to_string();
        full.priority = 9;
        full.due_at = "2025-03-01T10:00".to_string();
        full.tags = "trabajo, urgente".to_string();

        let bogota = FixedOffset::west_opt(5 * 3600).unwrap();
        let body = serde_json::to_value(full.to_new_task(&bogota).unwrap()).unwrap();

        assert_eq!(
            body,
            json!({
                "titulo": "Informe",
                "prioridad": 9,
                "descripcion": "Trimestral",
                "fechaVencimiento": "2025-03-01T15:00:00.000Z",
                "etiquetas": ["trabajo", "urgente"]
            })
        );
    }

    #[test]
    fn test_tags_are_trimmed_in_order() {
        assert_eq!(split_tags("a, b ,c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_empty_tag_pieces_are_kept() {
        assert_eq!(split_tags("a,,b"), vec!["a", "", "b"]);

        let mut blank_tags = draft("x");
        blank_tags.tags = "  ".to_string();
        assert_eq!(
            blank_tags.to_new_task(&Utc).unwrap().tags,
            Some(vec![String::new()])
        );

        let no_tags = draft("x");
        assert_eq!(no_tags.to_new_task(&Utc).unwrap().tags, None);
    }

    #[test]
    fn test_empty_title_is_rejected() {
        assert_eq!(draft("").to_new_task(&Utc), Err(DraftError::MissingTitle));
    }

    #[test]
    fn test_whitespace_title_is_sent_as_typed() {
        let payload = draft("   ").to_new_task(&Utc).expect("non-empty title");
        assert_eq!(payload.title, "   ");
    }

    #[test]
    fn test_invalid_due_date_is_rejected() {
        let mut bad = draft("x");
        bad.due_at = "pronto".to_string();
        assert_eq!(
            bad.to_new_task(&Utc),
            Err(DraftError::InvalidDueDate("pronto".to_string()))
        );
    }

    #[test]
    fn test_priority_input_is_clamped() {
        let mut form = TaskDraft::default();
        form.set_priority_input("12");
        assert_eq!(form.priority, MAX_PRIORITY);
        form.set_priority_input("0");
        assert_eq!(form.priority, MIN_PRIORITY);
        form.set_priority_input("7");
        assert_eq!(form.priority, 7);
        form.set_priority_input("");
        assert_eq!(form.priority, 7);
    }
}
