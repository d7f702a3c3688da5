//! Frontend Models
//!
//! Data structures matching the tasks service payloads. Field names on the
//! wire are the service's own (Spanish) names.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::draft::DEFAULT_PRIORITY;

/// Task as returned by the service
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Task {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "descripcion", default)]
    pub description: Option<String>,
    #[serde(rename = "prioridad", default = "default_priority")]
    pub priority: i32,
    #[serde(rename = "fechaVencimiento", default)]
    pub due_at: Option<DateTime<Utc>>,
    #[serde(rename = "etiquetas", default)]
    pub tags: Option<Vec<String>>,
    #[serde(rename = "completada", default)]
    pub completed: bool,
    #[serde(rename = "creadoEn")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "actualizadoEn")]
    pub updated_at: DateTime<Utc>,
    #[serde(rename = "completadaEn", default)]
    pub completed_at: Option<DateTime<Utc>>,
}

fn default_priority() -> i32 {
    DEFAULT_PRIORITY
}

/// Envelope of the list endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct TaskListResponse {
    #[serde(default)]
    pub data: Option<Vec<Task>>,
}

impl TaskListResponse {
    pub fn into_tasks(self) -> Vec<Task> {
        self.data.unwrap_or_default()
    }
}

/// Body of `POST /tasks`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTask {
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "prioridad")]
    pub priority: i32,
    #[serde(rename = "descripcion", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// UTC instant in `toISOString()` form
    #[serde(rename = "fechaVencimiento", skip_serializing_if = "Option::is_none")]
    pub due_at: Option<String>,
    #[serde(rename = "etiquetas", skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Which list endpoint the board is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Filter {
    #[default]
    All,
    Completed,
    Incomplete,
}

impl Filter {
    /// Button order in the filter bar
    pub const DISPLAY_ORDER: [Filter; 3] = [Filter::All, Filter::Incomplete, Filter::Completed];

    /// Segment for `/tasks/estado/{segment}`; `None` means the unfiltered list
    pub fn state_segment(self) -> Option<&'static str> {
        match self {
            Filter::All => None,
            Filter::Completed => Some("completadas"),
            Filter::Incomplete => Some("incompletas"),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "Todas",
            Filter::Completed => "Completadas",
            Filter::Incomplete => "Pendientes",
        }
    }

    pub fn empty_message(self) -> String {
        match self.state_segment() {
            Some(segment) => format!("No hay tareas {}", segment),
            None => "No hay tareas".to_string(),
        }
    }
}
