//! Service Bindings
//!
//! The tasks service and the browser dialogs, each behind a trait so the
//! board operations can run against fakes.

mod task;
mod dialog;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Filter, NewTask, Task};

pub use task::HttpTaskApi;
pub use dialog::BrowserPrompter;

/// Any failed round-trip with the tasks service
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("service answered with status {0}")]
    Status(u16),

    #[error("invalid response body: {0}")]
    Json(#[from] serde_json::Error),
}

/// Remote task operations
///
/// Futures are not `Send`: the browser fetch backend is single-threaded.
#[async_trait(?Send)]
pub trait TaskApi {
    /// `GET /tasks` or `GET /tasks/estado/{segment}`
    async fn list_tasks(&self, filter: Filter) -> Result<Vec<Task>, ApiError>;

    /// `POST /tasks`
    async fn create_task(&self, task: &NewTask) -> Result<(), ApiError>;

    /// `PUT /tasks/{id}/completar`
    async fn complete_task(&self, id: &str) -> Result<(), ApiError>;

    /// `DELETE /tasks/{id}`
    async fn delete_task(&self, id: &str) -> Result<(), ApiError>;
}

/// Blocking user dialogs
pub trait Prompter {
    fn alert(&self, message: &str);

    /// `true` when the user accepts
    fn confirm(&self, message: &str) -> bool;
}
