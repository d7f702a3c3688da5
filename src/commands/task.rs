//! Task Commands
//!
//! HTTP bindings for the tasks service.

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::{Client, Response};

use super::{ApiError, TaskApi};
use crate::config::ApiConfig;
use crate::models::{Filter, NewTask, Task, TaskListResponse};

/// Characters escaped inside a single path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Tasks service over fetch
#[derive(Debug, Clone)]
pub struct HttpTaskApi {
    client: Client,
    config: ApiConfig,
}

impl HttpTaskApi {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn base_url(&self) -> &str {
        self.config.base_url()
    }

    fn list_url(&self, filter: Filter) -> String {
        match filter.state_segment() {
            Some(segment) => format!("{}/tasks/estado/{}", self.config.base_url(), segment),
            None => format!("{}/tasks", self.config.base_url()),
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/tasks", self.config.base_url())
    }

    fn task_url(&self, id: &str) -> String {
        format!(
            "{}/tasks/{}",
            self.config.base_url(),
            utf8_percent_encode(id, PATH_SEGMENT)
        )
    }

    fn complete_url(&self, id: &str) -> String {
        format!("{}/completar", self.task_url(id))
    }
}

fn ensure_success(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ApiError::Status(status.as_u16()))
    }
}

/// Decode a list endpoint body; a missing `data` field is an empty list
pub fn decode_task_list(body: &str) -> Result<Vec<Task>, ApiError> {
    let response: TaskListResponse = serde_json::from_str(body)?;
    Ok(response.into_tasks())
}

#[async_trait(?Send)]
impl TaskApi for HttpTaskApi {
    async fn list_tasks(&self, filter: Filter) -> Result<Vec<Task>, ApiError> {
        let url = self.list_url(filter);
        log::debug!(target: "api", "GET {}", url);
        let response = ensure_success(self.client.get(&url).send().await?)?;
        let body = response.text().await?;
        decode_task_list(&body)
    }

    async fn create_task(&self, task: &NewTask) -> Result<(), ApiError> {
        let url = self.collection_url();
        log::debug!(target: "api", "POST {}", url);
        ensure_success(self.client.post(&url).json(task).send().await?)?;
        Ok(())
    }

    async fn complete_task(&self, id: &str) -> Result<(), ApiError> {
        let url = self.complete_url(id);
        log::debug!(target: "api", "PUT {}", url);
        ensure_success(self.client.put(&url).send().await?)?;
        Ok(())
    }

    async fn delete_task(&self, id: &str) -> Result<(), ApiError> {
        let url = self.task_url(id);
        log::debug!(target: "api", "DELETE {}", url);
        ensure_success(self.client.delete(&url).send().await?)?;
        Ok(())
    }
}
