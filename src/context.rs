//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use chrono::Local;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::commands::{BrowserPrompter, HttpTaskApi};
use crate::config::ApiConfig;
use crate::store::{store_find_task, AppStore};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Board state
    pub store: AppStore,
    /// Tasks service client, shared by every operation
    api: StoredValue<HttpTaskApi>,
}

impl AppContext {
    pub fn new(store: AppStore, config: ApiConfig) -> Self {
        let api = HttpTaskApi::new(config);
        log::info!(target: "app", "tasks service at {}", api.base_url());
        Self {
            store,
            api: StoredValue::new(api),
        }
    }

    fn api(&self) -> HttpTaskApi {
        self.api.get_value()
    }

    /// Refetch the list for the active filter
    pub fn reload(&self) {
        let ctx = *self;
        spawn_local(async move {
            actions::refresh_tasks(&ctx.api(), &BrowserPrompter, ctx.store).await;
        });
    }

    /// Submit the creation form
    pub fn create(&self) {
        let ctx = *self;
        spawn_local(async move {
            actions::create_task(&ctx.api(), &BrowserPrompter, ctx.store, &Local).await;
        });
    }

    /// Mark a listed task completed
    pub fn complete(&self, id: String) {
        let ctx = *self;
        let Some(task) = store_find_task(&ctx.store, &id) else {
            log::warn!(target: "app", "complete requested for unknown task {}", id);
            return;
        };
        spawn_local(async move {
            actions::complete_task(&ctx.api(), &BrowserPrompter, ctx.store, &task).await;
        });
    }

    /// Delete a task, asking first
    pub fn delete(&self, id: String) {
        let ctx = *self;
        spawn_local(async move {
            actions::delete_task(&ctx.api(), &BrowserPrompter, ctx.store, &id).await;
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::BoardState;
    use reactive_stores::Store;

    #[test]
    fn test_context_keeps_one_configured_client() {
        let owner = Owner::new();
        owner.set();
        let store = Store::new(BoardState::default());
        let ctx = AppContext::new(store, ApiConfig::new("http://localhost:4000/api/"));

        assert_eq!(ctx.api().base_url(), "http://localhost:4000/api");
        assert_eq!(ctx.api.with_value(|api| api.base_url().to_string()), "http://localhost:4000/api");
    }
}
