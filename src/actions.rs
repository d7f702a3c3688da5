//! Board Actions
//!
//! Each user intent is a single remote call followed by a full list refresh.
//! Nothing is retried and no task is patched locally.

use chrono::TimeZone;

use crate::commands::{Prompter, TaskApi};
use crate::models::Task;
use crate::store::{
    store_begin_fetch, store_close_form, store_finish_fetch, AppStore, BoardStateStoreFields,
};
use leptos::prelude::*;

pub const LOAD_ERROR: &str = "Error al cargar las tareas";
pub const CREATE_ERROR: &str = "Error al crear la tarea";
pub const DELETE_PROMPT: &str = "¿Estás seguro de eliminar esta tarea?";

/// Reload the list for the active filter.
///
/// Only the most recently started refresh may touch the store; earlier
/// responses that arrive late are dropped.
pub async fn refresh_tasks(api: &impl TaskApi, prompter: &impl Prompter, store: AppStore) {
    let filter = store.filter().get_untracked();
    let ticket = store_begin_fetch(&store);
    log::debug!(target: "board", "loading {:?} tasks (fetch #{})", filter, ticket);

    match api.list_tasks(filter).await {
        Ok(tasks) => {
            let count = tasks.len();
            if store_finish_fetch(&store, ticket, Some(tasks)) {
                log::info!(target: "board", "loaded {} {:?} tasks", count, filter);
            } else {
                log::debug!(target: "board", "dropped stale response for fetch #{}", ticket);
            }
        }
        Err(err) => {
            if store_finish_fetch(&store, ticket, None) {
                log::error!(target: "board", "failed to load tasks: {}", err);
                prompter.alert(LOAD_ERROR);
            } else {
                log::warn!(target: "board", "stale fetch #{} failed: {}", ticket, err);
            }
        }
    }
}

/// Submit the creation form. The form keeps its values unless the service
/// accepts the task.
pub async fn create_task<Tz: TimeZone>(
    api: &impl TaskApi,
    prompter: &impl Prompter,
    store: AppStore,
    tz: &Tz,
) {
    let draft = store.draft().get_untracked();
    let payload = match draft.to_new_task(tz) {
        Ok(payload) => payload,
        Err(err) => {
            log::warn!(target: "board", "invalid task form: {}", err);
            prompter.alert(&format!("{}: {}", CREATE_ERROR, err));
            return;
        }
    };

    match api.create_task(&payload).await {
        Ok(()) => {
            log::info!(target: "board", "created task {:?}", payload.title);
            store_close_form(&store);
            refresh_tasks(api, prompter, store).await;
        }
        Err(err) => {
            log::error!(target: "board", "failed to create task: {}", err);
            prompter.alert(CREATE_ERROR);
        }
    }
}

/// Mark a task completed. Completion is one-way, so completed tasks are
/// left alone.
pub async fn complete_task(
    api: &impl TaskApi,
    prompter: &impl Prompter,
    store: AppStore,
    task: &Task,
) {
    if task.completed {
        log::debug!(target: "board", "task {} already completed", task.id);
        return;
    }

    match api.complete_task(&task.id).await {
        Ok(()) => refresh_tasks(api, prompter, store).await,
        Err(err) => log::error!(target: "board", "failed to complete task {}: {}", task.id, err),
    }
}

/// Delete a task after the user confirms
pub async fn delete_task(api: &impl TaskApi, prompter: &impl Prompter, store: AppStore, id: &str) {
    if !prompter.confirm(DELETE_PROMPT) {
        return;
    }

    match api.delete_task(id).await {
        Ok(()) => refresh_tasks(api, prompter, store).await,
        Err(err) => log::error!(target: "board", "failed to delete task {}: {}", id, err),
    }
}
