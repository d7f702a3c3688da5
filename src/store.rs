//! Board State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::draft::TaskDraft;
use crate::models::{Filter, Task};

/// View state of the task board
///
/// `tasks` is never edited locally: it only ever holds the body of the last
/// applied list response.
#[derive(Clone, Debug, Store)]
pub struct BoardState {
    /// Last applied list response
    pub tasks: Vec<Task>,
    /// A list fetch is outstanding
    pub loading: bool,
    pub filter: Filter,
    /// Creation form visibility
    pub show_form: bool,
    pub draft: TaskDraft,
    /// Ticket of the most recently started list fetch
    pub latest_fetch: u64,
}

impl Default for BoardState {
    fn default() -> Self {
        Self {
            tasks: Vec::new(),
            loading: true,
            filter: Filter::default(),
            show_form: false,
            draft: TaskDraft::default(),
            latest_fetch: 0,
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<BoardState>;

/// Get the board store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Start a list fetch and return its ticket
pub fn store_begin_fetch(store: &AppStore) -> u64 {
    let latest = store.latest_fetch();
    let ticket = {
        let mut latest = latest.write();
        *latest += 1;
        *latest
    };
    store.loading().set(true);
    ticket
}

/// Settle a list fetch. Returns `false` when a newer fetch has started since,
/// in which case nothing is touched.
pub fn store_finish_fetch(store: &AppStore, ticket: u64, tasks: Option<Vec<Task>>) -> bool {
    if store.latest_fetch().get_untracked() != ticket {
        return false;
    }
    if let Some(tasks) = tasks {
        store.tasks().set(tasks);
    }
    store.loading().set(false);
    true
}

/// Switch filters; re-selecting the active one does nothing
pub fn store_set_filter(store: &AppStore, filter: Filter) {
    if store.filter().get_untracked() != filter {
        store.filter().set(filter);
    }
}

pub fn store_toggle_form(store: &AppStore) {
    let show_form = store.show_form();
    let mut shown = show_form.write();
    *shown = !*shown;
}

/// Clear the form fields and hide the form
pub fn store_close_form(store: &AppStore) {
    store.draft().set(TaskDraft::default());
    store.show_form().set(false);
}

pub fn store_find_task(store: &AppStore, id: &str) -> Option<Task> {
    store
        .tasks()
        .with_untracked(|tasks| tasks.iter().find(|task| task.id == id).cloned())
}
