//! UI Components
//!
//! Leptos components of the task board.

mod filter_bar;
mod new_task_form;
mod task_list;
mod task_card;

pub use filter_bar::FilterBar;
pub use new_task_form::NewTaskForm;
pub use task_list::TaskList;
pub use task_card::TaskCard;
