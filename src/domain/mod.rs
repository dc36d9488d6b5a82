pub mod enums;
pub mod task;
pub mod views;

pub use enums::{FormField, Screen, UiMode};
pub use task::{Task, TaskDraft, ValidationError};
pub use views::{flatten_groups, format_remaining, group_tasks, status_badge, ListRow};
