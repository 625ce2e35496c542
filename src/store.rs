//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The task list
//! lives here for the lifetime of the page; nothing is persisted.

use leptos::prelude::*;
use reactive_stores::Store;
use uuid::Uuid;

use crate::models::{Priority, Task};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All tasks, in insertion order
    pub tasks: Vec<Task>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Partial update for a task; `None` fields are left untouched
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
    pub priority: Option<Priority>,
}

impl TaskPatch {
    /// Patch that only flips the completed flag
    pub fn completed(value: bool) -> Self {
        TaskPatch {
            completed: Some(value),
            ..Default::default()
        }
    }
}

/// Reject empty or whitespace-only titles
pub fn title_is_valid(title: &str) -> bool {
    !title.trim().is_empty()
}

/// Validate and build a task from the form values as they are at submit
/// time; `None` when the title is blank. The caller appends the returned
/// task after its simulated delay, so later input edits cannot leak in.
pub fn validated_task(title: &str, description: &str, priority: Priority) -> Option<Task> {
    if !title_is_valid(title) {
        return None;
    }
    Some(new_task(
        title.to_string(),
        description.to_string(),
        priority,
    ))
}

/// Build a new task with a fresh id and `completed = false`
pub fn new_task(title: String, description: String, priority: Priority) -> Task {
    Task {
        id: Uuid::new_v4().to_string(),
        title,
        description,
        completed: false,
        priority,
    }
}

/// Apply a patch to the task matching `id`; no-op if not found
pub fn patch_task(tasks: &mut Vec<Task>, id: &str, patch: TaskPatch) {
    if let Some(task) = tasks.iter_mut().find(|task| task.id == id) {
        if let Some(title) = patch.title {
            task.title = title;
        }
        if let Some(description) = patch.description {
            task.description = description;
        }
        if let Some(completed) = patch.completed {
            task.completed = completed;
        }
        if let Some(priority) = patch.priority {
            task.priority = priority;
        }
    }
}

/// Remove the task matching `id`; no-op if not found
pub fn remove_task(tasks: &mut Vec<Task>, id: &str) {
    tasks.retain(|task| task.id != id);
}

// ========================
// Store Helper Functions
// ========================

/// Append a task to the store
pub fn store_add_task(store: &AppStore, task: Task) {
    store.tasks().write().push(task);
}

/// Patch a task in the store by ID
pub fn store_patch_task(store: &AppStore, id: &str, patch: TaskPatch) {
    patch_task(&mut *store.tasks().write(), id, patch);
}

/// Remove a task from the store by ID
pub fn store_remove_task(store: &AppStore, id: &str) {
    remove_task(&mut *store.tasks().write(), id);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_task(id: &str, title: &str) -> Task {
        Task {
            id: id.to_string(),
            title: title.to_string(),
            description: String::new(),
            completed: false,
            priority: Priority::Medium,
        }
    }

    #[test]
    fn test_title_validation() {
        assert!(title_is_valid("Review slides"));
        assert!(title_is_valid("  padded  "));
        assert!(!title_is_valid(""));
        assert!(!title_is_valid("   "));
        assert!(!title_is_valid("\t\n"));
    }

    #[test]
    fn test_validated_task_rejects_blank_title() {
        assert!(validated_task("", "desc", Priority::High).is_none());
        assert!(validated_task("   ", "desc", Priority::High).is_none());
    }

    // A rejected attempt must leave the list alone and surface an error,
    // mirroring how the form drives the helper
    #[test]
    fn test_blank_title_attempt_leaves_list_unchanged() {
        let mut tasks = vec![make_task("1", "first")];
        let before = tasks.clone();
        let mut error = None;
        match validated_task("  \t", "", Priority::Medium) {
            Some(task) => tasks.push(task),
            None => error = Some("emptyTitleError"),
        }
        assert_eq!(tasks, before);
        assert!(error.is_some());
    }

    // The task snapshots the input at submit; edits made while the
    // creation delay runs must not show up in the appended task
    #[test]
    fn test_validated_task_copies_input_at_submit() {
        let mut title = String::from("Review slides");
        let task = validated_task(&title, "", Priority::Medium).expect("valid title");
        title.clear();
        assert_eq!(task.title, "Review slides");
        assert!(!task.completed);
    }

    #[test]
    fn test_new_task_fields() {
        let task = new_task(
            "Review slides".to_string(),
            String::new(),
            Priority::Medium,
        );
        assert_eq!(task.title, "Review slides");
        assert_eq!(task.description, "");
        assert!(!task.completed);
        assert_eq!(task.priority, Priority::Medium);
        assert!(!task.id.is_empty());
    }

    #[test]
    fn test_new_task_unique_ids() {
        let a = new_task("a".to_string(), String::new(), Priority::Low);
        let b = new_task("b".to_string(), String::new(), Priority::Low);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_patch_task_only_touches_target() {
        let mut tasks = vec![make_task("1", "first"), make_task("2", "second")];
        patch_task(&mut tasks, "2", TaskPatch::completed(true));

        assert!(!tasks[0].completed);
        assert!(tasks[1].completed);
        assert_eq!(tasks[1].title, "second");
        assert_eq!(tasks[1].priority, Priority::Medium);
    }

    #[test]
    fn test_patch_task_unknown_id_is_noop() {
        let mut tasks = vec![make_task("1", "first")];
        let before = tasks.clone();
        patch_task(&mut tasks, "missing", TaskPatch::completed(true));
        assert_eq!(tasks, before);
    }

    #[test]
    fn test_patch_task_partial_fields() {
        let mut tasks = vec![make_task("1", "first")];
        let patch = TaskPatch {
            title: Some("renamed".to_string()),
            priority: Some(Priority::High),
            ..Default::default()
        };
        patch_task(&mut tasks, "1", patch);

        assert_eq!(tasks[0].title, "renamed");
        assert_eq!(tasks[0].priority, Priority::High);
        assert_eq!(tasks[0].description, "");
        assert!(!tasks[0].completed);
    }

    #[test]
    fn test_remove_task_keeps_order() {
        let mut tasks = vec![
            make_task("1", "first"),
            make_task("2", "second"),
            make_task("3", "third"),
        ];
        remove_task(&mut tasks, "2");

        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].id, "1");
        assert_eq!(tasks[1].id, "3");
    }

    #[test]
    fn test_remove_task_unknown_id_is_noop() {
        let mut tasks = vec![make_task("1", "first")];
        remove_task(&mut tasks, "missing");
        assert_eq!(tasks.len(), 1);
    }

    // Create -> toggle -> delete, as a user would drive it
    #[test]
    fn test_task_lifecycle() {
        let mut tasks = Vec::new();
        let task = new_task(
            "Review slides".to_string(),
            String::new(),
            Priority::Medium,
        );
        let id = task.id.clone();
        tasks.push(task);

        assert_eq!(tasks.len(), 1);
        assert!(!tasks[0].completed);

        patch_task(&mut tasks, &id, TaskPatch::completed(true));
        assert!(tasks[0].completed);
        assert_eq!(tasks[0].title, "Review slides");
        assert_eq!(tasks[0].priority, Priority::Medium);

        remove_task(&mut tasks, &id);
        assert!(tasks.is_empty());
    }
}
