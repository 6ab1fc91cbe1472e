//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `taskpad_core` linkage by
//!   driving the create/edit flow end to end.
//! - Keep output deterministic for quick local sanity checks.

use std::sync::Arc;
use taskpad_core::{InMemoryTaskRepository, Task, TaskEditorService, TaskListService};

fn main() {
    println!("taskpad_core version={}", taskpad_core::core_version());

    let repo = Arc::new(InMemoryTaskRepository::new());
    let list = TaskListService::new(Arc::clone(&repo));
    let editor = TaskEditorService::new(Arc::clone(&repo));

    let id = editor.allocate_id();
    editor.save(Task::new(id, "Write release notes", "v0.1 highlights", "2024-07-01"));
    editor.save(
        Task::new(id, "Write release notes", "v0.1 highlights", "2024-07-01")
            .with_completion(true),
    );

    for task in list.snapshot() {
        println!(
            "task id={} title={:?} due={} completed={}",
            task.id, task.title, task.due_date, task.is_completed
        );
    }
}
