//! List facade: observe-only view over all tasks.

use crate::model::task::Task;
use crate::observe::state_cell::StateReader;
use crate::repo::task_repo::TaskRepository;
use std::sync::Arc;

/// Read-only facade for callers that list all tasks and react to changes.
///
/// Stateless delegator; the repository is injected explicitly.
pub struct TaskListService<R: TaskRepository> {
    repo: Arc<R>,
}

impl<R: TaskRepository> TaskListService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Returns the live snapshot handle over the full task sequence.
    pub fn tasks(&self) -> StateReader<Vec<Task>> {
        self.repo.watch_tasks()
    }

    /// Returns a copy of the current sequence without subscribing.
    pub fn snapshot(&self) -> Vec<Task> {
        self.repo.list_tasks()
    }
}
