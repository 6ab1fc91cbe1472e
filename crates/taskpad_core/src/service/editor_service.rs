//! Detail/edit facade: single-task lookup, creation and update.
//!
//! # Responsibility
//! - Load one task by id into an observable slot for an edit flow.
//! - Save (upsert) a task through the repository.
//!
//! # Invariants
//! - The slot starts absent and becomes absent again whenever a load
//!   misses; the edit flow treats absent as "nothing to render".
//! - `save` never touches the slot; only `load` republishes it.

use crate::model::task::{Task, TaskId};
use crate::observe::state_cell::{StateCell, StateReader};
use crate::repo::task_repo::{SaveOutcome, TaskRepository};
use log::debug;
use std::sync::Arc;

/// Facade for the create/edit flow over a single task.
pub struct TaskEditorService<R: TaskRepository> {
    repo: Arc<R>,
    slot: StateCell<Option<Task>>,
}

impl<R: TaskRepository> TaskEditorService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self {
            repo,
            slot: StateCell::new(None),
        }
    }

    /// Fetches the task with `id` from the store and republishes it
    /// through this facade's slot. A missing id sets the slot to `None`.
    pub fn load(&self, id: TaskId) {
        let found = self.repo.get_task(id);
        debug!("event=task_loaded module=editor id={id} found={}", found.is_some());
        self.slot.set(found);
    }

    /// Upserts `task`: created when the id is new, updated otherwise.
    ///
    /// The check and write are one atomic repository call, so saving the
    /// same new id from two threads still yields exactly one record.
    pub fn save(&self, task: Task) -> SaveOutcome {
        self.repo.upsert_task(task)
    }

    /// Returns the observable slot holding the last loaded task.
    pub fn task(&self) -> StateReader<Option<Task>> {
        self.slot.reader()
    }

    /// Suggests an unused id for a create flow; see
    /// [`TaskRepository::allocate_id`] for the non-reservation caveat.
    pub fn allocate_id(&self) -> TaskId {
        self.repo.allocate_id()
    }
}
