//! Task repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Hold the canonical ordered task sequence.
//! - Publish a fresh snapshot to all observers on every successful write.
//!
//! # Invariants
//! - Insertion order is preserved; `update_task` replaces in place.
//! - A publication reflects the full sequence at the time the write held
//!   the lock; writers are totally ordered by lock acquisition.
//! - Reads never publish.

use crate::model::task::{Task, TaskId};
use crate::observe::state_cell::{Mutation, StateCell, StateReader};
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Semantic errors for task storage operations.
///
/// The store performs no field validation, so the taxonomy is small: only
/// id-level conflicts and absences are surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepoError {
    /// `add_task` was given an id that is already stored. Accepting it
    /// would make the second record unreachable by id-based operations.
    DuplicateId(TaskId),
    /// `update_task` found no stored task with the given id.
    NotFound(TaskId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateId(id) => write!(f, "task id already stored: {id}"),
            Self::NotFound(id) => write!(f, "task not found: {id}"),
        }
    }
}

impl Error for RepoError {}

/// Outcome of an upsert: which branch the store took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// No task with the id existed; the record was appended.
    Created,
    /// An existing record was replaced in place.
    Updated,
}

/// Repository interface for task storage and observation.
pub trait TaskRepository {
    /// Appends `task` and publishes, or rejects a duplicate id.
    fn add_task(&self, task: Task) -> RepoResult<()>;

    /// Replaces the stored record with `task.id` in place and publishes.
    ///
    /// A missing id returns [`RepoError::NotFound`]; the sequence is left
    /// untouched and nothing is published.
    fn update_task(&self, task: Task) -> RepoResult<()>;

    /// Inserts or replaces atomically: the existence check and the write
    /// happen under one lock, so two concurrent upserts of the same new id
    /// cannot both take the insert branch.
    fn upsert_task(&self, task: Task) -> SaveOutcome;

    /// Returns the first stored task with `id`, or `None`. Read-only.
    fn get_task(&self, id: TaskId) -> Option<Task>;

    /// Returns a copy of the current sequence. Read-only.
    fn list_tasks(&self) -> Vec<Task>;

    /// Returns the live snapshot handle over the full sequence.
    ///
    /// The handle always has a current value (the empty sequence before
    /// any add) and is updated on every publication.
    fn watch_tasks(&self) -> StateReader<Vec<Task>>;

    /// Suggests an unused id (max stored id + 1, starting at 1).
    ///
    /// The id is not reserved; `add_task` remains the authority on
    /// uniqueness, so a caller racing another creator simply gets the
    /// duplicate rejection and retries.
    fn allocate_id(&self) -> TaskId;
}

const FIRST_TASK_ID: TaskId = 1;

/// In-memory task repository built on a single observable cell.
///
/// The cell's value is the canonical sequence; every mutation runs under
/// its lock and publishes a cloned snapshot on success.
pub struct InMemoryTaskRepository {
    tasks: StateCell<Vec<Task>>,
}

impl InMemoryTaskRepository {
    pub fn new() -> Self {
        Self {
            tasks: StateCell::new(Vec::new()),
        }
    }
}

impl Default for InMemoryTaskRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskRepository for InMemoryTaskRepository {
    fn add_task(&self, task: Task) -> RepoResult<()> {
        let id = task.id;
        let result = self.tasks.modify(|tasks| {
            if tasks.iter().any(|stored| stored.id == id) {
                Mutation::Keep(Err(RepoError::DuplicateId(id)))
            } else {
                tasks.push(task);
                Mutation::Publish(Ok(()))
            }
        });
        if result.is_ok() {
            debug!("event=task_added module=repo id={id}");
        }
        result
    }

    fn update_task(&self, task: Task) -> RepoResult<()> {
        let id = task.id;
        let result = self.tasks.modify(|tasks| {
            match tasks.iter().position(|stored| stored.id == id) {
                Some(index) => {
                    tasks[index] = task;
                    Mutation::Publish(Ok(()))
                }
                None => Mutation::Keep(Err(RepoError::NotFound(id))),
            }
        });
        if result.is_ok() {
            debug!("event=task_updated module=repo id={id}");
        }
        result
    }

    fn upsert_task(&self, task: Task) -> SaveOutcome {
        let id = task.id;
        let outcome = self.tasks.modify(|tasks| {
            match tasks.iter().position(|stored| stored.id == id) {
                Some(index) => {
                    tasks[index] = task;
                    Mutation::Publish(SaveOutcome::Updated)
                }
                None => {
                    tasks.push(task);
                    Mutation::Publish(SaveOutcome::Created)
                }
            }
        });
        debug!("event=task_saved module=repo id={id} outcome={outcome:?}");
        outcome
    }

    fn get_task(&self, id: TaskId) -> Option<Task> {
        self.tasks
            .read(|tasks| tasks.iter().find(|stored| stored.id == id).cloned())
    }

    fn list_tasks(&self) -> Vec<Task> {
        self.tasks.get()
    }

    fn watch_tasks(&self) -> StateReader<Vec<Task>> {
        self.tasks.reader()
    }

    fn allocate_id(&self) -> TaskId {
        self.tasks.read(|tasks| {
            tasks
                .iter()
                .map(|stored| stored.id)
                .max()
                .map_or(FIRST_TASK_ID, |highest| highest + 1)
        })
    }
}
