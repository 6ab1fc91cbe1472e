//! Core domain logic for Taskpad.
//! This crate is the single source of truth for task data and its
//! publish-on-write update protocol.

pub mod logging;
pub mod model;
pub mod observe;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{Task, TaskId};
pub use observe::state_cell::{Mutation, StateCell, StateReader, Subscription};
pub use repo::task_repo::{
    InMemoryTaskRepository, RepoError, RepoResult, SaveOutcome, TaskRepository,
};
pub use service::editor_service::TaskEditorService;
pub use service::list_service::TaskListService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
