//! Facade services consumed by presentation logic.
//!
//! # Responsibility
//! - Expose narrow read/write views over the task repository.
//! - Keep presentation callers decoupled from storage details.

pub mod editor_service;
pub mod list_service;
